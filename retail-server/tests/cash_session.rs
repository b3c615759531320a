//! Cash register sessions and the movement ledger

mod common;

use common::{dec, setup, stocked};
use retail_server::{cash, sales};
use rust_decimal::Decimal;
use shared::error::{ErrorCode, ErrorKind};
use shared::models::{CashMovementCreate, CashSessionStatus, MovementDirection};

fn movement(direction: MovementDirection, amount: &str, description: &str) -> CashMovementCreate {
    CashMovementCreate {
        direction,
        amount: dec(amount),
        description: description.into(),
        note: None,
    }
}

#[tokio::test]
async fn only_one_session_can_be_open() {
    let db = setup().await;
    let first = cash::open_session(&db.pool, dec("50.00"), db.manager.id)
        .await
        .unwrap();
    assert_eq!(first.status, CashSessionStatus::Open);
    assert_eq!(first.responsible_name, "Marta");

    let err = cash::open_session(&db.pool, dec("10.00"), db.manager.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::CashSessionAlreadyOpen);
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    let current = cash::current_session(&db.pool).await.unwrap().unwrap();
    assert_eq!(current.id, first.id);
}

#[tokio::test]
async fn concurrent_opens_yield_a_single_session() {
    let db = setup().await;

    let mut handles = Vec::new();
    for _ in 0..4 {
        let pool = db.pool.clone();
        let responsible = db.manager.id;
        handles.push(tokio::spawn(async move {
            cash::open_session(&pool, Decimal::ZERO, responsible).await
        }));
    }

    let mut opened = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => opened += 1,
            Err(e) => assert_eq!(e.code(), ErrorCode::CashSessionAlreadyOpen),
        }
    }
    assert_eq!(opened, 1);
}

#[tokio::test]
async fn close_computes_balance_from_movements() {
    let db = setup().await;
    let session = cash::open_session(&db.pool, dec("100.00"), db.manager.id)
        .await
        .unwrap();

    let order = sales::open_order(&db.pool, "Acme", db.manager.id).await.unwrap();
    sales::submit_items(&db.pool, order.order_number, &[stocked("P-1", 4)])
        .await
        .unwrap();
    sales::apply_payment(&db.pool, order.order_number, dec("20.00"), "cash")
        .await
        .unwrap();
    cash::append_movement(&db.pool, movement(MovementDirection::Out, "7.50", "Courier"))
        .await
        .unwrap();
    cash::append_movement(&db.pool, movement(MovementDirection::In, "30.00", "Change fund"))
        .await
        .unwrap();

    let report = cash::session_report(&db.pool, session.id).await.unwrap();
    assert_eq!(report.movements.len(), 3);
    assert_eq!(report.total_in, dec("50.00"));
    assert_eq!(report.total_out, dec("7.50"));
    assert_eq!(report.balance, dec("142.50"));

    let closed = cash::close_session(&db.pool, session.id).await.unwrap();
    assert_eq!(closed.status, CashSessionStatus::Closed);
    assert_eq!(closed.closing_balance, Some(dec("142.50")));
    assert!(closed.closed_at.is_some());
    assert!(cash::current_session(&db.pool).await.unwrap().is_none());
}

#[tokio::test]
async fn close_errors_for_closed_and_unknown_sessions() {
    let db = setup().await;
    let session_id = db.open_cash().await;
    cash::close_session(&db.pool, session_id).await.unwrap();

    let err = cash::close_session(&db.pool, session_id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::CashSessionClosed);
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    let err = cash::close_session(&db.pool, 424_242).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::CashSessionNotFound);
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = cash::session_report(&db.pool, 424_242).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::CashSessionNotFound);
}

#[tokio::test]
async fn a_new_session_can_open_after_close() {
    let db = setup().await;
    let first = db.open_cash().await;
    cash::close_session(&db.pool, first).await.unwrap();

    let second = db.open_cash().await;
    assert_ne!(first, second);

    // Movements land in the session that is open now
    let recorded = cash::append_movement(&db.pool, movement(MovementDirection::In, "5.00", "Float"))
        .await
        .unwrap();
    assert_eq!(recorded.session_id, second);
    let old = cash::session_report(&db.pool, first).await.unwrap();
    assert!(old.movements.is_empty());
}

#[tokio::test]
async fn movement_rules() {
    let db = setup().await;

    let err = cash::append_movement(&db.pool, movement(MovementDirection::In, "5.00", "Float"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoOpenCashSession);

    db.open_cash().await;

    let err = cash::append_movement(&db.pool, movement(MovementDirection::Out, "0", "Nothing"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::CashMovementInvalidAmount);

    let err = cash::append_movement(&db.pool, movement(MovementDirection::Out, "-3.00", "Refund"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = cash::append_movement(&db.pool, movement(MovementDirection::Out, "3.00", "  "))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::RequiredField);

    let recorded = cash::append_movement(
        &db.pool,
        CashMovementCreate {
            note: Some("Monday delivery".into()),
            ..movement(MovementDirection::Out, "12.30", "Supplier")
        },
    )
    .await
    .unwrap();
    assert_eq!(recorded.amount, dec("12.30"));
    assert_eq!(recorded.order_number, None);
    assert_eq!(recorded.note.as_deref(), Some("Monday delivery"));
}

#[tokio::test]
async fn opening_balance_must_be_non_negative() {
    let db = setup().await;

    let err = cash::open_session(&db.pool, dec("-1.00"), db.manager.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValueOutOfRange);

    let err = cash::open_session(&db.pool, Decimal::ZERO, 77)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::EmployeeNotFound);

    assert!(cash::current_session(&db.pool).await.unwrap().is_none());
}
