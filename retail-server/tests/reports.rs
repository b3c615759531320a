//! Sales and cash reports over date periods

mod common;

use chrono::NaiveDate;
use common::{dec, setup, stocked};
use retail_server::utils::time::date_of_millis;
use retail_server::{cash, employees, reports, sales};
use shared::error::{ErrorCode, ErrorKind};
use shared::models::{
    CashMovementCreate, EmployeeCreate, EmployeeRole, MovementDirection, OrderStatus,
};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn movement(direction: MovementDirection, amount: &str) -> CashMovementCreate {
    CashMovementCreate {
        direction,
        amount: dec(amount),
        description: "Float".into(),
        note: None,
    }
}

#[tokio::test]
async fn sales_summary_totals_period_and_sellers() {
    let db = setup().await;
    db.open_cash().await;
    let seller = employees::create_employee(
        &db.pool,
        EmployeeCreate {
            name: "Sergio".into(),
            email: "sergio@example.com".into(),
            password: "correct-horse".into(),
            role: EmployeeRole::Seller,
        },
    )
    .await
    .unwrap();

    let first = sales::open_order(&db.pool, "Acme", db.manager.id).await.unwrap();
    sales::submit_items(&db.pool, first.order_number, &[stocked("P-1", 3)])
        .await
        .unwrap();
    sales::finalize_order(&db.pool, first.order_number).await.unwrap();

    let second = sales::open_order(&db.pool, "Beta", seller.id).await.unwrap();
    sales::submit_items(&db.pool, second.order_number, &[stocked("P-1", 2)])
        .await
        .unwrap();
    sales::apply_payment(&db.pool, second.order_number, dec("4.00"), "cash")
        .await
        .unwrap();

    let from = date_of_millis(first.created_at).unwrap();
    let to = date_of_millis(second.created_at).unwrap();
    let report = reports::sales_summary(&db.pool, Some(from), Some(to), None)
        .await
        .unwrap();
    assert_eq!(report.order_count, 2);
    assert_eq!(report.total, dec("25.00"));
    assert_eq!(report.paid, dec("4.00"));
    assert_eq!(report.orders[0].order_number, second.order_number);

    assert_eq!(report.by_seller.len(), 2);
    assert_eq!(report.by_seller[0].seller_name, "Marta");
    assert_eq!(report.by_seller[0].total, dec("15.00"));
    assert_eq!(report.by_seller[1].seller_id, seller.id);
    assert_eq!(report.by_seller[1].order_count, 1);
    assert_eq!(report.by_seller[1].paid, dec("4.00"));

    // Open-ended periods and the status filter
    let completed = reports::sales_summary(&db.pool, None, None, Some(OrderStatus::Completed))
        .await
        .unwrap();
    assert_eq!(completed.order_count, 1);
    assert_eq!(completed.orders[0].order_number, first.order_number);

    let old = reports::sales_summary(&db.pool, Some(day("2000-01-01")), Some(day("2000-01-31")), None)
        .await
        .unwrap();
    assert_eq!(old.order_count, 0);
    assert_eq!(old.total, dec("0"));
    assert!(old.by_seller.is_empty());
}

#[tokio::test]
async fn inverted_period_is_rejected() {
    let db = setup().await;

    let err = reports::sales_summary(&db.pool, Some(day("2025-09-01")), Some(day("2025-08-01")), None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationFailed);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = cash::list_sessions(&db.pool, Some(day("2025-09-01")), Some(day("2025-08-01")))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationFailed);
}

#[tokio::test]
async fn session_listing_carries_per_session_and_period_totals() {
    let db = setup().await;

    let first = db.open_cash().await;
    cash::append_movement(&db.pool, movement(MovementDirection::In, "30.00"))
        .await
        .unwrap();
    cash::append_movement(&db.pool, movement(MovementDirection::Out, "5.00"))
        .await
        .unwrap();
    cash::close_session(&db.pool, first).await.unwrap();

    let second = cash::open_session(&db.pool, dec("10.00"), db.manager.id)
        .await
        .unwrap();
    cash::append_movement(&db.pool, movement(MovementDirection::In, "7.00"))
        .await
        .unwrap();

    let listing = cash::list_sessions(&db.pool, None, None).await.unwrap();
    assert_eq!(listing.sessions.len(), 2);
    assert_eq!(listing.sessions[0].session.id, second.id);
    assert_eq!(listing.sessions[0].balance, dec("17.00"));
    assert_eq!(listing.sessions[1].session.id, first);
    assert_eq!(listing.sessions[1].total_in, dec("30.00"));
    assert_eq!(listing.sessions[1].total_out, dec("5.00"));
    assert_eq!(listing.sessions[1].balance, dec("25.00"));
    assert_eq!(listing.total_in, dec("37.00"));
    assert_eq!(listing.total_out, dec("5.00"));
    assert_eq!(listing.net, dec("32.00"));

    let today = date_of_millis(second.opened_at).unwrap();
    let listing = cash::list_sessions(&db.pool, Some(today), None).await.unwrap();
    assert!(listing.sessions.iter().any(|s| s.session.id == second.id));

    let listing = cash::list_sessions(&db.pool, None, Some(day("2000-01-01")))
        .await
        .unwrap();
    assert!(listing.sessions.is_empty());
    assert_eq!(listing.net, dec("0"));
}

#[tokio::test]
async fn report_by_date_picks_the_first_session_of_the_day() {
    let db = setup().await;

    let first = db.open_cash().await;
    cash::append_movement(&db.pool, movement(MovementDirection::In, "12.00"))
        .await
        .unwrap();
    let closed = cash::close_session(&db.pool, first).await.unwrap();
    let second = db.open_cash().await;

    let opened_on = date_of_millis(closed.opened_at).unwrap();
    let report = cash::session_report_by_date(&db.pool, opened_on).await.unwrap();
    assert_eq!(report.session.id, first);
    assert_ne!(report.session.id, second);
    assert_eq!(report.movements.len(), 1);
    assert_eq!(report.balance, dec("12.00"));

    let err = cash::session_report_by_date(&db.pool, day("2000-01-01"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::CashSessionNotFound);
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
