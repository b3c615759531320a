//! Staff accounts: registration, updates and deactivation

mod common;

use common::setup;
use retail_server::db::repository::employee;
use retail_server::employees;
use shared::error::{ErrorCode, ErrorKind};
use shared::models::{EmployeeCreate, EmployeeRole, EmployeeUpdate};

fn new_employee(name: &str, email: &str, role: EmployeeRole) -> EmployeeCreate {
    EmployeeCreate {
        name: name.into(),
        email: email.into(),
        password: "correct-horse".into(),
        role,
    }
}

#[tokio::test]
async fn create_stores_a_verifiable_hash() {
    let db = setup().await;

    let created = employees::create_employee(
        &db.pool,
        new_employee(" Carla ", "Carla@Example.com", EmployeeRole::Cashier),
    )
    .await
    .unwrap();
    assert_eq!(created.name, "Carla");
    assert_eq!(created.email, "carla@example.com");
    assert_eq!(created.role, EmployeeRole::Cashier);
    assert!(created.is_active);

    let row = employee::find_by_email(&db.pool, "carla@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(row.password_hash, "correct-horse");
    assert!(row.verify_password("correct-horse").unwrap());
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let db = setup().await;
    employees::create_employee(
        &db.pool,
        new_employee("Carla", "carla@example.com", EmployeeRole::Cashier),
    )
    .await
    .unwrap();

    let err = employees::create_employee(
        &db.pool,
        new_employee("Other Carla", "CARLA@example.com", EmployeeRole::Seller),
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::EmployeeEmailExists);
    assert_eq!(err.kind(), ErrorKind::Conflict);

    // Same rule when an update takes an address already in use
    let sergio = employees::create_employee(
        &db.pool,
        new_employee("Sergio", "sergio@example.com", EmployeeRole::Seller),
    )
    .await
    .unwrap();
    let err = employees::update_employee(
        &db.pool,
        sergio.id,
        EmployeeUpdate {
            email: Some("carla@example.com".into()),
            ..Default::default()
        },
        db.manager.id,
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::EmployeeEmailExists);
}

#[tokio::test]
async fn create_validates_input() {
    let db = setup().await;

    let err = employees::create_employee(&db.pool, new_employee("  ", "a@example.com", EmployeeRole::Seller))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::RequiredField);

    let err = employees::create_employee(&db.pool, new_employee("Ana", "not-an-email", EmployeeRole::Seller))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationFailed);

    let err = employees::create_employee(
        &db.pool,
        EmployeeCreate {
            password: "short".into(),
            ..new_employee("Ana", "ana@example.com", EmployeeRole::Seller)
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationFailed);

    assert_eq!(employees::list_employees(&db.pool, true).await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_changes_role_and_password() {
    let db = setup().await;
    let sergio = employees::create_employee(
        &db.pool,
        new_employee("Sergio", "sergio@example.com", EmployeeRole::Seller),
    )
    .await
    .unwrap();

    let updated = employees::update_employee(
        &db.pool,
        sergio.id,
        EmployeeUpdate {
            role: Some(EmployeeRole::Stocker),
            password: Some("battery-staple".into()),
            ..Default::default()
        },
        db.manager.id,
    )
    .await
    .unwrap();
    assert_eq!(updated.role, EmployeeRole::Stocker);
    assert_eq!(updated.name, "Sergio");
    assert_eq!(updated.email, "sergio@example.com");

    let row = employee::find_by_id(&db.pool, sergio.id).await.unwrap().unwrap();
    assert!(row.verify_password("battery-staple").unwrap());
    assert!(!row.verify_password("correct-horse").unwrap());

    let err = employees::update_employee(&db.pool, 424_242, EmployeeUpdate::default(), db.manager.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::EmployeeNotFound);
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn deactivated_employees_leave_the_default_listing() {
    let db = setup().await;
    let sergio = employees::create_employee(
        &db.pool,
        new_employee("Sergio", "sergio@example.com", EmployeeRole::Seller),
    )
    .await
    .unwrap();

    let deactivated = employees::deactivate_employee(&db.pool, sergio.id, db.manager.id)
        .await
        .unwrap();
    assert!(!deactivated.is_active);

    let active = employees::list_employees(&db.pool, false).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, db.manager.id);

    let all = employees::list_employees(&db.pool, true).await.unwrap();
    assert_eq!(all.len(), 2);

    // The row stays, so history keeps resolving
    let fetched = employees::get_employee(&db.pool, sergio.id).await.unwrap();
    assert!(!fetched.is_active);

    let err = employees::deactivate_employee(&db.pool, 424_242, db.manager.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::EmployeeNotFound);
}

#[tokio::test]
async fn managers_cannot_lock_themselves_out() {
    let db = setup().await;

    let err = employees::deactivate_employee(&db.pool, db.manager.id, db.manager.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidRequest);

    let err = employees::update_employee(
        &db.pool,
        db.manager.id,
        EmployeeUpdate {
            role: Some(EmployeeRole::Seller),
            ..Default::default()
        },
        db.manager.id,
    )
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    // Renaming yourself is fine
    let renamed = employees::update_employee(
        &db.pool,
        db.manager.id,
        EmployeeUpdate {
            name: Some("Marta Silva".into()),
            ..Default::default()
        },
        db.manager.id,
    )
    .await
    .unwrap();
    assert_eq!(renamed.name, "Marta Silva");
    assert_eq!(renamed.role, EmployeeRole::Manager);
}
