//! Shared fixtures for the integration tests
//!
//! Each test gets its own SQLite file in a temp directory, migrated and
//! seeded with one manager and two products:
//!
//! - `P-1`: stocked, 5.00 per unit, 10 in stock
//! - `M-1`: made-to-order, 2.00 per unit of area

#![allow(dead_code)]

use retail_server::db::DbService;
use retail_server::db::models::EmployeeRow;
use retail_server::db::repository::employee;
use retail_server::{cash, inventory};
use rust_decimal::Decimal;
use shared::models::{EmployeeCreate, EmployeeRole, OrderItemInput, ProductCreate, ProductType};
use sqlx::SqlitePool;
use tempfile::TempDir;

pub struct TestDb {
    pub pool: SqlitePool,
    pub manager: EmployeeRow,
    // Dropped last; removes the database file
    _dir: TempDir,
}

pub fn dec(value: &str) -> Decimal {
    value.parse().expect("decimal literal")
}

pub async fn setup() -> TestDb {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("retail.db");
    let db = DbService::new(&path.to_string_lossy())
        .await
        .expect("open database");

    let manager = employee::create(
        &db.pool,
        EmployeeCreate {
            name: "Marta".into(),
            email: "marta@example.com".into(),
            password: "manager-pass".into(),
            role: EmployeeRole::Manager,
        },
    )
    .await
    .expect("seed manager");

    inventory::create_product(
        &db.pool,
        ProductCreate {
            code: "P-1".into(),
            name: "Shelf bracket".into(),
            unit_price: dec("5.00"),
            stock: 10,
            product_type: ProductType::Stocked,
        },
    )
    .await
    .expect("seed stocked product");

    inventory::create_product(
        &db.pool,
        ProductCreate {
            code: "M-1".into(),
            name: "Glass panel".into(),
            unit_price: dec("2.00"),
            stock: 0,
            product_type: ProductType::MadeToOrder,
        },
    )
    .await
    .expect("seed made-to-order product");

    TestDb {
        pool: db.pool,
        manager,
        _dir: dir,
    }
}

impl TestDb {
    pub async fn open_cash(&self) -> i64 {
        cash::open_session(&self.pool, Decimal::ZERO, self.manager.id)
            .await
            .expect("open cash session")
            .id
    }

    pub async fn stock(&self, key: &str) -> i64 {
        inventory::get_product(&self.pool, key)
            .await
            .expect("product exists")
            .stock
    }
}

pub fn stocked(product: &str, quantity: i64) -> OrderItemInput {
    OrderItemInput {
        product: product.into(),
        quantity,
        width: None,
        height: None,
    }
}

pub fn sized(product: &str, quantity: i64, width: &str, height: &str) -> OrderItemInput {
    OrderItemInput {
        product: product.into(),
        quantity,
        width: Some(dec(width)),
        height: Some(dec(height)),
    }
}
