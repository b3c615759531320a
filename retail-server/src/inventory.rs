//! Product catalog and stock
//!
//! Sales only reserve and release stock through the order flows; this module
//! covers lookups, registration and restocking.

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{Product, ProductCreate, ProductType};
use shared::money;
use sqlx::SqlitePool;

use crate::db::repository::product::{self, NewProduct};
use crate::db::repository::RepoError;
use crate::utils::ServiceResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_QUANTITY, MAX_SHORT_TEXT_LEN, require_text};

fn product_not_found(key: &str) -> AppError {
    AppError::with_message(ErrorCode::ProductNotFound, format!("Product {key} not found"))
        .with_detail("product", key)
}

/// Look a product up by code, then by name
pub async fn get_product(pool: &SqlitePool, key: &str) -> ServiceResult<Product> {
    let key = key.trim();
    product::find_by_key(pool, key)
        .await?
        .map(Into::into)
        .ok_or_else(|| product_not_found(key).into())
}

pub async fn create_product(pool: &SqlitePool, data: ProductCreate) -> ServiceResult<Product> {
    let code = require_text(&data.code, "code", MAX_SHORT_TEXT_LEN, ErrorCode::RequiredField)?;
    let name = require_text(&data.name, "name", MAX_NAME_LEN, ErrorCode::RequiredField)?;

    let price = money::round_money(data.unit_price);
    if price < Decimal::ZERO || price > money::MAX_AMOUNT {
        return Err(AppError::new(ErrorCode::ProductInvalidPrice)
            .with_detail("unit_price", data.unit_price.to_string())
            .into());
    }
    let unit_price = money::to_cents(price).ok_or_else(|| AppError::new(ErrorCode::ProductInvalidPrice))?;

    if data.stock < 0 {
        return Err(AppError::with_message(ErrorCode::ValueOutOfRange, "Stock cannot be negative").into());
    }
    if data.product_type == ProductType::MadeToOrder && data.stock != 0 {
        return Err(AppError::with_message(
            ErrorCode::ProductNotStocked,
            "Made-to-order products cannot hold stock",
        )
        .into());
    }

    let new_product = NewProduct {
        code,
        name,
        unit_price,
        stock: data.stock,
        product_type: data.product_type,
    };
    let row = match product::create(pool, new_product).await {
        Ok(row) => row,
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::with_message(
                ErrorCode::ProductAlreadyExists,
                format!("Product {} already exists", data.code.trim()),
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(product_id = row.id, code = %row.code, "Product created");
    Ok(row.into())
}

/// Add `quantity` units to a stocked product
pub async fn restock(pool: &SqlitePool, key: &str, quantity: i64) -> ServiceResult<Product> {
    if quantity <= 0 || quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!("Restock quantity must be between 1 and {MAX_QUANTITY}"),
        )
        .with_detail("quantity", quantity)
        .into());
    }

    let key = key.trim();
    let found = product::find_by_key(pool, key)
        .await?
        .ok_or_else(|| product_not_found(key))?;
    if found.product_type != ProductType::Stocked {
        return Err(AppError::with_message(
            ErrorCode::ProductNotStocked,
            format!("{} is made to order and holds no stock", found.name),
        )
        .into());
    }

    product::increment_stock(pool, found.id, quantity).await?;
    let updated = product::find_by_id(pool, found.id)
        .await?
        .ok_or_else(|| product_not_found(key))?;

    tracing::info!(product_id = updated.id, quantity, stock = updated.stock, "Product restocked");
    Ok(updated.into())
}
