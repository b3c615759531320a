//! Product API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::audit_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::inventory;
use crate::utils::AppResult;
use shared::models::{Product, ProductCreate, ProductRestock};

/// GET /api/products/{key} - by code, falling back to name
pub async fn get_by_key(
    State(state): State<ServerState>,
    Path(key): Path<String>,
) -> AppResult<Json<Product>> {
    Ok(Json(inventory::get_product(&state.pool, &key).await?))
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    let product = inventory::create_product(&state.pool, payload).await?;

    audit_log!(
        "product.created",
        "product",
        product.id,
        operator_id = current_user.id,
        code = product.code,
        stock = product.stock
    );
    Ok(Json(product))
}

/// POST /api/products/{key}/restock
pub async fn restock(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(key): Path<String>,
    Json(payload): Json<ProductRestock>,
) -> AppResult<Json<Product>> {
    let product = inventory::restock(&state.pool, &key, payload.quantity).await?;

    audit_log!(
        "product.restocked",
        "product",
        product.id,
        operator_id = current_user.id,
        quantity = payload.quantity,
        stock = product.stock
    );
    Ok(Json(product))
}
