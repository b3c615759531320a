//! Order API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::audit_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::{reports, sales};
use shared::models::{
    Order, OrderCancel, OrderDetail, OrderItemsResult, OrderItemsSubmit, OrderOpen, OrderUnlock,
    PaymentApplication, PaymentCreate,
};

/// GET /api/orders/{order_number}
pub async fn get_detail(
    State(state): State<ServerState>,
    Path(order_number): Path<i64>,
) -> AppResult<Json<OrderDetail>> {
    Ok(Json(reports::order_detail(&state.pool, order_number).await?))
}

/// POST /api/orders - open an order attributed to the caller
pub async fn open(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<OrderOpen>,
) -> AppResult<Json<Order>> {
    let order = sales::open_order(&state.pool, &payload.client_name, current_user.id).await?;

    audit_log!(
        "order.opened",
        "order",
        order.order_number,
        operator_id = current_user.id,
        client = order.client_name
    );
    Ok(Json(order))
}

/// PUT /api/orders/{order_number}/items - replace the item set
pub async fn submit_items(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(order_number): Path<i64>,
    Json(payload): Json<OrderItemsSubmit>,
) -> AppResult<Json<OrderItemsResult>> {
    let result = sales::submit_items(&state.pool, order_number, &payload.items).await?;

    audit_log!(
        "order.items_submitted",
        "order",
        order_number,
        operator_id = current_user.id,
        lines = payload.items.len(),
        total = result.total
    );
    Ok(Json(result))
}

/// POST /api/orders/{order_number}/finalize
pub async fn finalize(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(order_number): Path<i64>,
) -> AppResult<Json<Order>> {
    let order = sales::finalize_order(&state.pool, order_number).await?;

    audit_log!(
        "order.finalized",
        "order",
        order_number,
        operator_id = current_user.id,
        total = order.total
    );
    Ok(Json(order))
}

/// POST /api/orders/{order_number}/unlock
pub async fn unlock(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(order_number): Path<i64>,
    Json(payload): Json<OrderUnlock>,
) -> AppResult<Json<Order>> {
    let order =
        sales::unlock_order(&state.pool, order_number, &payload.reason, &payload.authorizer)
            .await?;

    audit_log!(
        "order.unlocked",
        "order",
        order_number,
        operator_id = current_user.id,
        authorizer = payload.authorizer.trim(),
        reason = payload.reason.trim()
    );
    Ok(Json(order))
}

/// POST /api/orders/{order_number}/cancel
pub async fn cancel(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(order_number): Path<i64>,
    Json(payload): Json<OrderCancel>,
) -> AppResult<Json<Order>> {
    let order = sales::cancel_order(&state.pool, order_number, &payload.reason).await?;

    audit_log!(
        "order.cancelled",
        "order",
        order_number,
        operator_id = current_user.id,
        status = order.status.as_str(),
        reason = payload.reason.trim()
    );
    Ok(Json(order))
}

/// POST /api/orders/{order_number}/payments
pub async fn apply_payment(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(order_number): Path<i64>,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<Json<PaymentApplication>> {
    let application =
        sales::apply_payment(&state.pool, order_number, payload.amount, &payload.method).await?;

    audit_log!(
        "payment.applied",
        "order",
        order_number,
        operator_id = current_user.id,
        amount = application.applied,
        method = payload.method.trim()
    );
    Ok(Json(application))
}
