use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::audit_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::{reports, sales};
use shared::models::{ClientPaymentResult, ClientStatement, PaymentCreate};

/// POST /api/clients/{client_name}/payments - spread over open orders, oldest first
pub async fn apply_payment(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(client_name): Path<String>,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<Json<ClientPaymentResult>> {
    let result =
        sales::apply_client_payment(&state.pool, &client_name, payload.amount, &payload.method)
            .await?;

    audit_log!(
        "payment.client_applied",
        "client",
        result.client_name,
        operator_id = current_user.id,
        orders = result.applications.len(),
        remainder = result.remainder
    );
    Ok(Json(result))
}

/// GET /api/clients/{client_name}/statement
pub async fn statement(
    State(state): State<ServerState>,
    Path(client_name): Path<String>,
) -> AppResult<Json<ClientStatement>> {
    Ok(Json(reports::client_statement(&state.pool, &client_name).await?))
}
