//! CurrentUser extractor
//!
//! Lets handlers take `CurrentUser` directly. Reuses the value injected by
//! [`super::require_auth`] and only validates the token itself when the
//! middleware did not run.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let token = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(JwtService::extract_from_header)
            .ok_or_else(|| {
                security_log!("WARN", "auth_missing", uri = parts.uri);
                AppError::unauthorized()
            })?;

        let claims = state.jwt_service.validate_token(token).map_err(|e| {
            security_log!("WARN", "auth_failed", error = e, uri = parts.uri);
            match e {
                JwtError::ExpiredToken => AppError::token_expired(),
                _ => AppError::invalid_token("Invalid token"),
            }
        })?;

        let user = CurrentUser::try_from(claims)
            .map_err(|e| AppError::invalid_token(format!("Malformed JWT claims: {e}")))?;
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
