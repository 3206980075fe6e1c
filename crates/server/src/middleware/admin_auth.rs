//! Access control for the `/manage` routes.
//!
//! The admin panel has no login flow; access is gated by a shared token
//! configured via `MINIMART_ADMIN_TOKEN` and presented in the
//! `x-admin-token` request header. When no token is configured the panel is
//! open, which is only acceptable for local development - `main` logs a
//! warning at startup in that mode.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::state::AppState;

/// Request header carrying the admin token.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Extractor that enforces the admin gate on a handler.
///
/// # Example
///
/// ```rust,ignore
/// async fn manage_products(
///     _admin: RequireAdmin,
///     State(state): State<AppState>,
/// ) -> Result<impl IntoResponse> { /* ... */ }
/// ```
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let config = state.config();
        if !config.admin_gated() {
            return Ok(Self);
        }

        let presented = parts
            .headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok());

        match presented {
            Some(token) if config.admin_token_matches(token) => Ok(Self),
            Some(_) => Err(AppError::Unauthorized("invalid admin token".to_string())),
            None => Err(AppError::Unauthorized(format!(
                "missing {ADMIN_TOKEN_HEADER} header"
            ))),
        }
    }
}
