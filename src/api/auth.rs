use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::api::AppState;
use crate::errors::PortalError;

/// Bearer-token gate for the read endpoints. Inactive when no token is
/// configured on the state; the upload and health endpoints never pass
/// through here.
pub async fn api_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, PortalError> {
    let Some(expected) = state.api_token.as_deref() else {
        return Ok(next.run(request).await);
    };

    let supplied = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match supplied {
        Some(token) if token == expected => Ok(next.run(request).await),
        Some(_) => Err(PortalError::Auth("invalid API token".to_string())),
        None => Err(PortalError::Auth("missing bearer token".to_string())),
    }
}
