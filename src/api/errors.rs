use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::errors::PortalError;

impl IntoResponse for PortalError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            PortalError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            PortalError::Report(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            PortalError::Auth(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, Json(json!({"error": message}))).into_response()
    }
}
