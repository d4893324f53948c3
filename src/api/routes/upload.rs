use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::api::AppState;
use crate::errors::PortalError;
use crate::ingest::{self, ScanPayload};

/// Ingestion boundary for CI callers. Unauthenticated by default; the
/// payload is validated for shape only and individual finding fields
/// pass through untrusted.
pub async fn upload_scan(
    State(state): State<AppState>,
    Json(payload): Json<ScanPayload>,
) -> Result<(StatusCode, Json<Value>), PortalError> {
    let scan = ingest::upload_scan(&state.db, payload)?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "Scan uploaded successfully",
            "run_id": scan.run_id,
            "total": scan.total,
        })),
    ))
}
