use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::AppState;
use crate::errors::PortalError;

/// Export boundary: the full ordered scan history, each scan with its
/// findings nested, exactly as the store returns it.
pub async fn get_history(State(state): State<AppState>) -> Result<Json<Value>, PortalError> {
    let scans = state.db.load_scans()?;
    Ok(Json(json!({
        "total": scans.len(),
        "scans": scans,
    })))
}
