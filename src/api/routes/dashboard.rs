use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::aggregate::{build_repo_summary, build_trend, TREND_WINDOW};
use crate::api::AppState;
use crate::errors::PortalError;
use crate::models::Severity;

/// Dashboard aggregates: overall counts, per-repo rollup, and the trend
/// over the last ten scans. All derived on this read.
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<Value>, PortalError> {
    let (findings, scans) = super::load_all(&state.db)?;

    let high = findings.iter().filter(|f| f.severity == Severity::High).count();
    let low = findings.iter().filter(|f| f.severity == Severity::Low).count();

    Ok(Json(json!({
        "total": findings.len(),
        "high": high,
        "low": low,
        "repo_summary": build_repo_summary(&findings),
        "trend": build_trend(&scans, TREND_WINDOW),
    })))
}
