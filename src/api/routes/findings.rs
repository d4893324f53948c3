use axum::extract::{Query, State};
use axum::Json;
use serde_json::{json, Value};

use crate::aggregate::{filter_findings, FindingFilter};
use crate::api::AppState;
use crate::errors::PortalError;

/// Filtered findings listing. Filters are conjunctive and all optional;
/// no query parameters means everything comes back.
pub async fn list_findings(
    State(state): State<AppState>,
    Query(filter): Query<FindingFilter>,
) -> Result<Json<Value>, PortalError> {
    let (findings, _) = super::load_all(&state.db)?;
    let filtered = filter_findings(&findings, &filter);

    Ok(Json(json!({
        "total": filtered.len(),
        "findings": filtered,
    })))
}
