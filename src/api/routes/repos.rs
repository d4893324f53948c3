use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::aggregate::build_repo_summary;
use crate::api::AppState;
use crate::errors::PortalError;
use crate::models::Severity;

pub async fn list_repos(State(state): State<AppState>) -> Result<Json<Value>, PortalError> {
    let (findings, _) = super::load_all(&state.db)?;
    Ok(Json(json!({ "repos": build_repo_summary(&findings) })))
}

/// Drill-down for one repo. A repo with no stored findings yields an
/// empty result set rather than a 404.
pub async fn get_repo(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, PortalError> {
    let (findings, _) = super::load_all(&state.db)?;
    let repo_findings: Vec<_> = findings.into_iter().filter(|f| f.repo == name).collect();

    let high = repo_findings.iter().filter(|f| f.severity == Severity::High).count();
    let low = repo_findings.iter().filter(|f| f.severity == Severity::Low).count();

    Ok(Json(json!({
        "repo": name,
        "total": repo_findings.len(),
        "high": high,
        "low": low,
        "findings": repo_findings,
    })))
}
