pub mod auth;
pub mod errors;
pub mod routes;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::db::Database;
use crate::errors::PortalError;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    /// Bearer token required on read endpoints. None disables the check.
    pub api_token: Option<String>,
}

pub fn create_app_state(db_path: &str) -> Result<AppState, PortalError> {
    Ok(AppState {
        db: Database::new(db_path)?,
        api_token: std::env::var("SECPORTAL_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty()),
    })
}

pub fn build_router(state: AppState) -> Router {
    // Read endpoints sit behind the optional token check; the upload
    // endpoint stays open for CI callers, access control for it is the
    // deployment's concern.
    let read_routes = Router::new()
        .route("/api/summary", get(routes::dashboard::get_summary))
        .route("/api/repos", get(routes::repos::list_repos))
        .route("/api/repos/:name", get(routes::repos::get_repo))
        .route("/api/findings", get(routes::findings::list_findings))
        .route("/api/history", get(routes::history::get_history))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::api_auth_middleware,
        ));

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/upload-scan", post(routes::upload::upload_scan))
        .merge(read_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
