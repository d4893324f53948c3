use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::errors::PortalError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), PortalError> {
    info!(host = %args.host, port = args.port, db = %args.db, "Starting API server");

    let state = api::create_app_state(&args.db)?;
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| PortalError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
