use tracing::info;

use crate::cli::commands::UploadArgs;
use crate::db::Database;
use crate::errors::PortalError;
use crate::ingest::{self, ScanPayload};

pub async fn handle_upload(args: UploadArgs) -> Result<(), PortalError> {
    let content = tokio::fs::read_to_string(&args.file).await?;
    let payload: ScanPayload = serde_json::from_str(&content)?;

    let db = Database::new(&args.db)?;
    let scan = ingest::upload_scan(&db, payload)?;

    info!(run_id = %scan.run_id, "Scan uploaded");
    println!(
        "Uploaded scan {} ({} findings, {} high / {} low)",
        scan.run_id, scan.total, scan.high, scan.low
    );
    Ok(())
}
