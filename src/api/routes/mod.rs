pub mod dashboard;
pub mod findings;
pub mod health;
pub mod history;
pub mod repos;
pub mod upload;

use crate::db::Database;
use crate::errors::PortalError;
use crate::models::{Finding, Scan};

/// Reads the full scan history and flattens its findings. Every read
/// endpoint goes through the store; there is no in-memory mirror to go
/// stale.
pub(crate) fn load_all(db: &Database) -> Result<(Vec<Finding>, Vec<Scan>), PortalError> {
    let scans = db.load_scans()?;
    let findings = scans.iter().flat_map(|s| s.findings.iter().cloned()).collect();
    Ok((findings, scans))
}
