use serde::Deserialize;
use tracing::info;

use crate::db::Database;
use crate::errors::{PortalError, ValidationError};
use crate::models::{scan_time_now, Finding, Scan, Severity};

/// Inbound scan payload as CI callers send it. Everything except the
/// findings list is optional; the gateway fills in what is missing.
///
/// All fields are untrusted. The gateway checks structural shape only:
/// individual finding fields pass through as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanPayload {
    pub run_id: Option<String>,
    pub scan_time: Option<String>,
    pub total: Option<i64>,
    pub high: Option<i64>,
    pub low: Option<i64>,
    pub findings: Option<Vec<Finding>>,
}

/// Validates an upload, fills absent scan-level fields, and writes the
/// scan through the store. Returns the scan as persisted.
///
/// Supplied counts are trusted (the store never recomputes on read);
/// absent counts are computed from the findings here.
pub fn upload_scan(db: &Database, payload: ScanPayload) -> Result<Scan, PortalError> {
    let findings = payload.findings.ok_or(ValidationError::MissingFindings)?;

    let run_id = payload
        .run_id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let scan_time = payload.scan_time.unwrap_or_else(scan_time_now);

    let scan = Scan {
        run_id,
        scan_time,
        total: payload.total.unwrap_or(findings.len() as i64),
        high: payload
            .high
            .unwrap_or_else(|| count_severity(&findings, Severity::High)),
        low: payload
            .low
            .unwrap_or_else(|| count_severity(&findings, Severity::Low)),
        findings,
    };

    db.save_scan(&scan)?;
    info!(run_id = %scan.run_id, total = scan.total, high = scan.high, "Scan ingested");
    Ok(scan)
}

fn count_severity(findings: &[Finding], severity: Severity) -> i64 {
    findings.iter().filter(|f| f.severity == severity).count() as i64
}
