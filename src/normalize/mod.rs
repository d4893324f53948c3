pub mod trivy;
pub mod yamllint;

use crate::models::{scan_time_now, Finding, Severity};

/// Output contract every scanner converter must satisfy: normalized
/// findings plus fresh run metadata for one invocation.
#[derive(Debug, Clone)]
pub struct NormalizedRun {
    pub findings: Vec<Finding>,
    pub run_id: String,
    pub scan_time: String,
}

impl NormalizedRun {
    /// Wraps `findings` with a fresh run_id and the current scan_time.
    pub fn new(findings: Vec<Finding>) -> Self {
        Self {
            findings,
            run_id: uuid::Uuid::new_v4().to_string(),
            scan_time: scan_time_now(),
        }
    }
}

/// Collapses a vendor severity label to the portal's two levels. This is
/// the only place vendor vocabularies are interpreted; the store and the
/// aggregator never re-map.
pub fn normalize_severity(vendor: &str) -> Severity {
    match vendor.to_ascii_uppercase().as_str() {
        "CRITICAL" | "HIGH" => Severity::High,
        _ => Severity::Low,
    }
}
