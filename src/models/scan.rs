use serde::{Deserialize, Serialize};

use super::finding::{Finding, Severity};

/// Textual timestamp format shared by every scan producer.
pub const SCAN_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Returns the current time in the portal's fixed scan_time format.
pub fn scan_time_now() -> String {
    chrono::Utc::now().format(SCAN_TIME_FORMAT).to_string()
}

/// One execution of one or more scanners: aggregate counts plus the
/// findings it produced. Created once at upload time, never updated.
///
/// Invariant at write time: `total == findings.len()`, `high`/`low` match
/// the severity counts. The store trusts these on read and never recomputes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scan {
    pub run_id: String,
    pub scan_time: String,
    pub total: i64,
    pub high: i64,
    pub low: i64,
    pub findings: Vec<Finding>,
}

impl Scan {
    /// Builds a scan header around `findings`, computing the counts.
    pub fn from_findings(run_id: String, scan_time: String, findings: Vec<Finding>) -> Self {
        let high = findings.iter().filter(|f| f.severity == Severity::High).count() as i64;
        let low = findings.iter().filter(|f| f.severity == Severity::Low).count() as i64;
        Self {
            run_id,
            scan_time,
            total: findings.len() as i64,
            high,
            low,
            findings,
        }
    }
}
