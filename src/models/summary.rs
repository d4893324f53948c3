use serde::{Deserialize, Serialize};

/// Pass/fail verdict for a repo, derived from its findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepoStatus {
    Passed,
    Failed,
}

/// Per-repo rollup of finding counts. Derived, never persisted; rebuilt
/// from scratch on every read so it cannot drift from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub total: i64,
    pub high: i64,
    pub low: i64,
    pub status: RepoStatus,
}

impl Default for RepoSummary {
    fn default() -> Self {
        Self {
            total: 0,
            high: 0,
            low: 0,
            status: RepoStatus::Passed,
        }
    }
}

/// One point of the scan-history trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub scan_time: String,
    pub high: i64,
    pub low: i64,
}
