use std::collections::BTreeMap;

use crate::models::{Finding, RepoStatus, RepoSummary, Severity};

/// Rolls findings up into per-repo counts in a single pass.
///
/// Status flips to Failed the first time a HIGH finding is seen for a repo
/// and never reverts, so iteration order cannot change the result.
pub fn build_repo_summary(findings: &[Finding]) -> BTreeMap<String, RepoSummary> {
    let mut summary: BTreeMap<String, RepoSummary> = BTreeMap::new();

    for finding in findings {
        let entry = summary.entry(finding.repo.clone()).or_default();
        entry.total += 1;
        match finding.severity {
            Severity::High => {
                entry.high += 1;
                entry.status = RepoStatus::Failed;
            }
            Severity::Low => entry.low += 1,
        }
    }

    summary
}
