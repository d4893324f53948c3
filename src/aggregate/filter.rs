use serde::Deserialize;

use crate::models::{Finding, Severity};

/// Conjunctive finding filter. Every field is optional; an absent field
/// passes all findings through.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindingFilter {
    /// Exact severity match.
    pub severity: Option<Severity>,
    /// Exact tool match, case-sensitive as stored.
    pub tool: Option<String>,
    /// Case-insensitive substring match against file or message.
    pub search: Option<String>,
}

pub fn filter_findings(findings: &[Finding], filter: &FindingFilter) -> Vec<Finding> {
    let needle = filter.search.as_ref().map(|s| s.to_lowercase());

    findings
        .iter()
        .filter(|f| filter.severity.map_or(true, |sev| f.severity == sev))
        .filter(|f| filter.tool.as_ref().map_or(true, |tool| &f.tool == tool))
        .filter(|f| {
            needle.as_ref().map_or(true, |needle| {
                f.file.to_lowercase().contains(needle) || f.message.to_lowercase().contains(needle)
            })
        })
        .cloned()
        .collect()
}
