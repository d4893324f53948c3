use serde::{Deserialize, Serialize};

/// Severity of a finding after normalization. Scanner adapters collapse
/// richer vendor vocabularies (CRITICAL, MEDIUM, ...) to these two levels
/// before a finding reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Low => "LOW",
        }
    }
}

/// One reported issue from a scanning tool, normalized to the common shape.
/// Immutable once stored; correlation to its scan is carried by the parent
/// `Scan`'s run_id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The tool that produced this finding (e.g. "trivy", "yamllint").
    pub tool: String,
    /// Repository, image, or resource namespace the finding belongs to.
    #[serde(default = "default_repo")]
    pub repo: String,
    /// File path, package name, or resource the finding points at.
    pub file: String,
    pub severity: Severity,
    pub message: String,
}

fn default_repo() -> String {
    "unknown".to_string()
}
