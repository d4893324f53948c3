use serde::Deserialize;

use crate::errors::PortalError;
use crate::models::Finding;

use super::{normalize_severity, NormalizedRun};

/// Subset of a trivy JSON report the portal cares about.
#[derive(Debug, Deserialize)]
struct TrivyReport {
    #[serde(rename = "Results", default)]
    results: Vec<TrivyResult>,
}

#[derive(Debug, Deserialize)]
struct TrivyResult {
    #[serde(rename = "Target", default)]
    target: Option<String>,
    // Null when a target has no vulnerabilities.
    #[serde(rename = "Vulnerabilities", default)]
    vulnerabilities: Option<Vec<TrivyVulnerability>>,
}

#[derive(Debug, Deserialize)]
struct TrivyVulnerability {
    #[serde(rename = "PkgName", default)]
    pkg_name: Option<String>,
    #[serde(rename = "Severity", default)]
    severity: Option<String>,
    #[serde(rename = "Title", default)]
    title: Option<String>,
}

/// Converts a trivy image-scan JSON report into a normalized run.
///
/// `repo` overrides the per-target attribution when given, which matches
/// how CI pipelines tag a whole image scan with one name.
pub fn normalize_report(report_json: &str, repo: Option<&str>) -> Result<NormalizedRun, PortalError> {
    let report: TrivyReport = serde_json::from_str(report_json)
        .map_err(|e| PortalError::Report(format!("invalid trivy report: {}", e)))?;

    let mut findings = Vec::new();
    for result in report.results {
        let target = repo
            .map(str::to_string)
            .or_else(|| result.target.clone())
            .unwrap_or_else(|| "unknown".to_string());

        for vuln in result.vulnerabilities.unwrap_or_default() {
            findings.push(Finding {
                tool: "trivy".to_string(),
                repo: target.clone(),
                file: vuln.pkg_name.unwrap_or_default(),
                severity: normalize_severity(vuln.severity.as_deref().unwrap_or("")),
                message: vuln.title.unwrap_or_default(),
            });
        }
    }

    Ok(NormalizedRun::new(findings))
}
