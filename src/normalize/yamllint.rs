use crate::models::{Finding, Severity};

use super::NormalizedRun;

/// Converts yamllint `-f parsable` output into a normalized run.
///
/// Each line looks like `path/to/file.yml:12:3: [error] message (rule)`.
/// The repo is the first path segment unless `repo` overrides it; severity
/// is HIGH for error-level messages and LOW for everything else.
pub fn normalize_output(output: &str, repo: Option<&str>) -> NormalizedRun {
    let mut findings = Vec::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() < 4 {
            continue;
        }

        let file = parts[0].trim();
        let message = parts[3..].join(":").trim().to_string();
        let severity = if message.to_lowercase().contains("error") {
            Severity::High
        } else {
            Severity::Low
        };

        let repo = repo
            .map(str::to_string)
            .unwrap_or_else(|| file.split('/').next().unwrap_or("unknown").to_string());

        findings.push(Finding {
            tool: "yamllint".to_string(),
            repo,
            file: file.to_string(),
            severity,
            message,
        });
    }

    NormalizedRun::new(findings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: &str = "\
infra/deploy.yml:3:1: [error] syntax error: expected <block end> (syntax)
infra/deploy.yml:10:81: [warning] line too long (81 > 80 characters) (line-length)
app/config.yml:1:1: [warning] missing document start \"---\" (document-start)
";

    #[test]
    fn test_yamllint_output_normalized() {
        let run = normalize_output(OUTPUT, None);
        assert_eq!(run.findings.len(), 3);

        let f = &run.findings[0];
        assert_eq!(f.tool, "yamllint");
        assert_eq!(f.repo, "infra");
        assert_eq!(f.file, "infra/deploy.yml");
        assert_eq!(f.severity, Severity::High);
        assert!(f.message.contains("syntax error"));

        assert_eq!(run.findings[1].severity, Severity::Low);
        assert_eq!(run.findings[2].repo, "app");
    }

    #[test]
    fn test_yamllint_repo_override() {
        let run = normalize_output(OUTPUT, Some("security-portal"));
        assert!(run.findings.iter().all(|f| f.repo == "security-portal"));
    }

    #[test]
    fn test_yamllint_skips_blank_and_short_lines() {
        let run = normalize_output("\n\nnot a finding\n", None);
        assert!(run.findings.is_empty());
    }

    #[test]
    fn test_yamllint_message_keeps_embedded_colons() {
        let run = normalize_output("a/b.yml:1:1: [error] mapping values: not allowed here (x)", None);
        assert_eq!(run.findings[0].message, "[error] mapping values: not allowed here (x)");
    }
}
