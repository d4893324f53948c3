use crate::cli::commands::ConvertArgs;
use crate::errors::PortalError;
use crate::models::Scan;
use crate::normalize::{trivy, yamllint, NormalizedRun};

pub async fn handle_convert(args: ConvertArgs) -> Result<(), PortalError> {
    let content = tokio::fs::read_to_string(&args.input).await?;
    let repo = args.repo.as_deref();

    let run: NormalizedRun = match args.tool.as_str() {
        "trivy" => trivy::normalize_report(&content, repo)?,
        "yamllint" => yamllint::normalize_output(&content, repo),
        other => {
            return Err(PortalError::Report(format!(
                "unsupported tool '{}', expected trivy or yamllint",
                other
            )))
        }
    };

    let scan = Scan::from_findings(run.run_id, run.scan_time, run.findings);
    tokio::fs::write(&args.output, serde_json::to_string_pretty(&scan)?).await?;

    println!(
        "{} created from {} output ({} findings)",
        args.output, args.tool, scan.total
    );
    Ok(())
}
