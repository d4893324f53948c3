use crate::cli::commands::HistoryArgs;
use crate::db::Database;
use crate::errors::PortalError;

pub async fn handle_history(args: HistoryArgs) -> Result<(), PortalError> {
    let db = Database::new(&args.db)?;
    let scans = db.load_scans()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scans)?);
        return Ok(());
    }

    if scans.is_empty() {
        println!("No scans stored.");
        return Ok(());
    }

    for scan in &scans {
        println!(
            "{}  {}  total={} high={} low={}",
            scan.scan_time, scan.run_id, scan.total, scan.high, scan.low
        );
    }
    Ok(())
}
