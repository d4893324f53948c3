use crate::errors::{PortalError, StoreError};
use crate::models::{Finding, Scan, Severity};

use super::Database;

impl Database {
    /// Persists a scan header and all of its findings in one transaction.
    ///
    /// The header insert is idempotent by run_id (skip-on-conflict), but
    /// finding rows are always appended. Re-submitting a run_id therefore
    /// duplicates findings; CI callers that retry must reuse the response
    /// of the first successful upload instead.
    pub fn save_scan(&self, scan: &Scan) -> Result<(), PortalError> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn
            .transaction()
            .map_err(|e| StoreError::IoFailure(format!("Failed to begin transaction: {}", e)))?;

        tx.execute(
            "INSERT OR IGNORE INTO scans (run_id, scan_time, total, high, low) VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![scan.run_id, scan.scan_time, scan.total, scan.high, scan.low],
        )
        .map_err(|e| StoreError::IoFailure(format!("Failed to insert scan: {}", e)))?;

        for finding in &scan.findings {
            tx.execute(
                "INSERT INTO findings (run_id, tool, repo, file, severity, message) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    scan.run_id,
                    finding.tool,
                    finding.repo,
                    finding.file,
                    finding.severity.as_str(),
                    finding.message,
                ],
            )
            .map_err(|e| StoreError::IoFailure(format!("Failed to insert finding: {}", e)))?;
        }

        tx.commit()
            .map_err(|e| StoreError::IoFailure(format!("Failed to commit scan: {}", e)))?;
        Ok(())
    }

    /// Loads every stored scan in insertion order, findings populated per
    /// run_id. An empty store yields an empty Vec.
    pub fn load_scans(&self) -> Result<Vec<Scan>, PortalError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT run_id, scan_time, total, high, low FROM scans ORDER BY rowid")
            .map_err(|e| StoreError::IoFailure(format!("Query failed: {}", e)))?;

        let headers = stmt
            .query_map([], |row: &rusqlite::Row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            })
            .map_err(|e| StoreError::IoFailure(format!("Query error: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::IoFailure(format!("Row error: {}", e)))?;

        let mut findings_stmt = conn
            .prepare("SELECT tool, repo, file, severity, message FROM findings WHERE run_id = ?1 ORDER BY id")
            .map_err(|e| StoreError::IoFailure(format!("Query failed: {}", e)))?;

        let mut scans = Vec::with_capacity(headers.len());
        for (run_id, scan_time, total, high, low) in headers {
            let rows = findings_stmt
                .query_map(rusqlite::params![run_id], |row: &rusqlite::Row| {
                    let severity_str: String = row.get(3)?;
                    Ok(Finding {
                        tool: row.get(0)?,
                        repo: row.get(1)?,
                        file: row.get(2)?,
                        severity: match severity_str.as_str() {
                            "HIGH" => Severity::High,
                            _ => Severity::Low,
                        },
                        message: row.get(4)?,
                    })
                })
                .map_err(|e| StoreError::IoFailure(format!("Query error: {}", e)))?
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| StoreError::IoFailure(format!("Row error: {}", e)))?;

            scans.push(Scan {
                run_id,
                scan_time,
                total,
                high,
                low,
                findings: rows,
            });
        }
        Ok(scans)
    }
}
