pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS scans (
    run_id TEXT PRIMARY KEY,
    scan_time TEXT NOT NULL,
    total INTEGER NOT NULL DEFAULT 0,
    high INTEGER NOT NULL DEFAULT 0,
    low INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS findings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    run_id TEXT NOT NULL REFERENCES scans(run_id),
    tool TEXT NOT NULL,
    repo TEXT NOT NULL DEFAULT 'unknown',
    file TEXT NOT NULL,
    severity TEXT NOT NULL,
    message TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_findings_run ON findings(run_id);
CREATE INDEX IF NOT EXISTS idx_findings_severity ON findings(severity);
";
