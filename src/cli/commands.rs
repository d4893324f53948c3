use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "secportal", version, about = "Security scan ingestion and aggregation portal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Ingest a scan JSON file directly into the database
    Upload(UploadArgs),
    /// Convert a scanner report into an uploadable scan file
    Convert(ConvertArgs),
    /// Print the stored scan history
    History(HistoryArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Bind port
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// SQLite database path
    #[arg(long, default_value = "data/secportal.db")]
    pub db: String,
}

#[derive(Args, Clone)]
pub struct UploadArgs {
    /// Scan JSON file to ingest
    #[arg(short, long)]
    pub file: String,

    /// SQLite database path
    #[arg(long, default_value = "data/secportal.db")]
    pub db: String,
}

#[derive(Args, Clone)]
pub struct ConvertArgs {
    /// Report format: trivy, yamllint
    #[arg(long)]
    pub tool: String,

    /// Scanner report file (trivy JSON or yamllint parsable output)
    #[arg(short, long)]
    pub input: String,

    /// Output scan JSON file
    #[arg(short, long, default_value = "scan.json")]
    pub output: String,

    /// Attribute all findings to this repo instead of the report's own
    #[arg(long)]
    pub repo: Option<String>,
}

#[derive(Args, Clone)]
pub struct HistoryArgs {
    /// SQLite database path
    #[arg(long, default_value = "data/secportal.db")]
    pub db: String,

    /// Emit raw JSON instead of a summary listing
    #[arg(long)]
    pub json: bool,
}
