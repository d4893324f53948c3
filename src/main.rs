use clap::Parser;
use tracing_subscriber::EnvFilter;

use secportal::cli;
use secportal::errors::PortalError;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args).await,
        cli::Commands::Upload(args) => cli::upload::handle_upload(args).await,
        cli::Commands::Convert(args) => cli::convert::handle_convert(args).await,
        cli::Commands::History(args) => cli::history::handle_history(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                PortalError::Validation(_) => 2,
                PortalError::Store(_) => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
