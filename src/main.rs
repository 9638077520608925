use std::process::ExitCode;

use clap::Parser;
use reqwest::Client;
use tracing::{debug, error};

use remark_backup::cli::Cli;
use remark_backup::{BackupCommand, BackupConfig, Exporter};

#[tokio::main]
async fn main() -> ExitCode {
  // Parse first so --help works without logs
  let cli = Cli::parse();

  // RUST_LOG wins over -q/-v
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level()));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  let config = BackupConfig::from(cli);
  debug!(site = %config.site, url = %config.url, path = %config.path.display(), "backup configured");

  let command = BackupCommand { client: Client::new() };

  match command.execute(&config).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("backup failed: {e}");
      ExitCode::FAILURE
    }
  }
}
