use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::BackupConfig;

/// Export all comments and metadata of a site from the remote service and store
/// them in a local backup file.
#[derive(Parser, Debug)]
#[clap(name = "remark-backup", version)]
pub struct Cli {
  /// Shared secret authorizing the export request.
  #[clap(long, env = "SECRET")]
  pub secret: String,
  /// Site identifier. It is passed to the export endpoint and replaces `{{.SITE}}`
  /// in the file name template.
  #[clap(long, env = "SITE", default_value = "remark")]
  pub site: String,
  /// Directory the backup file is written to.
  #[clap(long, short, env = "BACKUP_PATH", default_value = "./var/backup")]
  pub path: PathBuf,
  /// Backup file name template. `{{.SITE}}` is replaced with the site identifier and
  /// `{{.YYYYMMDD}}` with the current date.
  #[clap(long, short, env = "BACKUP_FILE", default_value = "userdata-{{.SITE}}-{{.YYYYMMDD}}.gz")]
  pub file: String,
  /// Base URL of the remote service.
  #[clap(long, env = "REMARK_URL", default_value = "http://localhost:8080")]
  pub url: String,
  /// Request timeout in seconds. Without it the export waits until the transfer
  /// completes or fails.
  #[clap(long, env = "BACKUP_TIMEOUT")]
  pub timeout: Option<u64>,
  /// More log output (-v debug, -vv trace).
  #[clap(long, short, action = clap::ArgAction::Count)]
  pub verbose: u8,
  /// Only log errors.
  #[clap(long, short, conflicts_with = "verbose")]
  pub quiet: bool,
}

impl Cli {
  pub fn log_level(&self) -> &'static str {
    if self.quiet {
      return "error";
    }
    match self.verbose {
      0 => "info",
      1 => "debug",
      _ => "trace",
    }
  }
}

impl From<Cli> for BackupConfig {
  fn from(cli: Cli) -> Self {
    BackupConfig {
      site: cli.site,
      secret: cli.secret,
      url: cli.url,
      path: cli.path,
      file: cli.file,
      timeout: cli.timeout.map(Duration::from_secs),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;
  use std::time::Duration;

  use clap::Parser;

  use super::Cli;
  use crate::config::BackupConfig;

  #[test]
  fn given_all_options_when_parse_then_config_carries_them() {
    let cli = Cli::try_parse_from([
      "remark-backup",
      "--secret=123456",
      "--site=remark",
      "--path=/tmp",
      "--file={{.SITE}}-test.export",
      "--url=http://127.0.0.1:9999",
      "--timeout=15",
    ])
    .unwrap();

    let config = BackupConfig::from(cli);

    assert_eq!(config.secret, "123456");
    assert_eq!(config.site, "remark");
    assert_eq!(config.path, PathBuf::from("/tmp"));
    assert_eq!(config.file, "{{.SITE}}-test.export");
    assert_eq!(config.url, "http://127.0.0.1:9999");
    assert_eq!(config.timeout, Some(Duration::from_secs(15)));
  }

  #[test]
  fn given_short_flags_when_parse_then_path_and_file_set() {
    let cli = Cli::try_parse_from(["remark-backup", "--secret", "s", "-p", "/backups", "-f", "{{.SITE}}.gz", "-vv"])
      .unwrap();

    assert_eq!(cli.path, PathBuf::from("/backups"));
    assert_eq!(cli.file, "{{.SITE}}.gz");
    assert_eq!(cli.log_level(), "trace");
  }

  #[test]
  fn given_quiet_and_verbose_when_parse_then_conflict() {
    assert!(Cli::try_parse_from(["remark-backup", "--secret", "s", "-q", "-v"]).is_err());
  }

  #[test]
  fn given_quiet_when_log_level_then_error() {
    let cli = Cli::try_parse_from(["remark-backup", "--secret", "s", "-q"]).unwrap();

    assert_eq!(cli.log_level(), "error");
  }
}
