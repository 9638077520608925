use std::path::PathBuf;
use std::time::Duration;

/// Everything one backup run needs. Built by the CLI layer and handed to
/// [`crate::command::Exporter::execute`].
#[derive(Debug, Clone)]
pub struct BackupConfig {
    /// Site identifier, sent to the endpoint and substituted into `file`.
    pub site: String,
    /// Shared secret authorizing the export.
    pub secret: String,
    /// Base URL of the remote service, e.g. `http://localhost:8080`.
    pub url: String,
    /// Directory the backup file is written to.
    pub path: PathBuf,
    /// File name template, see [`crate::template`].
    pub file: String,
    /// Total request timeout. `None` waits until the transfer finishes or fails.
    pub timeout: Option<Duration>,
}
