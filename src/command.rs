use std::path::Path;

use async_trait::async_trait;
use chrono::Local;
use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::{Client, Response};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, warn};

use crate::config::BackupConfig;
use crate::error::Error;
use crate::model::ExportQuery;
use crate::progress::SpinnerHelper;
use crate::template::resolve_file_name;

const EXPORT_PATH: &str = "/api/v1/admin/export";
const ADMIN_USER: &str = "admin";

#[async_trait]
pub trait Exporter {
    /// Fetches the site export and writes it to the configured backup file.
    async fn execute(&self, config: &BackupConfig) -> Result<(), Error>;
}

pub struct BackupCommand {
    pub client: Client,
}

#[async_trait]
impl Exporter for BackupCommand {
    async fn execute(&self, config: &BackupConfig) -> Result<(), Error> {
        info!(site = %config.site, "start export");

        let response = self.request_export(config).await?;

        let file_name = resolve_file_name(&config.file, &config.site, Local::now().date_naive());
        let path = config.path.join(file_name);
        debug!(path = %path.display(), "resolved backup file");

        let spinner = SpinnerHelper::create(format!(
            "PROGRESS – Export of site {site} to {path}",
            site = config.site,
            path = path.display()
        ));

        match save_export(response, &path, &spinner).await {
            Ok(written) => {
                spinner.finish_with_message(format!("SUCCESS – Site {} exported.", config.site));
                info!(site = %config.site, path = %path.display(), bytes = written, "export saved");
                Ok(())
            }
            Err(e) => {
                spinner.abandon_with_message(format!("FAILURE – Export of site {} failed.", config.site));
                Err(e)
            }
        }
    }
}

impl BackupCommand {
    async fn request_export(&self, config: &BackupConfig) -> Result<Response, Error> {
        let url = export_url(&config.url);
        debug!(%url, "request export");

        let mut request = self
            .client
            .get(&url)
            .basic_auth(ADMIN_USER, Some(&config.secret))
            .query(&ExportQuery::from(&config.site));
        if let Some(timeout) = config.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            status => {
                let body = response.text().await.unwrap_or_default();
                warn!(%status, "export rejected");
                Err(Error::ExportRejected { status, body })
            }
        }
    }
}

fn export_url(base_url: &str) -> String {
    format!("{}{EXPORT_PATH}", base_url.trim_end_matches('/'))
}

/// Streams the response body into `path`, returning the number of bytes written.
/// A file left behind by a failed transfer is not removed.
async fn save_export(response: Response, path: &Path, spinner: &ProgressBar) -> Result<u64, Error> {
    let file = File::create(path).await.map_err(|source| Error::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        writer.write_all(&chunk).await.map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        written += chunk.len() as u64;
        spinner.set_position(written);
    }

    writer.flush().await.map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(written)
}
