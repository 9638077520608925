use std::fmt::{Display, Formatter, Result};
use std::path::PathBuf;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum Error {
  /// The request could not be sent or the body stream broke off.
  Request(reqwest::Error),
  /// The export endpoint answered with a non-success status.
  ExportRejected { status: StatusCode, body: String },
  FileCreate { path: PathBuf, source: std::io::Error },
  Write { path: PathBuf, source: std::io::Error },
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Request(e) => Some(e),
      Error::ExportRejected { .. } => None,
      Error::FileCreate { source, .. } | Error::Write { source, .. } => Some(source),
    }
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Error::Request(e) => Display::fmt(e, f),
      Error::ExportRejected { status, body } => write!(f, "error response \"{status}\", {body}"),
      Error::FileCreate { path, source } => {
        write!(f, "can't create backup file {}: {source}", path.display())
      }
      Error::Write { path, source } => write!(f, "can't write backup file {}: {source}", path.display()),
    }
  }
}

impl From<reqwest::Error> for Error {
  fn from(reqwest_error: reqwest::Error) -> Self {
    Error::Request(reqwest_error)
  }
}

#[cfg(test)]
mod tests {
  use std::io;
  use std::path::PathBuf;

  use reqwest::StatusCode;

  use super::Error;

  #[test]
  fn export_rejected_embeds_status_line_and_body() {
    let error = Error::ExportRejected { status: StatusCode::BAD_REQUEST, body: "some error".to_string() };

    assert_eq!(error.to_string(), r#"error response "400 Bad Request", some error"#);
  }

  #[test]
  fn file_create_embeds_path_and_cause() {
    let error = Error::FileCreate {
      path: PathBuf::from("/tmp/no-such-dir/remark-test.export"),
      source: io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
    };

    assert_eq!(
      error.to_string(),
      "can't create backup file /tmp/no-such-dir/remark-test.export: no such file or directory"
    );
    assert!(std::error::Error::source(&error).is_some());
  }

  #[test]
  fn write_embeds_path_and_cause() {
    let error = Error::Write {
      path: PathBuf::from("/var/backup/remark.gz"),
      source: io::Error::new(io::ErrorKind::Other, "disk full"),
    };

    assert_eq!(error.to_string(), "can't write backup file /var/backup/remark.gz: disk full");
  }
}
