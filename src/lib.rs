//! Download a site export from a remark admin endpoint into a local backup file.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod progress;
pub mod template;

pub use command::{BackupCommand, Exporter};
pub use config::BackupConfig;
pub use error::Error;
