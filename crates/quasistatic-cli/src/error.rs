use quasistatic::engine::error::ProfileError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write report: {0}")]
    Report(#[from] csv::Error),

    #[error("{count} of {total} profile(s) were rejected as invalid input")]
    InvalidProfiles { count: usize, total: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
