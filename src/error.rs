use std::{path::PathBuf, result::Result as StdResult};

use thiserror::Error;

pub type Result<T> = StdResult<T, Error>;

/// An enum for describing and handling various errors encountered while
/// locating packages, loading their changelogs, or writing the rolled up
/// summary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse config file {0}: {1}")]
    ConfigParse(PathBuf, #[source] toml::de::Error),

    #[error("cannot get current directory")]
    CurrentDir,

    #[error("document not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to parse JSON document {0}: {1}")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("failed to serialize summary")]
    Serialize(#[from] serde_json::Error),

    #[error("fatal I/O error")]
    Io(#[from] std::io::Error),
}
