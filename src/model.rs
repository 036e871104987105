// Core types: Category, ProjectId and the per-stage errors
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// One tracked listing page: where to fetch it and the file name it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub url: String,
    pub filename: String,
}

impl Category {
    pub fn new(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            filename: filename.into(),
        }
    }
}

/// Suffix of a ProjectCard element id, kept as an opaque token.
pub type ProjectId = String;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("http client setup failed: {0}")]
    Client(String),
    #[error("request failed: {0}")]
    Http(String),
    #[error("unexpected status code {0}")]
    InvalidResponse(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("cannot read markup file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid selector: {0}")]
    Selector(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}
