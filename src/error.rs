//! Failures that end a run. Each kind maps to its own process exit code.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    /// The info request came back 404.
    #[error("no release found for repository {repository}")]
    NotFound { repository: String },

    /// The info request failed with any other non-200 status.
    #[error("unable to retrieve release information for repository {repository} (status code: {status})")]
    Retrieval {
        repository: String,
        status: StatusCode,
    },

    /// A request or the body read behind it failed on the network.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("unable to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("unable to download file {url} (status code: {status})")]
    DownloadHttp { url: String, status: StatusCode },

    /// The release JSON is not parseable or lacks the archive URLs.
    #[error("malformed release information for repository {repository}: {source}")]
    MalformedRelease {
        repository: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the report to standard output failed.
    #[error("unable to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NotFound { .. } => 3,
            Error::Retrieval { .. } => 4,
            Error::Transport { .. } => 5,
            Error::DownloadHttp { .. } => 6,
            Error::MalformedRelease { .. } => 7,
            Error::Io { .. } => 8,
            Error::Output(_) => 9,
            Error::Client(_) => 10,
        }
    }
}
