use std::result;

use thiserror::Error;

/// Error types for paper search, retrieval and export
#[derive(Error, Debug)]
pub enum PapersError {
    /// HTTP request failed (connection, DNS, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Remote API answered with a non-success status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Response was valid JSON but lacked the expected structure
    #[error("Unexpected response shape: {message}")]
    UnexpectedResponse { message: String },

    /// Invalid query string
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Nothing to export
    #[error("No records to write: the result set is empty")]
    EmptyResultSet,

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error for file operations
    #[error("IO error: {message}")]
    IoError { message: String },
}

impl PapersError {
    /// Whether the error came from the network layer rather than from data
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PapersError::RequestError(_) | PapersError::ApiError { .. }
        )
    }
}

impl From<std::io::Error> for PapersError {
    fn from(err: std::io::Error) -> Self {
        PapersError::IoError {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = result::Result<T, PapersError>;
