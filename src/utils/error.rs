// src/utils/error.rs
use thiserror::Error;

// Errors raised while talking to EDGAR. All of them are caught at the
// filing retriever boundary and turned into a `FilingLookup` outcome.
#[derive(Error, Debug)]
pub enum EdgarError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Transport failures and timeouts

    #[error("HTTP error {status} for {url}")]
    Retrieval {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Company '{0}' not found")]
    CompanyNotFound(String),

    #[error("Failed to parse EDGAR response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for EdgarError {
    fn from(err: serde_json::Error) -> Self {
        EdgarError::Parse(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("EDGAR interaction failed: {0}")]
    Edgar(#[from] EdgarError), // Automatically convert Edgar errors

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
