use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimatologyError {
    #[error("Invalid climatology endpoint '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse climatology response from {0}")]
    JsonParse(String, #[source] serde_json::Error),
}
