use thiserror::Error;

/// Failures raised by the Spotify client and the response-to-record mapping.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Spotify API error: status {status}: {message}")]
    Api { status: u16, message: String },
}

/// Top-level outcome of a single metadata lookup.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Not a Spotify album or track URL: {0}")]
    InvalidInput(String),

    #[error("Catalog lookup failed: {0}")]
    Upstream(#[from] UpstreamError),
}

pub type Result<T> = std::result::Result<T, FetchError>;
