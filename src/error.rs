/// Error types for fetching streams and touching extension storage
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Could not reach {url}: {message}")]
    Network { url: String, message: String },
    #[error("Unexpected response from the stream list: {0}")]
    Parse(String),
    #[error("A stream list request is already in progress")]
    InFlight,
}

impl FetchError {
    /// The endpoint to offer opening directly, when the failure is a blocked
    /// plain-http request the user can grant an exception for.
    pub fn insecure_endpoint(&self) -> Option<&str> {
        match self {
            FetchError::Network { url, .. } => Url::parse(url)
                .ok()
                .filter(|parsed| parsed.scheme() == "http")
                .map(|_| url.as_str()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },
    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },
    #[error("Stored value for '{key}' is malformed: {message}")]
    Decode { key: String, message: String },
}
