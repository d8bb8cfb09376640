use thiserror::Error;

#[derive(Debug, Error)]
pub enum CuratorError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(String),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Credential error: {0}")]
    Credential(String),
    #[error("Torrent decode error: {0}")]
    Torrent(String),
    #[error("Malformed pattern '{pattern}': {reason}")]
    MalformedPattern { pattern: String, reason: String },
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<std::io::Error> for CuratorError {
    fn from(error: std::io::Error) -> Self {
        CuratorError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for CuratorError {
    fn from(error: serde_json::Error) -> Self {
        CuratorError::Json(error.to_string())
    }
}

impl From<reqwest::Error> for CuratorError {
    fn from(error: reqwest::Error) -> Self {
        CuratorError::Http(error.to_string())
    }
}

pub type CuratorResult<T> = Result<T, CuratorError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
