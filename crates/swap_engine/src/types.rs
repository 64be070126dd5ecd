use thiserror::Error;

/// Failure of a single backend round trip. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
}

impl BackendError {
    /// Status code when the server answered with a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search engine returned status {0}")]
    HttpStatus(u16),
    #[error("search timed out: {0}")]
    Timeout(String),
    #[error("search engine unreachable: {0}")]
    Network(String),
    #[error("search engine rejected the query: {0}")]
    Rejected(String),
    #[error("malformed search response: {0}")]
    Decode(String),
}

pub(crate) fn map_backend_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::Timeout(err.to_string());
    }
    BackendError::Network(err.to_string())
}

pub(crate) fn map_search_error(err: meilisearch_sdk::errors::Error) -> SearchError {
    use meilisearch_sdk::errors::Error;

    match err {
        Error::MeilisearchCommunication(err) => SearchError::HttpStatus(err.status_code),
        Error::Meilisearch(err) => SearchError::Rejected(err.to_string()),
        Error::ParseError(err) => SearchError::Decode(err.to_string()),
        Error::Timeout => SearchError::Timeout(Error::Timeout.to_string()),
        other => SearchError::Network(other.to_string()),
    }
}
