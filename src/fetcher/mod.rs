pub mod http_fetcher;

use async_trait::async_trait;
use thiserror::Error;

/// Why a request that was actually sent produced no usable body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("unexpected HTTP status {0}")]
    BadStatus(u16),

    #[error("I/O error: {0}")]
    Io(String),
}

#[async_trait]
pub trait Fetcher {
    /// Issue one GET and return the response body as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
