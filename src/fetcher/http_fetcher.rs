use std::error::Error as _;
use std::io;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

use crate::app::Result;
use crate::config::HttpConfig;
use crate::fetcher::{FetchError, Fetcher};
use crate::request::redact;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpConfig::default())
    }

    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .read_timeout(config.read_timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        debug!("GET {}", redact(url));

        // The response owns the connection; every return below drops it.
        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Error response code: {}", status.as_u16());
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(classify)?;
        Ok(join_lines(&String::from_utf8_lossy(&body)))
    }
}

/// Concatenate the lines of `text` with their terminators removed.
fn join_lines(text: &str) -> String {
    text.lines().collect()
}

fn classify(err: reqwest::Error) -> FetchError {
    if is_timeout(&err) {
        error!("Request timed out: {}", err);
        FetchError::Timeout
    } else {
        error!("Problem retrieving data: {}", err);
        FetchError::Io(describe(&err))
    }
}

fn is_timeout(err: &reqwest::Error) -> bool {
    if err.is_timeout() {
        return true;
    }
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::TimedOut {
                return true;
            }
        }
        source = cause.source();
    }
    false
}

/// Error message including its causes, with any URL stripped so the API key stays out.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    match err.url() {
        Some(url) => message.replace(url.as_str(), &redact(url.as_str())),
        None => message,
    }
}
