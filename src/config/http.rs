use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transport settings for the HTTP fetcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Connection establishment timeout in milliseconds (default: 15000)
    pub connect_timeout_ms: u64,

    /// Timeout for each read from the connection in milliseconds (default: 10000)
    pub read_timeout_ms: u64,

    /// User agent string sent with every request
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 15_000,
            read_timeout_ms: 10_000,
            user_agent: concat!("newsfeed/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let config = HttpConfig::default();
        assert_eq!(config.connect_timeout(), Duration::from_millis(15_000));
        assert_eq!(config.read_timeout(), Duration::from_millis(10_000));
        assert!(config.user_agent.starts_with("newsfeed/"));
    }
}
