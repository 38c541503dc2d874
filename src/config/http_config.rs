use serde_derive::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};
use std::time::Duration;

/// Configuration for the HTTP functionality used to fetch remote catalogs.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct HttpConfig {
    /// Configuration for the HTTP client.
    pub client: HttpClientConfig,
}

/// Describes the HTTP client configuration.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HttpClientConfig {
    /// Total request timeout, from connecting until the response body has been read. A remote
    /// catalog that doesn't respond within this deadline is replaced with the fallback data.
    /// Default is 30 seconds.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
    /// Timeout for idle sockets being kept-alive. Default is 5 seconds.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_pool_idle_timeout")]
    pub pool_idle_timeout: Duration,
    /// Maximum number of retries (with exponential backoff) for remote catalog requests that fail
    /// because of transient errors. Setting this to 0 will disable retries. Default is 3.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Defines whether HTTP client connections should emit verbose logs. Default is false.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            pool_idle_timeout: default_pool_idle_timeout(),
            max_retries: default_max_retries(),
            verbose: false,
        }
    }
}

const fn default_pool_idle_timeout() -> Duration {
    Duration::from_secs(5)
}

const fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

const fn default_max_retries() -> u32 {
    3
}
