use crate::config::HttpClientConfig;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;

/// User agent the remote catalogs are requested with.
pub const FRETBOARD_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Network utilities.
#[derive(Clone)]
pub struct Network {
    pub http_client: ClientWithMiddleware,
}

impl Network {
    /// Creates a new `Network` instance with the specified HTTP client.
    pub fn new(http_client: ClientWithMiddleware) -> Self {
        Self { http_client }
    }

    /// Creates a new `Network` instance with the HTTP client built from the configuration.
    pub fn create(config: &HttpClientConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(FRETBOARD_USER_AGENT)
            .timeout(config.timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .connection_verbose(config.verbose)
            .build()?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        Ok(Self::new(
            ClientBuilder::new(client)
                .with(TracingMiddleware::default())
                .with(RetryTransientMiddleware::new_with_policy(retry_policy))
                .build(),
        ))
    }
}
