mod catalogs_config;
mod http_config;
mod raw_config;
mod storage_config;

pub use self::{
    catalogs_config::{CatalogConfig, CatalogsConfig},
    http_config::{HttpClientConfig, HttpConfig},
    raw_config::RawConfig,
    storage_config::StorageConfig,
};

/// Main application config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Version of the Fretboard binary.
    pub version: String,
    /// Local storage configuration.
    pub storage: StorageConfig,
    /// Configuration for the HTTP functionality.
    pub http: HttpConfig,
    /// Locations of the catalogs.
    pub catalogs: CatalogsConfig,
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            storage: raw_config.storage,
            http: raw_config.http,
            catalogs: raw_config.catalogs,
        }
    }
}
