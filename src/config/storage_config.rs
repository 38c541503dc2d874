use serde_derive::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration of the local key-value storage that keeps catalogs between runs.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StorageConfig {
    /// Directory to store catalog files in. Platform data directory is used if not specified.
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::StorageConfig;
    use std::path::PathBuf;

    #[test]
    fn deserialization() {
        let config: StorageConfig = toml::from_str("").unwrap();
        assert_eq!(config, StorageConfig::default());

        let config: StorageConfig = toml::from_str("path = '/var/lib/fretboard'").unwrap();
        assert_eq!(
            config,
            StorageConfig {
                path: Some(PathBuf::from("/var/lib/fretboard"))
            }
        );
    }
}
