use serde_derive::{Deserialize, Serialize};
use url::Url;

/// Location of a single catalog: the local storage key and the remote JSON document.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Key the catalog is persisted under in the local storage.
    pub storage_key: String,
    /// URL of the remote JSON array with the catalog records.
    pub remote_url: Url,
}

impl CatalogConfig {
    fn with_defaults(storage_key: &str, document: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
            remote_url: Url::parse(&format!("https://fretboard.dev/data/{document}"))
                .expect("Cannot parse remote catalog URL."),
        }
    }
}

/// Configuration for all catalogs served by the application.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogsConfig {
    pub tutors: CatalogConfig,
    pub courses: CatalogConfig,
    pub products: CatalogConfig,
}

impl Default for CatalogsConfig {
    fn default() -> Self {
        Self {
            tutors: CatalogConfig::with_defaults("tutors_data", "tutors.json"),
            courses: CatalogConfig::with_defaults("courses_data", "courses.json"),
            products: CatalogConfig::with_defaults("products_data", "products.json"),
        }
    }
}
