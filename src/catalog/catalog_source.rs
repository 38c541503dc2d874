use serde_derive::Serialize;
use std::fmt::{Display, Formatter};

/// Tier of the source chain the catalog collection was resolved from.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CatalogSource {
    /// Collection previously persisted to the local storage.
    Storage,
    /// Collection fetched from the remote JSON endpoint.
    Remote,
    /// Static collection embedded into the binary.
    Fallback,
}

impl Display for CatalogSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CatalogSource::Storage => "storage",
            CatalogSource::Remote => "remote",
            CatalogSource::Fallback => "fallback",
        })
    }
}
