use crate::catalog::CatalogRecord;
use anyhow::{Context, anyhow};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/fallback"]
#[include = "*.json"]
struct FallbackAssets;

/// Reads the static collection embedded into the binary from `assets/fallback/<file>`.
pub fn fallback_records<R: CatalogRecord>(file: &str) -> anyhow::Result<Vec<R>> {
    let asset = FallbackAssets::get(file)
        .ok_or_else(|| anyhow!("Fallback {} catalog ({file}) is not embedded.", R::KIND))?;
    serde_json::from_slice(&asset.data)
        .with_context(|| format!("Cannot deserialize fallback {} catalog ({file}).", R::KIND))
}
