use crate::{
    catalog::{
        CatalogRecord, CatalogSource, derive_slug,
        persistence::{persist_records, read_records},
    },
    config::CatalogConfig,
    storage::KeyValueStorage,
};
use anyhow::{Context, bail};
use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, warn};

/// Resolves a catalog collection through the source chain: local storage, then the remote JSON
/// endpoint, then the static fallback. Never fails, every failure degrades to the next tier.
pub struct CatalogLoader<'a, R: CatalogRecord, S: KeyValueStorage> {
    config: &'a CatalogConfig,
    storage: &'a S,
    http_client: &'a ClientWithMiddleware,
    fallback: &'a [R],
}

impl<'a, R: CatalogRecord, S: KeyValueStorage> CatalogLoader<'a, R, S> {
    pub fn new(
        config: &'a CatalogConfig,
        storage: &'a S,
        http_client: &'a ClientWithMiddleware,
        fallback: &'a [R],
    ) -> Self {
        Self {
            config,
            storage,
            http_client,
            fallback,
        }
    }

    pub async fn load(&self) -> (Vec<R>, CatalogSource) {
        if let Some(mut records) = read_records::<R, S>(self.storage, &self.config.storage_key) {
            fill_missing_slugs(&mut records);
            debug!(
                catalog.kind = R::KIND,
                "Loaded {} catalog records from storage.",
                records.len()
            );
            return (records, CatalogSource::Storage);
        }

        let (records, source) = match self.fetch_remote().await {
            Ok(mut records) => {
                fill_missing_slugs(&mut records);
                debug!(
                    catalog.kind = R::KIND,
                    "Fetched {} catalog records from {}.",
                    records.len(),
                    self.config.remote_url
                );
                (records, CatalogSource::Remote)
            }
            Err(err) => {
                warn!(
                    catalog.kind = R::KIND,
                    "Cannot fetch remote catalog, fallback will be used instead: {err:?}"
                );
                (self.fallback.to_vec(), CatalogSource::Fallback)
            }
        };

        persist_records(self.storage, &self.config.storage_key, &records);

        (records, source)
    }

    async fn fetch_remote(&self) -> anyhow::Result<Vec<R>> {
        let url = &self.config.remote_url;
        let response = self
            .http_client
            .get(url.as_str())
            .send()
            .await
            .with_context(|| format!("Cannot fetch {} catalog ({url}).", R::KIND))?;

        let status = response.status();
        if !status.is_success() {
            bail!(
                "Cannot fetch {} catalog ({url}), request failed with HTTP status: {status}.",
                R::KIND
            );
        }

        // Hosts tend to answer unknown paths with an HTML index page and `200`, so the body is
        // read as text and only then parsed.
        let body = response
            .text()
            .await
            .with_context(|| format!("Cannot read {} catalog response ({url}).", R::KIND))?;
        serde_json::from_str(&body).with_context(|| {
            format!(
                "Cannot deserialize {} catalog ({url}), response isn't a JSON array of records.",
                R::KIND
            )
        })
    }
}

/// Records written by hand or by older clients may come without slugs.
fn fill_missing_slugs<R: CatalogRecord>(records: &mut [R]) {
    for record in records.iter_mut() {
        if record.slug().trim().is_empty() {
            let slug = derive_slug(record.name(), record.id());
            record.set_slug(slug);
        }
    }
}
