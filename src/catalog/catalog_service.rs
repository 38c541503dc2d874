use crate::{
    catalog::{
        CatalogFilter, CatalogLoader, CatalogRecord, CatalogSource, CatalogStore, ID_FIELD,
        SLUG_FIELD, persistence::persist_records, slug::derive_slug,
    },
    config::CatalogConfig,
    error::Error as FretboardError,
    network::Network,
    storage::KeyValueStorage,
};
use anyhow::{anyhow, bail};
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info};
use uuid::Uuid;

/// Catalog of a single domain: resolves the collection, exposes the filtered view and applies
/// admin mutations, persisting the whole collection after each of them.
pub struct CatalogService<R: CatalogRecord, S: KeyValueStorage> {
    config: CatalogConfig,
    storage: S,
    network: Network,
    fallback: Vec<R>,
    store: CatalogStore<R>,
    /// Serializes storage writes so that a later snapshot is never overwritten by an earlier one.
    persistence_lock: Mutex<()>,
}

impl<R: CatalogRecord, S: KeyValueStorage> CatalogService<R, S> {
    pub fn new(config: CatalogConfig, storage: S, network: Network, fallback: Vec<R>) -> Self {
        Self {
            config,
            storage,
            network,
            fallback,
            store: CatalogStore::new(),
            persistence_lock: Mutex::new(()),
        }
    }

    /// Resolves the collection through the source chain and replaces the current one with it.
    pub async fn load(&self) -> CatalogSource {
        let (records, source) = CatalogLoader::new(
            &self.config,
            &self.storage,
            &self.network.http_client,
            &self.fallback,
        )
        .load()
        .await;

        info!(
            catalog.kind = R::KIND,
            catalog.source = %source,
            "Loaded {} catalog records.",
            records.len()
        );
        self.store.replace_records(records);

        source
    }

    /// Resolves the collection in the background. Until the task completes, readers observe the
    /// collection the service had before (empty for a freshly created service).
    pub fn spawn_load(self: &Arc<Self>) -> JoinHandle<CatalogSource> {
        let service = Arc::clone(self);
        tokio::spawn(async move { service.load().await })
    }

    /// Returns the whole unfiltered collection.
    pub fn records(&self) -> Vec<R> {
        self.store.records()
    }

    /// Returns the collection projected through the active filter.
    pub fn filtered(&self) -> Vec<R> {
        self.store.view()
    }

    pub fn find_by_id(&self, id: &str) -> Option<R> {
        self.store.find(|record| record.id() == id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<R> {
        self.store.find(|record| record.slug() == slug)
    }

    pub fn filter(&self) -> CatalogFilter<R> {
        self.store.filter()
    }

    pub fn set_filter(&self, filter: CatalogFilter<R>) {
        self.store.set_filter(filter);
    }

    pub fn update_filter<M: FnOnce(&mut CatalogFilter<R>)>(&self, update: M) {
        self.store.update_filter(update);
    }

    pub fn subscribe_records(&self) -> watch::Receiver<Vec<R>> {
        self.store.subscribe_records()
    }

    pub fn subscribe_filter(&self) -> watch::Receiver<CatalogFilter<R>> {
        self.store.subscribe_filter()
    }

    /// Creates a record from the admin form payload (JSON object). Identifier and slug are
    /// generated when absent, missing flags take their defaults.
    pub fn create(&self, draft: Value) -> anyhow::Result<R> {
        let Value::Object(mut fields) = draft else {
            bail!(FretboardError::client(format!(
                "{} payload must be a JSON object.",
                capitalize(R::KIND)
            )));
        };

        let id = match fields.get(ID_FIELD) {
            Some(Value::String(id)) if !id.trim().is_empty() => id.trim().to_string(),
            Some(Value::Number(id)) => id.to_string(),
            _ => Uuid::now_v7().to_string(),
        };
        fields.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        let record = Self::into_record(fields)?;
        let created = self.store.modify_records(|records| {
            if records.iter().any(|existing| existing.id() == record.id()) {
                return None;
            }

            records.push(record.clone());
            Some(record)
        });

        let Some(record) = created else {
            bail!(FretboardError::client(format!(
                "{} with ID ({id}) already exists.",
                capitalize(R::KIND)
            )));
        };
        self.persist_snapshot();

        debug!(catalog.kind = R::KIND, record.id = record.id(), "Created catalog record.");
        Ok(record)
    }

    /// Shallow-merges the patch (JSON object) over the record with the specified ID. Returns
    /// `None` and leaves the collection untouched if there is no such record. Identifier in the
    /// patch is ignored.
    pub fn update(&self, id: &str, patch: Value) -> anyhow::Result<Option<R>> {
        let Value::Object(patch) = patch else {
            bail!(FretboardError::client(format!(
                "{} patch must be a JSON object.",
                capitalize(R::KIND)
            )));
        };

        let updated = self.store.try_modify_records(|records| {
            let Some(index) = records.iter().position(|record| record.id() == id) else {
                return Ok(None);
            };

            let updated = Self::merge_patch(&records[index], patch)?;
            records[index] = updated.clone();
            Ok(Some(updated))
        })?;

        match updated {
            Some(_) => {
                self.persist_snapshot();
                debug!(catalog.kind = R::KIND, record.id = id, "Updated catalog record.");
            }
            None => debug!(catalog.kind = R::KIND, record.id = id, "Nothing to update, record is not found."),
        }

        Ok(updated)
    }

    /// Removes the first record with the specified ID and returns it, `None` if there is no such
    /// record.
    pub fn delete(&self, id: &str) -> Option<R> {
        let removed = self.store.modify_records(|records| {
            let index = records.iter().position(|record| record.id() == id)?;
            Some(records.remove(index))
        });

        match removed {
            Some(_) => {
                self.persist_snapshot();
                debug!(catalog.kind = R::KIND, record.id = id, "Deleted catalog record.");
            }
            None => debug!(catalog.kind = R::KIND, record.id = id, "Nothing to delete, record is not found."),
        }

        removed
    }

    /// Shallow-merges the patch fields over the serialized record, except for the identifier.
    fn merge_patch(existing: &R, patch: Map<String, Value>) -> anyhow::Result<R> {
        let Value::Object(mut fields) = serde_json::to_value(existing)? else {
            bail!(
                "{} ({}) isn't serialized as a JSON object.",
                capitalize(R::KIND),
                existing.id()
            );
        };
        for (field, value) in patch {
            if field != ID_FIELD {
                fields.insert(field, value);
            }
        }

        Self::into_record(fields)
    }

    /// Validates the display name, derives missing slug and deserializes the record.
    fn into_record(mut fields: Map<String, Value>) -> anyhow::Result<R> {
        let name = fields
            .get(R::NAME_FIELD)
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if name.is_empty() {
            bail!(FretboardError::client(format!(
                "{} {} cannot be empty.",
                capitalize(R::KIND),
                R::NAME_FIELD
            )));
        }

        let has_slug = fields
            .get(SLUG_FIELD)
            .and_then(Value::as_str)
            .is_some_and(|slug| !slug.trim().is_empty());
        if !has_slug {
            let id = fields
                .get(ID_FIELD)
                .and_then(Value::as_str)
                .unwrap_or_default();
            let slug = derive_slug(&name, id);
            fields.insert(SLUG_FIELD.to_string(), Value::String(slug));
        }

        serde_json::from_value(Value::Object(fields)).map_err(|err| {
            FretboardError::client_with_root_cause(
                anyhow!(err).context(format!("Invalid {} payload.", R::KIND)),
            )
            .into()
        })
    }

    /// Writes the current collection to the storage, outside of the store lock.
    fn persist_snapshot(&self) {
        let _guard = self
            .persistence_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        persist_records(&self.storage, &self.config.storage_key, &self.store.records());
    }
}

fn capitalize(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
