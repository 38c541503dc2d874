use crate::{catalog::CatalogRecord, storage::KeyValueStorage};
use tracing::{debug, error, warn};

/// Reads the collection persisted under the key. Unreadable, corrupt and empty collections are
/// all treated as a miss, corrupt values are removed from the storage.
pub fn read_records<R: CatalogRecord, S: KeyValueStorage>(storage: &S, key: &str) -> Option<Vec<R>> {
    let serialized = match storage.get(key) {
        Ok(Some(serialized)) => serialized,
        Ok(None) => return None,
        Err(err) => {
            warn!(catalog.kind = R::KIND, catalog.key = key, "Cannot read catalog from storage: {err:?}");
            return None;
        }
    };

    match serde_json::from_str::<Vec<R>>(&serialized) {
        Ok(records) if records.is_empty() => {
            debug!(catalog.kind = R::KIND, catalog.key = key, "Stored catalog is empty.");
            None
        }
        Ok(records) => Some(records),
        Err(err) => {
            warn!(
                catalog.kind = R::KIND,
                catalog.key = key,
                "Stored catalog is corrupt and will be removed: {err}"
            );
            if let Err(err) = storage.remove(key) {
                error!(catalog.kind = R::KIND, catalog.key = key, "Cannot remove corrupt catalog: {err:?}");
            }
            None
        }
    }
}

/// Serializes the whole collection under the key. Failures are logged and reported as `false`,
/// the in-memory collection stays authoritative.
pub fn persist_records<R: CatalogRecord, S: KeyValueStorage>(storage: &S, key: &str, records: &[R]) -> bool {
    let serialized = match serde_json::to_string(records) {
        Ok(serialized) => serialized,
        Err(err) => {
            error!(catalog.kind = R::KIND, catalog.key = key, "Cannot serialize catalog: {err}");
            return false;
        }
    };

    match storage.set(key, &serialized) {
        Ok(()) => {
            debug!(
                catalog.kind = R::KIND,
                catalog.key = key,
                "Persisted {} catalog records.",
                records.len()
            );
            true
        }
        Err(err) => {
            error!(catalog.kind = R::KIND, catalog.key = key, "Cannot persist catalog: {err:?}");
            false
        }
    }
}
