use crate::storage::KeyValueStorage;
use anyhow::anyhow;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

/// Process-local storage, nothing survives the process. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| anyhow!("Memory storage lock is poisoned."))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries
            .write()
            .map_err(|_| anyhow!("Memory storage lock is poisoned."))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.entries
            .write()
            .map_err(|_| anyhow!("Memory storage lock is poisoned."))?
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use super::MemoryStorage;
    use crate::storage::KeyValueStorage;
    use anyhow::bail;

    /// Storage that can be read from, but rejects every write.
    #[derive(Clone, Debug, Default)]
    pub struct FailingStorage {
        pub inner: MemoryStorage,
    }

    impl KeyValueStorage for FailingStorage {
        fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, _: &str) -> anyhow::Result<()> {
            bail!("Storage quota exceeded ({key}).")
        }

        fn remove(&self, key: &str) -> anyhow::Result<()> {
            bail!("Storage is read-only ({key}).")
        }
    }

    #[test]
    fn can_set_get_and_remove_values() -> anyhow::Result<()> {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("products_data")?, None);

        storage.set("products_data", "[]")?;
        assert_eq!(storage.get("products_data")?.as_deref(), Some("[]"));

        storage.remove("products_data")?;
        storage.remove("products_data")?;
        assert_eq!(storage.get("products_data")?, None);

        Ok(())
    }

    #[test]
    fn clones_share_entries() -> anyhow::Result<()> {
        let storage = MemoryStorage::new();
        let clone = storage.clone();

        clone.set("courses_data", "[]")?;
        assert_eq!(storage.get("courses_data")?.as_deref(), Some("[]"));

        Ok(())
    }
}
