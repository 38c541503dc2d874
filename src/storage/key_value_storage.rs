/// Un-namespaced string key-value storage that catalogs are persisted to. Every catalog owns a
/// single fixed key, and the value is the JSON-serialized array of the whole collection.
pub trait KeyValueStorage: Send + Sync + 'static {
    /// Reads a value stored under the specified key, if any.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Stores a value under the specified key, overwriting the previous one.
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Removes the value stored under the specified key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}
