use crate::{directories::Directories, error::Error as FretboardError, storage::KeyValueStorage};
use anyhow::{Context, bail};
use regex::Regex;
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

static STORAGE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$").expect("Invalid storage key regex."));

/// Storage that keeps every key in a separate `<key>.json` file inside of the root directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens storage at the specified directory, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(root: P) -> anyhow::Result<Self> {
        Directories::ensure_dir_exists(root.as_ref())?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
        })
    }

    /// Root directory of the storage.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> anyhow::Result<PathBuf> {
        if !STORAGE_KEY_REGEX.is_match(key) {
            bail!(FretboardError::client(format!(
                "Storage key ({key}) can only contain alphanumeric characters, `_`, `.` and `-`."
            )));
        }

        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Cannot read storage file {path:?}.")),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.key_path(key)?;
        // Write to a sibling file first so that readers never observe a half-written value.
        let staging_path = path.with_extension("json.tmp");
        fs::write(&staging_path, value)
            .with_context(|| format!("Cannot write storage file {staging_path:?}."))?;
        fs::rename(&staging_path, &path)
            .with_context(|| format!("Cannot replace storage file {path:?}."))
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("Cannot remove storage file {path:?}.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FileStorage;
    use crate::{
        error::{Error as FretboardError, ErrorKind},
        storage::KeyValueStorage,
    };

    #[test]
    fn can_set_get_and_remove_values() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;
        let storage = FileStorage::open(root.path().join("storage"))?;

        assert_eq!(storage.get("tutors_data")?, None);

        storage.set("tutors_data", r#"[{"id":"t-1"}]"#)?;
        assert_eq!(
            storage.get("tutors_data")?.as_deref(),
            Some(r#"[{"id":"t-1"}]"#)
        );
        assert!(storage.root().join("tutors_data.json").is_file());

        storage.set("tutors_data", "[]")?;
        assert_eq!(storage.get("tutors_data")?.as_deref(), Some("[]"));

        storage.remove("tutors_data")?;
        assert_eq!(storage.get("tutors_data")?, None);

        // Removing a missing key is a no-op.
        storage.remove("tutors_data")?;

        Ok(())
    }

    #[test]
    fn keeps_keys_isolated() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;
        let storage = FileStorage::open(root.path())?;

        storage.set("courses_data", "[1]")?;
        storage.set("products_data", "[2]")?;

        assert_eq!(storage.get("courses_data")?.as_deref(), Some("[1]"));
        assert_eq!(storage.get("products_data")?.as_deref(), Some("[2]"));

        Ok(())
    }

    #[test]
    fn rejects_invalid_keys() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;
        let storage = FileStorage::open(root.path())?;

        for key in ["", "../tutors", "tutors/data", ".hidden", "tutors data"] {
            let err = storage
                .get(key)
                .unwrap_err()
                .downcast::<FretboardError>()
                .unwrap();
            assert_eq!(err.kind(), ErrorKind::ClientError);
        }

        Ok(())
    }
}
