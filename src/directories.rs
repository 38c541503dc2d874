use anyhow::{Context, anyhow};
use directories::ProjectDirs;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::error;

pub struct Directories;
impl Directories {
    /// Returns the platform data directory for Fretboard, creating it if needed.
    pub fn ensure_data_dir_exists() -> anyhow::Result<PathBuf> {
        ProjectDirs::from("dev", "fretboard.dev", "fretboard")
            .ok_or_else(|| anyhow!("Project data directory is not available."))
            .and_then(|project_dirs| {
                let data_dir = project_dirs.data_dir();

                Self::ensure_dir_exists(data_dir)?;

                Ok(data_dir.to_path_buf())
            })
    }

    pub fn ensure_dir_exists<P: AsRef<Path>>(absolute_path: P) -> anyhow::Result<()> {
        fs::create_dir_all(absolute_path.as_ref())
            .map_err(|err| {
                error!("Cannot create {:?} dir: {err:?}", absolute_path.as_ref());
                err
            })
            .with_context(|| format!("Cannot create {:?} dir.", absolute_path.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::Directories;

    #[test]
    fn creates_nested_directories() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;
        let nested = root.path().join("catalogs").join("v1");

        Directories::ensure_dir_exists(&nested)?;
        assert!(nested.is_dir());

        // Creating an existing directory is not an error.
        Directories::ensure_dir_exists(&nested)?;

        Ok(())
    }
}
