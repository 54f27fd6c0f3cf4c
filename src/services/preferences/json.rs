use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::PreferenceStore;

/// Preferences kept as a flat JSON object on disk.
///
/// The file is re-read on every access so edits made by another process are
/// picked up; a missing file behaves as an empty store.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read preferences from {}", self.path.display()))?;
        serde_json::from_str(&data).with_context(|| {
            format!(
                "failed to deserialize preferences from {}",
                self.path.display()
            )
        })
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write preferences to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get("lang").unwrap(), None);
    }

    #[test]
    fn test_set_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let store = JsonPreferenceStore::new(&path);

        store.set("lang", "ko").unwrap();
        assert!(path.exists());
        assert_eq!(store.get("lang").unwrap().as_deref(), Some("ko"));
    }

    #[test]
    fn test_values_survive_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        JsonPreferenceStore::new(&path).set("a", "1").unwrap();
        JsonPreferenceStore::new(&path).set("b", "2").unwrap();

        let store = JsonPreferenceStore::new(&path);
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonPreferenceStore::new(&path).get("lang").unwrap_err();
        assert!(err.to_string().contains("failed to deserialize preferences"));
    }
}
