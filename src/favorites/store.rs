use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Persistence backend for favorite recipe ids.
///
/// Neither operation can fail from the caller's point of view: an unreadable
/// store loads as empty and a failed save is logged and dropped.
pub trait FavoritesStore {
    fn load(&self) -> BTreeSet<String>;
    fn save(&self, ids: &BTreeSet<String>);
}

impl<S: FavoritesStore + ?Sized> FavoritesStore for Box<S> {
    fn load(&self) -> BTreeSet<String> {
        (**self).load()
    }

    fn save(&self, ids: &BTreeSet<String>) {
        (**self).save(ids)
    }
}

/// Keeps favorites in a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: Utf8PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn write(&self, ids: &BTreeSet<String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(ids)?;
        fs::write(&self.path, json)
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> BTreeSet<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path, "no favorites file yet");
                return BTreeSet::new();
            }
            Err(e) => {
                warn!(path = %self.path, error = %e, "failed to read favorites, starting empty");
                return BTreeSet::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(ids) => ids,
            Err(e) => {
                warn!(path = %self.path, error = %e, "corrupt favorites file, starting empty");
                BTreeSet::new()
            }
        }
    }

    fn save(&self, ids: &BTreeSet<String>) {
        if let Err(e) = self.write(ids) {
            warn!(path = %self.path, error = %e, "failed to save favorites");
        }
    }
}

/// Favorites kept in memory only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    ids: Mutex<BTreeSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        MemoryStore {
            ids: Mutex::new(ids.into_iter().map(Into::into).collect()),
        }
    }
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> BTreeSet<String> {
        self.ids.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, ids: &BTreeSet<String>) {
        *self.ids.lock().unwrap_or_else(|e| e.into_inner()) = ids.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir, name: &str) -> JsonFileStore {
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        JsonFileStore::new(root.join(name))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir, "favorites.json");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir, "nested/dir/favorites.json");
        let ids: BTreeSet<String> = ["r2", "r1"].iter().map(|s| s.to_string()).collect();

        store.save(&ids);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), r#"["r1","r2"]"#);
        assert_eq!(store.load(), ids);
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir, "favorites.json");
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_empty());

        fs::write(store.path(), r#"{"ids": ["r1"]}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_failure_does_not_panic() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be makes the write fail
        let store = store_in(&temp_dir, "favorites.json");
        fs::create_dir_all(store.path()).unwrap();
        store.save(&BTreeSet::from(["r1".to_string()]));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_ids(["r1"]);
        assert_eq!(store.load(), BTreeSet::from(["r1".to_string()]));
        store.save(&BTreeSet::new());
        assert!(store.load().is_empty());
    }
}
