//! Session-scoped persistence for the last search query.
//!
//! One scalar, one fixed key. Reads happen once at startup, writes on every
//! query change, and both are best-effort: a missing file, a read-only temp
//! directory or any other I/O failure degrades to "no persisted query"
//! without surfacing an error anywhere.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Fixed storage key for the persisted query.
const QUERY_KEY: &str = "notedex-last-query";

/// Narrow key-value capability the interaction layer persists through.
/// Swappable for tests and for `--no-persist` runs.
pub trait QueryStore {
    /// Last persisted query, or `None` if absent or unreadable.
    fn load(&self) -> Option<String>;

    /// Persist the raw query string. Failures are swallowed.
    fn save(&self, query: &str);
}

impl<S: QueryStore + ?Sized> QueryStore for std::sync::Arc<S> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, query: &str) {
        (**self).save(query)
    }
}

/// File-backed store under the OS scratch directory. The value is the raw
/// query string, unnormalized; the OS reclaims the file with the rest of
/// the temp space, which is as close to session scope as a terminal app
/// gets.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn session_default() -> Self {
        Self::new(std::env::temp_dir().join(QUERY_KEY))
    }
}

impl QueryStore for FileStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn save(&self, query: &str) {
        let _ = fs::write(&self.path, query);
    }
}

/// In-memory store: the test double, also used when persistence is
/// disabled.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(query: &str) -> Self {
        Self {
            slot: Mutex::new(Some(query.to_string())),
        }
    }
}

impl QueryStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, query: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(query.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), None);
        store.save("use state");
        assert_eq!(store.load(), Some("use state".to_string()));
    }

    #[test]
    fn seeded_store_loads_immediately() {
        let store = MemoryStore::seeded("hooks");
        assert_eq!(store.load(), Some("hooks".to_string()));
    }

    #[test]
    fn file_store_round_trips() {
        let path = std::env::temp_dir().join("notedex-store-test");
        let store = FileStore::new(path.clone());
        store.save("  Raw Query "); // stored verbatim, not normalized
        assert_eq!(store.load(), Some("  Raw Query ".to_string()));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_loads_none() {
        let store = FileStore::new(std::env::temp_dir().join("notedex-store-absent"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn unwritable_path_is_silently_ignored() {
        let store = FileStore::new(PathBuf::from("/nonexistent-dir/notedex-query"));
        store.save("anything");
        assert_eq!(store.load(), None);
    }
}
