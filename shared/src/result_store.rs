use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("failed to encode history: {0}")]
    Encode(String),
}

/// Minimal string key-value store. The browser's `localStorage` implements this
/// in the frontend; `MemoryStore` stands in for it everywhere else.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Reads and writes outcome sequences as JSON arrays. Anything that cannot be
/// read back as a sequence is treated as "no history".
pub struct ResultStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ResultStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Could not read '{}' from storage: {}", key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Ignoring malformed history under '{}': {}", key, e);
                Vec::new()
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: &str, entries: &[T]) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_string(entries).map_err(|e| StoreError::Encode(e.to_string()))?;
        self.backend.set(key, &encoded)
    }

    pub fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)
    }
}

/// Ordered outcome list that never grows past `capacity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultHistory<T> {
    entries: Vec<T>,
    capacity: usize,
}

impl<T> ResultHistory<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a history from previously stored entries, dropping anything past
    /// the cap.
    pub fn from_entries(mut entries: Vec<T>, capacity: usize) -> Self {
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    /// Appends an outcome. Returns false (and leaves the history alone) when full.
    pub fn push(&mut self, entry: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.entries.len())
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let store = ResultStore::new(MemoryStore::new());
        let loaded: Vec<String> = store.load("nothing-here");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_malformed_value_loads_empty() {
        let store = ResultStore::new(MemoryStore::new());
        store.backend().set("wheel", "{not json").unwrap();
        let loaded: Vec<String> = store.load("wheel");
        assert!(loaded.is_empty());

        store.backend().set("wheel", "{\"a\": 1}").unwrap();
        let loaded: Vec<String> = store.load("wheel");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_wrong_element_type_loads_empty() {
        let store = ResultStore::new(MemoryStore::new());
        store.backend().set("bucket", "[\"one\", \"two\"]").unwrap();
        let loaded: Vec<u32> = store.load("bucket");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_then_load_and_clear() {
        let store = ResultStore::new(MemoryStore::new());
        store.save("bucket", &[3u32, 1, 7]).unwrap();
        assert_eq!(store.backend().get("bucket").unwrap().as_deref(), Some("[3,1,7]"));
        assert_eq!(store.load::<u32>("bucket"), vec![3, 1, 7]);

        store.save("bucket", &[9u32]).unwrap();
        assert_eq!(store.load::<u32>("bucket"), vec![9]);

        store.clear("bucket").unwrap();
        assert!(store.load::<u32>("bucket").is_empty());
    }

    #[test]
    fn test_unreadable_backend_loads_empty_and_reports_on_save() {
        let store = ResultStore::new(BrokenStore);
        assert!(store.load::<String>("wheel").is_empty());
        assert_eq!(store.save("wheel", &["warm_hug"]), Err(StoreError::Unavailable));
    }

    #[test]
    fn test_history_is_capped() {
        let mut history = ResultHistory::new(3);
        assert!(history.push("a"));
        assert!(history.push("b"));
        assert!(history.push("c"));
        assert!(!history.push("d"));
        assert_eq!(history.entries(), &["a", "b", "c"]);
        assert_eq!(history.remaining(), 0);

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.remaining(), 3);
    }

    #[test]
    fn test_from_entries_truncates_to_capacity() {
        let history = ResultHistory::from_entries(vec![1, 2, 3, 4, 5], 3);
        assert_eq!(history.entries(), &[1, 2, 3]);
        assert!(history.is_full());
    }
}
