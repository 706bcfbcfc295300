use shared::result_store::{KeyValueStore, ResultStore, StoreError};
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

/// The browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<Storage, StoreError> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

fn backend_error(e: JsValue) -> StoreError {
    StoreError::Backend(format!("{:?}", e))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(backend_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(backend_error)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?.remove_item(key).map_err(backend_error)
    }
}

pub fn local_results() -> ResultStore<LocalStore> {
    ResultStore::new(LocalStore)
}

/// Writes `entries` under `key`, logging instead of failing.
pub fn persist<T: serde::Serialize>(key: &str, entries: &[T]) {
    if let Err(e) = local_results().save(key, entries) {
        log::error!("Failed to save '{}': {}", key, e);
    }
}
