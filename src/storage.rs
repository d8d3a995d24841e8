//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use todo_core::{DomainError, DomainResult, KeyValueStore};

/// Handle to the page's localStorage, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or("no window object")?;
    window
        .local_storage()
        .map_err(|e| format!("{:?}", e))?
        .ok_or_else(|| "localStorage is disabled".to_string())
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let storage = local_storage().map_err(DomainError::StoreRead)?;
        storage
            .get_item(key)
            .map_err(|e| DomainError::StoreRead(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let storage = local_storage().map_err(DomainError::StoreWrite)?;
        storage
            .set_item(key, value)
            .map_err(|e| DomainError::StoreWrite(format!("{:?}", e)))
    }
}
