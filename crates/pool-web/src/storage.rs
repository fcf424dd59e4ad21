//! High-score persistence through the browser's `localStorage`.

use pool_core::{ScalarStore, StoreError};

/// Scalar store over `window.localStorage`.
///
/// Outside a browser (native tests) or when storage is disabled, every read
/// finds nothing and every write fails with a [`StoreError`].
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        if cfg!(not(target_arch = "wasm32")) {
            return None;
        }
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ScalarStore for LocalStorageStore {
    fn load_scalar(&self, key: &str) -> Option<f64> {
        let raw = Self::storage()?.get_item(key).ok().flatten()?;
        match raw.trim().parse::<f64>() {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("Ignoring stored {} = {:?}: {}", key, raw, err);
                None
            }
        }
    }

    fn store_scalar(&mut self, key: &str, value: f64) -> Result<(), StoreError> {
        let storage =
            Self::storage().ok_or_else(|| StoreError("localStorage unavailable".to_owned()))?;
        storage
            .set_item(key, &value.to_string())
            .map_err(|err| StoreError(format!("{:?}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_store_is_empty_and_rejects_writes() {
        let mut store = LocalStorageStore::new();
        assert_eq!(store.load_scalar("poolHighScore"), None);
        assert!(store.store_scalar("poolHighScore", 12.5).is_err());
    }
}
