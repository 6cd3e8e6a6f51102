//! Key/value persistence behind a trait so state logic runs without a browser.

use web_sys::window;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage`; every operation is a no-op when it is unavailable.
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            inner: window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self
            .inner
            .as_ref()
            .ok_or_else(|| "localStorage is not available".to_string())?;
        storage.set_item(key, value).map_err(|e| format!("{e:?}"))
    }
}

#[cfg(test)]
pub mod memory {
    use super::KeyValueStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl MemoryStore {
        /// Every write fails, like a full or disabled localStorage.
        pub fn read_only() -> Self {
            Self {
                read_only: true,
                ..Self::default()
            }
        }

        pub fn with_item(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get_item(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
            if self.read_only {
                return Err("quota exceeded".to_string());
            }
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
