//! Browser localStorage access behind a small store trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write behavior so the theme logic can be
//! exercised against an in-memory store in tests.

use std::cell::RefCell;
use std::collections::HashMap;

/// String key-value persistence.
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`. Off-browser every read misses and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl ThemeStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("localStorage write for {key} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store; stands in for localStorage across a simulated reload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
