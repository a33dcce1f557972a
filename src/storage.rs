//! Storage backends
//!
//! A narrow string key-value port over the browser's per-origin
//! LocalStorage. Reads collapse "unavailable" and "absent" into `None`;
//! writes are fire-and-forget. Native builds and tests use the in-memory
//! backend.

use std::cell::RefCell;
use std::collections::HashMap;

/// Reserved keys in the backing namespace
pub mod keys {
    /// Full result sequence (JSON array of GameResult)
    pub const RESULTS: &str = "gameResults";
    /// Streak counter (decimal integer text)
    pub const STREAK: &str = "streak";
    /// Date stamp for the cached daily challenge (local date string)
    pub const DAILY_CHALLENGE_DATE: &str = "dailyChallengeDate";
    /// Cached daily challenge payload (JSON GameInfo)
    pub const DAILY_CHALLENGE: &str = "dailyChallenge";
}

/// String key-value persistence port
pub trait StorageBackend {
    /// Read a value; `None` covers absent, unreadable, and unavailable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value; failures are swallowed
    fn set(&self, key: &str, value: &str);
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// Browser LocalStorage backend (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// In-memory backend for native builds and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a key (tests use this to simulate missing payloads)
    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}
