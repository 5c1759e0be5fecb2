// crates/foodframe-core/src/storage.rs

//! In-memory collaborators.

use crate::error::Result;
use crate::traits::{CityStore, ExternalActions};
use std::collections::HashMap;

/// A [`CityStore`] backed by a `HashMap`. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `key = value`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl CityStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Records every URL it is asked to open, in order.
#[derive(Debug, Clone, Default)]
pub struct UrlLog {
    pub opened: Vec<String>,
}

impl ExternalActions for UrlLog {
    fn open_url(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_raw_values() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("userCity").unwrap(), None);
        store.set("userCity", "TOKYO").unwrap();
        assert_eq!(store.get("userCity").unwrap().as_deref(), Some("TOKYO"));
        assert_eq!(store.peek("userCity"), Some("TOKYO"));
    }
}
