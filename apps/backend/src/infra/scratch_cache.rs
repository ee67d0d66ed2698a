//! Process-wide string scratch store.
//!
//! Holds small derived values (the cached average-attempts message) that
//! are refreshed out of band and read without touching the database.

use dashmap::DashMap;

pub const AVERAGE_ATTEMPTS_KEY: &str = "MOVES_REMAINING";

/// Concurrent key/value store of strings, empty at startup.
#[derive(Debug, Default)]
pub struct ScratchCache {
    entries: DashMap<String, String>,
}

impl ScratchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn set(&self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }
}
