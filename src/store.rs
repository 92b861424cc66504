//! Key-value persistence boundary for scores and settings.
//!
//! The engine never reads or writes a store; only the session layer does,
//! through the [`KeyValueStore`] trait, so a front-end can plug in whatever
//! backing it has (browser-style storage, a file, a test map). Values are
//! JSON strings.

use std::collections::HashMap;

/// A flat string-keyed store with JSON string values.
///
/// `get` returning `None` means the key is absent; an unparseable value is
/// treated the same way by callers rather than surfaced as an error.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
    fn clear(&mut self);
}

/// In-memory store. Fast but volatile; good for tests and for running
/// without any persistence wired up.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// One player's running win/loss record across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoreRecord {
    pub wins: u32,
    pub losses: u32,
}
