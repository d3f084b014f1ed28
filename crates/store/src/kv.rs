//! Key-value persistence contract.

use std::collections::HashMap;

/// Minimal settings-style store holding integer lists by key.
///
/// Infallible by contract: a backend that hits an I/O problem deals with it
/// itself and reports absent data as `None`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<Vec<i64>>;
    fn set(&mut self, key: &str, values: &[i64]);
}

impl<S: KeyValueStore> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<Vec<i64>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, values: &[i64]) {
        (**self).set(key, values)
    }
}

/// In-process store, mainly for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<i64>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, values: &[i64]) {
        self.entries.insert(key.to_string(), values.to_vec());
    }
}
