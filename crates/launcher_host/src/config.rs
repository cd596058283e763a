//! Static configuration-source contracts and adapters.

use std::collections::HashMap;

/// Host service for the static key/value configuration consulted once at
/// bridge initialization.
///
/// Values are read-only from the bridge's perspective; an absent key is a
/// normal condition and callers apply their own defaults.
pub trait ConfigSource {
    /// Returns the raw configured value for `key`, or `None` when unset.
    fn get_value(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Empty configuration source for unsupported targets and default wiring.
pub struct NoopConfigSource;

impl ConfigSource for NoopConfigSource {
    fn get_value(&self, _key: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory configuration source keyed by string.
pub struct MemoryConfigSource {
    entries: HashMap<String, String>,
}

impl MemoryConfigSource {
    /// Creates a source pre-populated from `(key, value)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Sets a configuration value, replacing any prior value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl ConfigSource for MemoryConfigSource {
    fn get_value(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
