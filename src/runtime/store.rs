//! Durable client-side storage as seen by the widget.
//!
//! Every access may fail (private browsing, quota, disabled storage). The
//! widget treats failures as "no saved state" and keeps running.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

const KEY_PREFIX: &str = "kbd-mini-state-";
const COORDS_SUFFIX: &str = "-coords";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage quota exceeded")]
    QuotaExceeded,
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Best-effort read: failures read as absent.
pub fn read_or_none<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(v) => v,
        Err(e) => {
            debug!(key, error = %e, "storage read ignored");
            None
        }
    }
}

/// Best-effort write: returns whether the value was stored.
pub fn write_or_ignore<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, value: &str) -> bool {
    match store.set(key, value) {
        Ok(()) => true,
        Err(e) => {
            debug!(key, error = %e, "storage write ignored");
            false
        }
    }
}

/// The pair of keys one widget instance persists under. A pure function of
/// `(sequence, label)`, so regenerating the same widget recovers its state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKeys {
    pub state: String,
    pub coords: String,
}

impl StorageKeys {
    pub fn new<S: AsRef<str>>(sequence: &[S], label: &str) -> Self {
        let joined = sequence
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        let mut state = format!("{}{}", KEY_PREFIX, joined);
        if !label.is_empty() {
            state.push('-');
            state.push_str(label);
        }
        let coords = format!("{}{}", state, COORDS_SUFFIX);
        Self { state, coords }
    }
}

/// Persisted drag position, stored as `{"left":n,"top":n}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedCoords {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
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
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store whose every access throws, like storage in a locked-down browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("access denied".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("access denied".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_without_label() {
        let keys = StorageKeys::new(&["control", "shift", "s"], "");
        assert_eq!(keys.state, "kbd-mini-state-control,shift,s");
        assert_eq!(keys.coords, "kbd-mini-state-control,shift,s-coords");
    }

    #[test]
    fn test_key_with_label() {
        let keys = StorageKeys::new(&["s"], "Save");
        assert_eq!(keys.state, "kbd-mini-state-s-Save");
    }
}
