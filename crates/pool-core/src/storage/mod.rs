//! Best-effort persistence of single numeric values (high scores).
//!
//! Reads that fail or find nothing count as zero; writes that fail are
//! logged and dropped. Nothing here can end a game.

use std::collections::HashMap;
use std::fmt;

/// Why a scalar could not be written.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scalar store: {}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// Key/value storage for one number per key.
pub trait ScalarStore {
    /// The stored value, or `None` when absent or unreadable.
    fn load_scalar(&self, key: &str) -> Option<f64>;

    fn store_scalar(&mut self, key: &str, value: f64) -> Result<(), StoreError>;
}

/// In-memory store. Used natively and as the default engine store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScalarStore for MemoryStore {
    fn load_scalar(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn store_scalar(&mut self, key: &str, value: f64) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }
}

/// A persisted best value under a fixed key.
#[derive(Debug, Clone, PartialEq)]
pub struct HighScore {
    key: String,
    best: f64,
}

impl HighScore {
    /// Read the best value from `store`. Absent, unreadable or non-finite
    /// values start from zero.
    pub fn load(store: &dyn ScalarStore, key: &str) -> Self {
        let best = store
            .load_scalar(key)
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        Self {
            key: key.to_owned(),
            best,
        }
    }

    pub fn best(&self) -> f64 {
        self.best
    }

    /// Record `value`. Returns true (and writes through) only when it beats
    /// the current best. A failed write keeps the new best in memory.
    pub fn submit(&mut self, store: &mut dyn ScalarStore, value: f64) -> bool {
        if !(value > self.best) {
            return false;
        }
        self.best = value;
        if let Err(err) = store.store_scalar(&self.key, value) {
            log::warn!("High score {} not saved: {}", value, err);
        }
        true
    }
}
