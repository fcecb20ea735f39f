//! The pipeline dictionary: shared key-value state passed between pipelets.

use crate::error::{PipeletError, Result};
use std::any::{Any, type_name};
use std::collections::HashMap;

type Value = Box<dyn Any + Send + Sync>;

/// Type-erased key-value store with typed accessors.
#[derive(Default)]
pub struct PipelineDictionary {
    entries: HashMap<String, Value>,
}

impl PipelineDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub fn put<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), Box::new(value));
    }

    /// Look up `key`; `None` if absent or of another type.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key)?.downcast_ref::<T>()
    }

    /// Look up a required entry.
    ///
    /// # Errors
    /// * `MissingInput` - `key` is absent
    /// * `TypeMismatch` - the entry holds a value of another type
    pub fn get_required<T: Any>(&self, key: &str) -> Result<&T> {
        self.entries
            .get(key)
            .ok_or_else(|| missing(key))?
            .downcast_ref::<T>()
            .ok_or_else(|| mismatch::<T>(key))
    }

    /// Mutable variant of [`get_required`](Self::get_required).
    pub fn get_required_mut<T: Any>(&mut self, key: &str) -> Result<&mut T> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| missing(key))?
            .downcast_mut::<T>()
            .ok_or_else(|| mismatch::<T>(key))
    }

    /// Remove and return a typed entry. The entry is left in place on a
    /// type mismatch.
    pub fn remove<T: Any>(&mut self, key: &str) -> Result<T> {
        let value = self.entries.remove(key).ok_or_else(|| missing(key))?;
        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => {
                self.entries.insert(key.to_string(), value);
                Err(mismatch::<T>(key))
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for PipelineDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("PipelineDictionary").field("keys", &keys).finish()
    }
}

fn missing(key: &str) -> PipeletError {
    PipeletError::MissingInput {
        key: key.to_string(),
    }
}

fn mismatch<T: Any>(key: &str) -> PipeletError {
    PipeletError::TypeMismatch {
        key: key.to_string(),
        expected: type_name::<T>(),
    }
}
