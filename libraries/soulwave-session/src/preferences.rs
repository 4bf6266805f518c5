//! Persistent user preferences
//!
//! Small string key-value store standing in for browser local storage. Values
//! are plain strings; structured values (the signed-in user) are JSON.

use crate::error::Result;
use std::collections::HashMap;

/// Signed-in user, JSON encoded
pub const KEY_USER: &str = "soulwave_user";

/// UI theme (`"dark"` or `"light"`)
pub const KEY_THEME: &str = "soulwave_theme";

/// Set to `"true"` once onboarding has been completed
pub const KEY_ONBOARDED: &str = "soulwave_onboarded";

/// Key-value preference backend
pub trait PreferenceStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate from key-value pairs
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
