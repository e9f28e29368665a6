// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Key-value cache for raw form strings.
//!
//! The host owns the store (browser local storage, a file, memory) and hands
//! it to `CalculatorForm::hydrate` / `persist`. The calculator never sees it.

use crate::error::{CpmError, Result};
use std::collections::BTreeMap;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    /// Drop every key, including ones this crate didn't write.
    fn clear(&mut self);
}

/// In-process store, snapshot-able as a flat JSON object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
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

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "{}".to_string())
    }

    /// Restore from a `{"key": "value", ...}` snapshot.
    pub fn from_json(snapshot: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> =
            serde_json::from_str(snapshot).map_err(|e| CpmError::InvalidSnapshot(e.to_string()))?;
        Ok(Self { entries })
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
