// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Static diesel price reference (USD per gallon, by jurisdiction).
// Only ever used to pre-fill the price field; the user can always override.

use crate::error::{CpmError, Result};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Built-in table: 50 states + DC. Editable reference data, not live prices.
pub const DIESEL_PRICE_USD: [(&str, f64); 51] = [
    ("AL", 3.85), ("AK", 4.25), ("AZ", 3.97), ("AR", 3.79), ("CA", 5.12),
    ("CO", 4.01), ("CT", 4.19), ("DE", 3.99), ("DC", 4.25), ("FL", 3.95),
    ("GA", 3.89), ("HI", 5.20), ("ID", 4.09), ("IL", 4.15), ("IN", 3.99),
    ("IA", 3.92), ("KS", 3.80), ("KY", 3.88), ("LA", 3.78), ("ME", 4.05),
    ("MD", 3.99), ("MA", 4.02), ("MI", 3.98), ("MN", 3.90), ("MS", 3.77),
    ("MO", 3.76), ("MT", 4.02), ("NE", 3.85), ("NV", 4.35), ("NH", 4.01),
    ("NJ", 3.99), ("NM", 3.95), ("NY", 4.15), ("NC", 3.89), ("ND", 3.92),
    ("OH", 3.92), ("OK", 3.76), ("OR", 4.25), ("PA", 4.28), ("RI", 4.01),
    ("SC", 3.84), ("SD", 3.92), ("TN", 3.86), ("TX", 3.78), ("UT", 4.02),
    ("VT", 4.05), ("VA", 3.90), ("WA", 4.70), ("WV", 3.98), ("WI", 3.88),
    ("WY", 3.95),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuelPriceEntry {
    pub code: String,
    pub price: f64,
}

/// Jurisdiction code -> $/gal lookup, kept sorted by code.
#[derive(Clone, Debug, PartialEq)]
pub struct FuelPriceTable {
    entries: Vec<FuelPriceEntry>,
}

impl Default for FuelPriceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FuelPriceTable {
    pub fn builtin() -> Self {
        Self::from_entries(
            DIESEL_PRICE_USD
                .iter()
                .map(|(code, price)| FuelPriceEntry { code: (*code).to_string(), price: *price }),
        )
    }

    /// Build a custom table. Codes are upper-cased; a repeated code keeps
    /// the last price given.
    pub fn from_entries(entries: impl IntoIterator<Item = FuelPriceEntry>) -> Self {
        let mut out: Vec<FuelPriceEntry> = Vec::new();
        for mut entry in entries {
            entry.code = entry.code.trim().to_ascii_uppercase();
            match out.binary_search_by(|e| e.code.cmp(&entry.code)) {
                Ok(i) => out[i].price = entry.price,
                Err(i) => out.insert(i, entry),
            }
        }
        Self { entries: out }
    }

    pub fn lookup(&self, code: &str) -> Option<f64> {
        let code = code.trim().to_ascii_uppercase();
        self.entries
            .binary_search_by(|e| e.code.as_str().cmp(code.as_str()))
            .ok()
            .map(|i| self.entries[i].price)
    }

    pub fn require(&self, code: &str) -> Result<f64> {
        self.lookup(code)
            .ok_or_else(|| CpmError::UnknownJurisdiction(code.trim().to_string()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }

    pub fn entries(&self) -> &[FuelPriceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Built-in diesel price for a jurisdiction code, `None` if unknown.
#[wasm_bindgen]
pub fn fuel_price_for(code: &str) -> Option<f64> {
    FuelPriceTable::builtin().lookup(code)
}
