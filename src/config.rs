// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};

/// Upper bound on any `*_decimals` setting; larger requests are clamped.
pub const MAX_DECIMALS: usize = 10;

/// Knobs shared by the form model, the formatters and the JSON entry point.
///
/// Every field has a default, so a request may carry a partial object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorConfig {
    /// Pre-filled MPG for a fresh form, as the user would type it.
    pub default_mpg: String,
    pub currency_symbol: String,
    /// Shown wherever a ratio is undefined.
    pub placeholder: String,
    /// Digits after the point, at most `MAX_DECIMALS`.
    pub money_decimals: usize,
    pub cpm_decimals: usize,
    pub percent_decimals: usize,
    /// Attach non-blocking advisories to JSON responses.
    pub emit_advisories: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_mpg: "7".to_string(),
            currency_symbol: "$".to_string(),
            placeholder: "\u{2014}".to_string(),
            money_decimals: 2,
            cpm_decimals: 2,
            percent_decimals: 1,
            emit_advisories: true,
        }
    }
}
