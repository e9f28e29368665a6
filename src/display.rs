// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Rendering of calculator outputs.
//!
//! Money is grouped currency (`$1,521.43`), CPM is bare dollars per mile
//! (`1.52`), margin is a percentage (`23.9%`). Anything undefined or
//! non-finite becomes the placeholder.

use crate::config::{CalculatorConfig, MAX_DECIMALS};
use crate::model::CalculatorOutput;
use serde::{Deserialize, Serialize};

/// `-$1,234.50` style. Non-finite values render as the placeholder.
pub fn format_currency(value: f64, config: &CalculatorConfig) -> String {
    if !value.is_finite() {
        return config.placeholder.clone();
    }
    let fixed = format!("{:.*}", config.money_decimals.min(MAX_DECIMALS), value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + 4);
    if value < 0.0 && !is_rounded_zero(&fixed) {
        out.push('-');
    }
    out.push_str(&config.currency_symbol);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Dollars per mile without a currency symbol.
pub fn format_cpm(value: Option<f64>, config: &CalculatorConfig) -> String {
    format_fixed(value, config.cpm_decimals, "", config)
}

pub fn format_percent(value: Option<f64>, config: &CalculatorConfig) -> String {
    format_fixed(value, config.percent_decimals, "%", config)
}

fn format_fixed(value: Option<f64>, decimals: usize, suffix: &str, config: &CalculatorConfig) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let mut s = format!("{:.*}", decimals.min(MAX_DECIMALS), v);
            if s.starts_with('-') && is_rounded_zero(&s[1..]) {
                s.remove(0);
            }
            s.push_str(suffix);
            s
        }
        _ => config.placeholder.clone(),
    }
}

fn is_rounded_zero(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0' || b == b'.')
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Display strings for every output field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayReport {
    pub fuel_cost: String,
    pub total_expenses: String,
    pub gross_total: String,
    pub net_profit: String,
    pub actual_cost_per_mile: String,
    pub break_even_cost_per_mile: String,
    pub profit_margin_percent: String,
}

impl DisplayReport {
    pub fn render(output: &CalculatorOutput, config: &CalculatorConfig) -> Self {
        Self {
            fuel_cost: format_currency(output.fuel_cost, config),
            total_expenses: format_currency(output.total_expenses, config),
            gross_total: format_currency(output.gross_total, config),
            net_profit: format_currency(output.net_profit, config),
            actual_cost_per_mile: format_cpm(output.actual_cost_per_mile, config),
            break_even_cost_per_mile: format_cpm(output.break_even_cost_per_mile, config),
            profit_margin_percent: format_percent(output.profit_margin_percent, config),
        }
    }
}
