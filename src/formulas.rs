// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Cost-per-mile formulas
//!
//! Pure scalar functions. Ratios return `None` instead of letting
//! `Infinity`/`NaN` leak out of a zero or negative denominator; the UI
//! renders `None` as a placeholder dash.
//!
//! All per-mile figures are dollars per mile, never cents.

use wasm_bindgen::prelude::*;

// ============================================================================
// GUARDED DIVISION
// ============================================================================

/// `numerator / denominator` when the denominator is strictly positive and
/// the quotient is finite, otherwise `None`.
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator.is_nan() || denominator <= 0.0 {
        return None;
    }
    let q = numerator / denominator;
    q.is_finite().then_some(q)
}

/// Clamp a sum of finite amounts that overflowed back to `±f64::MAX`.
///
/// Every parsed amount is finite, so an overflowing sum is `±inf`, never
/// `NaN`. `what` names the quantity in the log line.
pub fn saturate(value: f64, what: &str) -> f64 {
    if value.is_finite() {
        return value;
    }
    tracing::warn!(value, what, "sum overflowed, saturating");
    value.clamp(-f64::MAX, f64::MAX)
}

// ============================================================================
// FUEL
// ============================================================================

/// Fuel cost for a trip
///
/// fuel = miles / mpg * price
///
/// # Arguments
/// * `miles` - Distance driven
/// * `mpg` - Loaded average fuel efficiency
/// * `price_per_gallon` - Diesel price in $/gal
///
/// # Returns
/// Dollars of fuel, or `0.0` when `mpg <= 0` (no fuel cost applicable).
/// Never infinite: an overflowing product also collapses to `0.0`.
#[wasm_bindgen]
pub fn fuel_cost(miles: f64, mpg: f64, price_per_gallon: f64) -> f64 {
    if mpg.is_nan() || mpg <= 0.0 {
        return 0.0;
    }
    let cost = miles / mpg * price_per_gallon;
    if cost.is_finite() {
        cost
    } else {
        tracing::warn!(miles, mpg, price_per_gallon, "fuel cost overflowed, using zero");
        0.0
    }
}

// ============================================================================
// PER-MILE METRICS
// ============================================================================

/// Actual CPM: revenue earned per mile, `None` when `miles <= 0`.
#[wasm_bindgen]
pub fn actual_cost_per_mile(gross_revenue: f64, miles: f64) -> Option<f64> {
    ratio(gross_revenue, miles)
}

/// Break-even CPM: the minimum revenue per mile that avoids a loss.
#[wasm_bindgen]
pub fn break_even_cost_per_mile(total_expenses: f64, miles: f64) -> Option<f64> {
    ratio(total_expenses, miles)
}

// ============================================================================
// MARGIN
// ============================================================================

/// Net profit as a percentage of gross revenue
///
/// margin = net / gross * 100
///
/// `None` when `gross_revenue <= 0`.
#[wasm_bindgen]
pub fn profit_margin_percent(net_profit: f64, gross_revenue: f64) -> Option<f64> {
    ratio(net_profit, gross_revenue).map(|r| r * 100.0)
}
