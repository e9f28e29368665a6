// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CpmCalculator: the metrics kernel and its JSON/WASM boundary.

// ============================================================================
// The UI calls compute_json (or compute_value) on every input change with
// the raw form strings. Everything below compute() is pure.
// ============================================================================

use crate::config::CalculatorConfig;
use crate::display::{format_currency, DisplayReport};
use crate::error::Result;
use crate::formulas::{
    actual_cost_per_mile, break_even_cost_per_mile, fuel_cost, profit_margin_percent, saturate,
};
use crate::fuel_prices::FuelPriceTable;
use crate::model::{CalculatorInput, CalculatorOutput};
use crate::modes::{CalculatorForm, FormField, Mode, PeriodProjection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
}

/// Non-blocking note attached to a response. Never alters the numbers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub topic: String,
    pub message: String,
    pub severity: Severity,
}

impl Advisory {
    fn new(topic: &str, message: String, severity: Severity) -> Self {
        Self { topic: topic.to_string(), message, severity }
    }
}

/// A field value as the UI sends it: the typed string, a bare number, or
/// `null` for a cleared field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Empty,
}

impl FieldValue {
    fn into_raw(self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s,
            FieldValue::Empty => String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CalculatorRequest {
    pub mode: Mode,
    /// Applied before `fields`, so an explicit price still wins.
    pub jurisdiction: Option<String>,
    pub fields: BTreeMap<FormField, FieldValue>,
    pub config: CalculatorConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResponse {
    pub mode: Mode,
    pub input: CalculatorInput,
    pub output: CalculatorOutput,
    pub display: DisplayReport,
    pub projection: Option<PeriodProjection>,
    pub advisories: Vec<Advisory>,
}

#[wasm_bindgen]
pub struct CpmCalculator;

impl CpmCalculator {
    /// Derive every metric from one input.
    ///
    /// Pure and total: no I/O, no panics, and every ratio is either a finite
    /// number or `None`. Every dollar amount is finite; sums that overflow
    /// saturate at `±f64::MAX`.
    pub fn compute(input: &CalculatorInput) -> CalculatorOutput {
        let fuel = fuel_cost(input.miles, input.fuel_efficiency, input.fuel_price_per_gallon);
        let total_expenses = saturate(input.fixed_costs.total() + fuel, "total_expenses");
        let gross = saturate(input.gross_revenue, "gross_total");
        let net_profit = saturate(gross - total_expenses, "net_profit");

        let output = CalculatorOutput {
            fuel_cost: fuel,
            total_expenses,
            gross_total: gross,
            net_profit,
            actual_cost_per_mile: actual_cost_per_mile(gross, input.miles),
            break_even_cost_per_mile: break_even_cost_per_mile(total_expenses, input.miles),
            profit_margin_percent: profit_margin_percent(net_profit, gross),
        };
        tracing::debug!(?output, "cpm computed");
        output
    }

    /// Build the form a request describes, evaluate it and render it.
    pub fn respond(request: CalculatorRequest, table: &FuelPriceTable) -> CalculatorResponse {
        let config = request.config;
        let mut form = CalculatorForm::new(request.mode, &config);
        if let Some(code) = request.jurisdiction.as_deref() {
            form.select_jurisdiction(code, table);
        }
        for (field, value) in request.fields {
            form.set(field, value.into_raw());
        }

        let eval = form.evaluate();
        let advisories = if config.emit_advisories {
            advise(&eval.input, &eval.output, &config)
        } else {
            Vec::new()
        };

        CalculatorResponse {
            mode: request.mode,
            input: eval.input,
            output: eval.output,
            display: DisplayReport::render(&eval.output, &config),
            projection: eval.projection,
            advisories,
        }
    }

    pub fn respond_json(request_json: &str, table: &FuelPriceTable) -> Result<CalculatorResponse> {
        let request: CalculatorRequest = serde_json::from_str(request_json)?;
        Ok(Self::respond(request, table))
    }
}

#[wasm_bindgen]
impl CpmCalculator {
    /// Main entry point for the UI: raw request JSON in, response JSON out.
    ///
    /// # Example
    /// ```json
    /// {"mode": "perLoad", "jurisdiction": "TX",
    ///  "fields": {"gross": "1850", "accessorial": "150", "miles": "1000"}}
    /// ```
    ///
    /// # Errors
    /// A malformed request yields `{"error": "..."}` instead of a response;
    /// this function itself never fails.
    pub fn compute_json(request_json: &str) -> String {
        match Self::respond_json(request_json, &FuelPriceTable::builtin()) {
            Ok(response) => serde_json::to_string(&response).unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "rejected calculator request");
                serde_json::to_string(&serde_json::json!({ "error": e.to_string() }))
                    .unwrap_or_default()
            }
        }
    }

    /// Same as `compute_json`, exchanging JS objects instead of strings.
    pub fn compute_value(request: JsValue) -> std::result::Result<JsValue, JsValue> {
        let request: CalculatorRequest = serde_wasm_bindgen::from_value(request)?;
        let response = Self::respond(request, &FuelPriceTable::builtin());
        Ok(serde_wasm_bindgen::to_value(&response)?)
    }
}

/// Advisories for a computed result, in a fixed order.
pub fn advise(
    input: &CalculatorInput,
    output: &CalculatorOutput,
    config: &CalculatorConfig,
) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    let negatives = input.negative_fields();
    if !negatives.is_empty() {
        advisories.push(Advisory::new(
            "INPUT.NEGATIVE",
            format!("Negative values used as entered: {}", negatives.join(", ")),
            Severity::Warning,
        ));
    }

    if input.miles <= 0.0 {
        advisories.push(Advisory::new(
            "CPM.MILES",
            "Enter miles to see cost per mile".to_string(),
            Severity::Info,
        ));
    } else if input.fuel_efficiency <= 0.0 {
        advisories.push(Advisory::new(
            "FUEL.EFFICIENCY",
            "MPG not set: fuel cost left out of expenses".to_string(),
            Severity::Info,
        ));
    }

    if output.net_profit < 0.0 {
        advisories.push(Advisory::new(
            "PROFIT.LOSS",
            format!("Net loss of {}", format_currency(-output.net_profit, config)),
            Severity::Warning,
        ));
    }

    advisories
}
