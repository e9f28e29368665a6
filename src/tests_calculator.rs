// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! CPM Calculator Tests
//!
//! Worked examples, the undefined-ratio policy, and the JSON boundary the
//! UI talks to.

use crate::calculator::{CalculatorRequest, CpmCalculator};
use crate::fuel_prices::FuelPriceTable;
use crate::model::{CalculatorInput, FixedCosts};
use approx::assert_relative_eq;
use proptest::prelude::*;
use serde_json::{json, Value};

fn respond(request: Value) -> Value {
    let out = CpmCalculator::compute_json(&request.to_string());
    serde_json::from_str(&out).unwrap()
}

fn example_one() -> Value {
    json!({
        "mode": "perLoad",
        "fields": {
            "gross": "1850", "accessorial": "150",
            "truckPayment": "400", "trailerPayment": "100", "insurance": "50",
            "miles": "1000", "mpg": "7", "price": "4.00",
            "driverPay": "300", "maintenance": "50", "misc": "50"
        }
    })
}

#[test]
fn test_per_load_worked_example() {
    let res = respond(example_one());
    let out = &res["output"];

    assert_relative_eq!(out["fuelCost"].as_f64().unwrap(), 571.428_571, epsilon = 1e-5);
    assert_relative_eq!(out["totalExpenses"].as_f64().unwrap(), 1521.428_571, epsilon = 1e-5);
    assert_eq!(out["grossTotal"].as_f64().unwrap(), 2000.0);
    assert_relative_eq!(out["netProfit"].as_f64().unwrap(), 478.571_428, epsilon = 1e-5);
    assert_eq!(out["actualCostPerMile"].as_f64().unwrap(), 2.0);

    let display = &res["display"];
    assert_eq!(display["fuelCost"], "$571.43");
    assert_eq!(display["totalExpenses"], "$1,521.43");
    assert_eq!(display["grossTotal"], "$2,000.00");
    assert_eq!(display["netProfit"], "$478.57");
    assert_eq!(display["actualCostPerMile"], "2.00");
    assert_eq!(display["breakEvenCostPerMile"], "1.52");
    assert_eq!(display["profitMarginPercent"], "23.9%");

    assert!(res["projection"].is_null());
    assert_eq!(res["advisories"], json!([]));
}

#[test]
fn test_zero_miles_leaves_cpm_undefined() {
    let res = respond(json!({ "mode": "monthly", "fields": { "gross": "500", "miles": "0" } }));
    let out = &res["output"];
    assert!(out["actualCostPerMile"].is_null());
    assert!(out["breakEvenCostPerMile"].is_null());
    assert_eq!(out["fuelCost"].as_f64().unwrap(), 0.0);
    assert_eq!(res["display"]["actualCostPerMile"], "\u{2014}");
    assert_eq!(res["display"]["breakEvenCostPerMile"], "\u{2014}");
    assert_eq!(res["display"]["profitMarginPercent"], "100.0%");
}

#[test]
fn test_zero_mpg_gives_zero_fuel_cost() {
    let input = CalculatorInput {
        miles: 500.0,
        fuel_efficiency: 0.0,
        fuel_price_per_gallon: 4.0,
        ..CalculatorInput::default()
    };
    let out = CpmCalculator::compute(&input);
    assert_eq!(out.fuel_cost, 0.0);
    assert_eq!(out.total_expenses, 0.0);
    assert_eq!(out.break_even_cost_per_mile, Some(0.0));
}

#[test]
fn test_zero_gross_leaves_margin_undefined() {
    let input = CalculatorInput {
        gross_revenue: 0.0,
        fixed_costs: FixedCosts { truck_payment: 200.0, driver_pay: 100.0, ..FixedCosts::default() },
        ..CalculatorInput::default()
    };
    let out = CpmCalculator::compute(&input);
    assert_eq!(out.total_expenses, 300.0);
    assert_eq!(out.net_profit, -300.0);
    assert_eq!(out.profit_margin_percent, None);
}

#[test]
fn test_monthly_ignores_accessorial_and_loads() {
    let res = respond(json!({
        "mode": "monthly",
        "fields": { "gross": "10000", "accessorial": "999", "loadsPerPeriod": "4", "miles": "8000" }
    }));
    assert_eq!(res["output"]["grossTotal"].as_f64().unwrap(), 10000.0);
    assert!(res["projection"].is_null());
}

#[test]
fn test_projection_reported_for_per_load() {
    let mut request = example_one();
    request["fields"]["loadsPerPeriod"] = json!("10");
    let res = respond(request);
    let projection = &res["projection"];
    assert_eq!(projection["loadsPerPeriod"].as_f64().unwrap(), 10.0);
    assert_eq!(projection["totals"]["grossTotal"].as_f64().unwrap(), 20000.0);
    assert_eq!(projection["totals"]["actualCostPerMile"].as_f64().unwrap(), 2.0);
}

#[test]
fn test_jurisdiction_prefills_price_unless_overridden() {
    let res = respond(json!({
        "jurisdiction": "tx",
        "fields": { "miles": "700", "mpg": "7" }
    }));
    assert_relative_eq!(res["input"]["fuelPricePerGallon"].as_f64().unwrap(), 3.78);
    assert_relative_eq!(res["output"]["fuelCost"].as_f64().unwrap(), 378.0, epsilon = 1e-9);

    let res = respond(json!({
        "jurisdiction": "tx",
        "fields": { "miles": "700", "mpg": "7", "price": "4.10" }
    }));
    assert_relative_eq!(res["input"]["fuelPricePerGallon"].as_f64().unwrap(), 4.10);
}

#[test]
fn test_numbers_and_garbage_accepted() {
    let res = respond(json!({
        "fields": { "gross": 1200, "miles": 600, "truckPayment": "n/a", "mpg": "" }
    }));
    assert_eq!(res["input"]["fixedCosts"]["truckPayment"].as_f64().unwrap(), 0.0);
    assert_eq!(res["output"]["actualCostPerMile"].as_f64().unwrap(), 2.0);
    let topics: Vec<&str> = res["advisories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["topic"].as_str().unwrap())
        .collect();
    assert_eq!(topics, vec!["FUEL.EFFICIENCY"]);
}

#[test]
fn test_config_in_request() {
    let res = respond(json!({
        "fields": { "gross": "100", "insurance": "400" },
        "config": { "emitAdvisories": false, "placeholder": "n/a" }
    }));
    assert_eq!(res["advisories"], json!([]));
    assert_eq!(res["display"]["actualCostPerMile"], "n/a");
    assert_eq!(res["display"]["netProfit"], "-$300.00");
}

#[test]
fn test_malformed_request_reports_error() {
    let res: Value = serde_json::from_str(&CpmCalculator::compute_json("{not json")).unwrap();
    assert!(res["error"].as_str().unwrap().starts_with("invalid request"));

    let res = respond(json!({ "fields": { "tolls": "40" } }));
    assert!(res["error"].is_string());

    let res = respond(json!({ "mode": "monthly", "bogus": 1, "fields": { "gross": "100" } }));
    assert!(res["error"].as_str().unwrap().contains("bogus"));
    assert!(res.get("output").is_none());
}

#[test]
fn test_overflowing_sums_stay_finite() {
    let table = FuelPriceTable::builtin();
    let request: CalculatorRequest = serde_json::from_value(json!({
        "mode": "monthly",
        "fields": { "truckPayment": "1e308", "trailerPayment": "1e308", "gross": "1000", "miles": "100" }
    }))
    .unwrap();
    let res = CpmCalculator::respond(request, &table);
    assert!(res.output.total_expenses.is_finite());
    assert!(res.output.net_profit.is_finite());
    assert!(res.output.break_even_cost_per_mile.is_some());
    let out = serde_json::to_value(&res.output).unwrap();
    assert!(out["totalExpenses"].is_number());
    assert!(out["breakEvenCostPerMile"].is_number());

    let request: CalculatorRequest = serde_json::from_value(json!({
        "fields": { "gross": "1e308", "accessorial": "1e308", "miles": "100" }
    }))
    .unwrap();
    let res = CpmCalculator::respond(request, &table);
    assert!(res.output.gross_total.is_finite());
    assert!(res.output.actual_cost_per_mile.is_some());
    let out = serde_json::to_value(&res.output).unwrap();
    assert!(out["grossTotal"].is_number());
    assert!(out["actualCostPerMile"].is_number());
}

#[test]
fn test_respond_is_repeatable() {
    let request: CalculatorRequest = serde_json::from_value(example_one()).unwrap();
    let table = FuelPriceTable::builtin();
    let a = CpmCalculator::respond(request.clone(), &table);
    let b = CpmCalculator::respond(request, &table);
    assert_eq!(a.output, b.output);
    assert_eq!(a.display, b.display);
}

fn amount() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0..100_000.0f64]
}

prop_compose! {
    fn arb_input()(
        gross in amount(),
        costs in prop::array::uniform6(amount()),
        miles in prop_oneof![Just(0.0), 0.0..10_000.0f64],
        mpg in -2.0..15.0f64,
        price in 0.0..8.0f64
    ) -> CalculatorInput {
        CalculatorInput {
            gross_revenue: gross,
            fixed_costs: FixedCosts {
                truck_payment: costs[0],
                trailer_payment: costs[1],
                insurance: costs[2],
                driver_pay: costs[3],
                maintenance: costs[4],
                miscellaneous: costs[5],
            },
            miles,
            fuel_efficiency: mpg,
            fuel_price_per_gallon: price,
        }
    }
}

fn close(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= 1e-9 * (scale.abs() + 1.0)
}

proptest! {
    #[test]
    fn prop_expenses_always_finite(input in arb_input()) {
        let out = CpmCalculator::compute(&input);
        prop_assert!(out.total_expenses.is_finite());
        prop_assert!(out.total_expenses >= 0.0);
        if input.fuel_efficiency <= 0.0 {
            prop_assert_eq!(out.fuel_cost, 0.0);
        }
    }

    #[test]
    fn prop_undefined_iff_denominator_not_positive(input in arb_input()) {
        let out = CpmCalculator::compute(&input);
        prop_assert_eq!(out.actual_cost_per_mile.is_none(), input.miles <= 0.0);
        prop_assert_eq!(out.break_even_cost_per_mile.is_none(), input.miles <= 0.0);
        prop_assert_eq!(out.profit_margin_percent.is_none(), input.gross_revenue <= 0.0);
    }

    #[test]
    fn prop_idempotent(input in arb_input()) {
        let a = CpmCalculator::compute(&input);
        let b = CpmCalculator::compute(&input);
        prop_assert_eq!(a.total_expenses.to_bits(), b.total_expenses.to_bits());
        prop_assert_eq!(a.net_profit.to_bits(), b.net_profit.to_bits());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_linear_scaling(input in arb_input(), k in 0.1..100.0f64) {
        let base = CpmCalculator::compute(&input);
        let scaled = CpmCalculator::compute(&input.scaled(k));
        let magnitude = k * (base.gross_total + base.total_expenses);

        prop_assert!(close(scaled.total_expenses, base.total_expenses * k, base.total_expenses * k));
        prop_assert!(close(scaled.net_profit, base.net_profit * k, magnitude));

        match (base.actual_cost_per_mile, scaled.actual_cost_per_mile) {
            (Some(a), Some(b)) => { prop_assert!(close(a, b, a)); }
            (a, b) => { prop_assert_eq!(a, b); }
        }
        match (base.break_even_cost_per_mile, scaled.break_even_cost_per_mile) {
            (Some(a), Some(b)) => { prop_assert!(close(a, b, a)); }
            (a, b) => { prop_assert_eq!(a, b); }
        }
        match (base.profit_margin_percent, scaled.profit_margin_percent) {
            (Some(a), Some(b)) => {
                let spread = 100.0 * (base.gross_total + base.total_expenses) / base.gross_total;
                prop_assert!(close(a, b, spread));
            }
            (a, b) => { prop_assert_eq!(a, b); }
        }
    }
}
