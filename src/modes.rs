// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Calculator forms: per-load and monthly.
//
// Both modes hold raw strings exactly as typed and assemble a
// CalculatorInput on demand. They differ only in which fields exist and in
// how revenue is put together; the formulas are shared.

use crate::calculator::CpmCalculator;
use crate::config::CalculatorConfig;
use crate::formulas::saturate;
use crate::fuel_prices::FuelPriceTable;
use crate::model::{CalculatorInput, CalculatorOutput, CostBucket};
use crate::parse::{parse_amount, parse_optional};
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    #[default]
    PerLoad,
    Monthly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Gross,
    Accessorial,
    TruckPayment,
    TrailerPayment,
    Insurance,
    DriverPay,
    Maintenance,
    Misc,
    Miles,
    Mpg,
    State,
    Price,
    LoadsPerPeriod,
}

const PER_LOAD_FIELDS: &[FormField] = &[
    FormField::Gross,
    FormField::Accessorial,
    FormField::TruckPayment,
    FormField::TrailerPayment,
    FormField::Insurance,
    FormField::DriverPay,
    FormField::Maintenance,
    FormField::Misc,
    FormField::Miles,
    FormField::Mpg,
    FormField::State,
    FormField::Price,
    FormField::LoadsPerPeriod,
];

const MONTHLY_FIELDS: &[FormField] = &[
    FormField::Gross,
    FormField::TruckPayment,
    FormField::TrailerPayment,
    FormField::Insurance,
    FormField::DriverPay,
    FormField::Maintenance,
    FormField::Misc,
    FormField::Miles,
    FormField::Mpg,
    FormField::State,
    FormField::Price,
];

impl Mode {
    /// Prefix for every cached field of this form.
    pub fn cache_key(self) -> &'static str {
        match self {
            Mode::PerLoad => "perload_v1",
            Mode::Monthly => "monthly_v1",
        }
    }

    pub fn miles_label(self) -> &'static str {
        match self {
            Mode::PerLoad => "Miles (this load)",
            Mode::Monthly => "Miles (Monthly Total)",
        }
    }

    pub fn fields(self) -> &'static [FormField] {
        match self {
            Mode::PerLoad => PER_LOAD_FIELDS,
            Mode::Monthly => MONTHLY_FIELDS,
        }
    }

    pub fn has_field(self, field: FormField) -> bool {
        self.fields().contains(&field)
    }
}

impl FormField {
    /// Storage key suffix, stable across releases.
    pub fn suffix(self) -> &'static str {
        match self {
            FormField::Gross => "gross",
            FormField::Accessorial => "acc",
            FormField::TruckPayment => "truck",
            FormField::TrailerPayment => "trail",
            FormField::Insurance => "ins",
            FormField::DriverPay => "driver",
            FormField::Maintenance => "maint",
            FormField::Misc => "misc",
            FormField::Miles => "miles",
            FormField::Mpg => "mpg",
            FormField::State => "state",
            FormField::Price => "price",
            FormField::LoadsPerPeriod => "loads",
        }
    }

    pub fn cost_bucket(self) -> Option<CostBucket> {
        match self {
            FormField::TruckPayment => Some(CostBucket::TruckPayment),
            FormField::TrailerPayment => Some(CostBucket::TrailerPayment),
            FormField::Insurance => Some(CostBucket::Insurance),
            FormField::DriverPay => Some(CostBucket::DriverPay),
            FormField::Maintenance => Some(CostBucket::Maintenance),
            FormField::Misc => Some(CostBucket::Miscellaneous),
            _ => None,
        }
    }
}

/// Per-load totals projected over a period by linear scaling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodProjection {
    pub loads_per_period: f64,
    pub totals: CalculatorOutput,
}

impl PeriodProjection {
    /// `None` unless `loads_per_period` is strictly positive.
    pub fn from_per_load(per_load: &CalculatorOutput, loads_per_period: f64) -> Option<Self> {
        if loads_per_period.is_nan() || loads_per_period <= 0.0 {
            return None;
        }
        Some(Self {
            loads_per_period,
            totals: per_load.scaled(loads_per_period),
        })
    }
}

/// What one recomputation of a form yields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub input: CalculatorInput,
    pub output: CalculatorOutput,
    pub projection: Option<PeriodProjection>,
}

/// Raw field values for one calculator, as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorForm {
    mode: Mode,
    values: BTreeMap<FormField, String>,
}

impl CalculatorForm {
    pub fn new(mode: Mode, config: &CalculatorConfig) -> Self {
        let mut form = Self { mode, values: BTreeMap::new() };
        form.reset(config);
        form
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current raw value, empty if never set.
    pub fn get(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Store a raw value. Fields the mode doesn't carry are ignored and
    /// reported as `false`.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if !self.mode.has_field(field) {
            tracing::debug!(?field, mode = ?self.mode, "field not used by this form");
            return false;
        }
        self.values.insert(field, value.into());
        true
    }

    /// Back to a fresh form: everything empty except the default MPG.
    pub fn reset(&mut self, config: &CalculatorConfig) {
        self.values.clear();
        self.values.insert(FormField::Mpg, config.default_mpg.clone());
    }

    /// Pick a jurisdiction and pre-fill the fuel price from the table.
    /// Unknown codes still record the selection but leave the price alone.
    pub fn select_jurisdiction(&mut self, code: &str, table: &FuelPriceTable) -> Option<f64> {
        let code = code.trim().to_ascii_uppercase();
        let price = table.lookup(&code);
        if let Some(p) = price {
            self.set(FormField::Price, p.to_string());
        }
        self.set(FormField::State, code);
        price
    }

    fn amount(&self, field: FormField) -> f64 {
        parse_amount(self.get(field))
    }

    pub fn to_input(&self) -> CalculatorInput {
        let mut input = CalculatorInput {
            gross_revenue: self.amount(FormField::Gross),
            miles: self.amount(FormField::Miles),
            fuel_efficiency: self.amount(FormField::Mpg),
            fuel_price_per_gallon: self.amount(FormField::Price),
            ..CalculatorInput::default()
        };
        if self.mode == Mode::PerLoad {
            let gross = input.gross_revenue + self.amount(FormField::Accessorial);
            input.gross_revenue = saturate(gross, "gross_total");
        }
        for field in self.mode.fields() {
            if let Some(bucket) = field.cost_bucket() {
                input.fixed_costs.set(bucket, self.amount(*field));
            }
        }
        input
    }

    /// Projection multiplier; per-load only, and only when positive.
    pub fn loads_per_period(&self) -> Option<f64> {
        if self.mode != Mode::PerLoad {
            return None;
        }
        parse_optional(self.get(FormField::LoadsPerPeriod)).filter(|k| *k > 0.0)
    }

    pub fn evaluate(&self) -> Evaluation {
        let input = self.to_input();
        let output = CpmCalculator::compute(&input);
        let projection = self
            .loads_per_period()
            .and_then(|k| PeriodProjection::from_per_load(&output, k));
        Evaluation { input, output, projection }
    }

    /// Rebuild a form from the cache. Missing or empty keys fall back to
    /// defaults.
    pub fn hydrate(mode: Mode, store: &dyn KeyValueStore, config: &CalculatorConfig) -> Self {
        let mut form = Self::new(mode, config);
        for field in mode.fields() {
            let cached = store.get(&cache_key(mode, *field)).filter(|v| !v.is_empty());
            if let Some(value) = cached {
                form.values.insert(*field, value);
            }
        }
        form
    }

    /// Write every field of this form to the cache, empty ones included.
    pub fn persist(&self, store: &mut dyn KeyValueStore) {
        for field in self.mode.fields() {
            store.set(&cache_key(self.mode, *field), self.get(*field));
        }
    }
}

pub fn cache_key(mode: Mode, field: FormField) -> String {
    format!("{}_{}", mode.cache_key(), field.suffix())
}
