// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CPM Core — trucking cost-per-mile calculator
// Shared by the browser UI (WASM) and the cpm_compute CLI.
//

pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod formulas;
pub mod fuel_prices;
pub mod model;
pub mod modes;
pub mod parse;
pub mod session;
pub mod storage;
#[cfg(test)]
pub mod tests_calculator;

// Re-export core types
pub use calculator::{Advisory, CalculatorRequest, CalculatorResponse, CpmCalculator, Severity};
pub use config::CalculatorConfig;
pub use display::DisplayReport;
pub use error::CpmError;
pub use fuel_prices::FuelPriceTable;
pub use model::{CalculatorInput, CalculatorOutput, CostBucket, FixedCosts};
pub use modes::{CalculatorForm, FormField, Mode, PeriodProjection};
pub use storage::{KeyValueStore, MemoryStore};
