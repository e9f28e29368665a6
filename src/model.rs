// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};

/// The fixed set of named expense buckets a load or month carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostBucket {
    TruckPayment,
    TrailerPayment,
    Insurance,
    DriverPay,
    Maintenance,
    Miscellaneous,
}

impl CostBucket {
    pub const ALL: [CostBucket; 6] = [
        CostBucket::TruckPayment,
        CostBucket::TrailerPayment,
        CostBucket::Insurance,
        CostBucket::DriverPay,
        CostBucket::Maintenance,
        CostBucket::Miscellaneous,
    ];

    /// Wire name, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            CostBucket::TruckPayment => "truckPayment",
            CostBucket::TrailerPayment => "trailerPayment",
            CostBucket::Insurance => "insurance",
            CostBucket::DriverPay => "driverPay",
            CostBucket::Maintenance => "maintenance",
            CostBucket::Miscellaneous => "miscellaneous",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CostBucket::TruckPayment => "Truck Payment",
            CostBucket::TrailerPayment => "Trailer Payment",
            CostBucket::Insurance => "Insurance",
            CostBucket::DriverPay => "Driver Pay",
            CostBucket::Maintenance => "Maintenance",
            CostBucket::Miscellaneous => "Misc",
        }
    }
}

/// Dollar amount per expense bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixedCosts {
    pub truck_payment: f64,
    pub trailer_payment: f64,
    pub insurance: f64,
    pub driver_pay: f64,
    pub maintenance: f64,
    pub miscellaneous: f64,
}

impl FixedCosts {
    pub fn get(&self, bucket: CostBucket) -> f64 {
        match bucket {
            CostBucket::TruckPayment => self.truck_payment,
            CostBucket::TrailerPayment => self.trailer_payment,
            CostBucket::Insurance => self.insurance,
            CostBucket::DriverPay => self.driver_pay,
            CostBucket::Maintenance => self.maintenance,
            CostBucket::Miscellaneous => self.miscellaneous,
        }
    }

    pub fn set(&mut self, bucket: CostBucket, amount: f64) {
        let slot = match bucket {
            CostBucket::TruckPayment => &mut self.truck_payment,
            CostBucket::TrailerPayment => &mut self.trailer_payment,
            CostBucket::Insurance => &mut self.insurance,
            CostBucket::DriverPay => &mut self.driver_pay,
            CostBucket::Maintenance => &mut self.maintenance,
            CostBucket::Miscellaneous => &mut self.miscellaneous,
        };
        *slot = amount;
    }

    pub fn total(&self) -> f64 {
        CostBucket::ALL.iter().map(|b| self.get(*b)).sum()
    }

    pub fn scaled(&self, k: f64) -> FixedCosts {
        let mut out = FixedCosts::default();
        for bucket in CostBucket::ALL {
            out.set(bucket, self.get(bucket) * k);
        }
        out
    }
}

/// One recomputation's worth of numeric input.
///
/// `gross_revenue` is the revenue the formulas see; in per-load mode it is
/// already linehaul + accessorials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorInput {
    pub gross_revenue: f64,
    pub fixed_costs: FixedCosts,
    pub miles: f64,
    pub fuel_efficiency: f64,
    pub fuel_price_per_gallon: f64,
}

impl CalculatorInput {
    /// Scale the additive quantities (revenue, costs, miles) by `k`.
    /// Efficiency and price are rates and stay put.
    pub fn scaled(&self, k: f64) -> CalculatorInput {
        CalculatorInput {
            gross_revenue: self.gross_revenue * k,
            fixed_costs: self.fixed_costs.scaled(k),
            miles: self.miles * k,
            ..*self
        }
    }

    /// Any field below zero. These are computed as-is, never rejected.
    pub fn negative_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.gross_revenue < 0.0 {
            fields.push("grossRevenue");
        }
        for bucket in CostBucket::ALL {
            if self.fixed_costs.get(bucket) < 0.0 {
                fields.push(bucket.key());
            }
        }
        if self.miles < 0.0 {
            fields.push("miles");
        }
        if self.fuel_efficiency < 0.0 {
            fields.push("fuelEfficiency");
        }
        if self.fuel_price_per_gallon < 0.0 {
            fields.push("fuelPricePerGallon");
        }
        fields
    }
}

/// Derived metrics. Ratio fields are `None` when their denominator is not
/// positive; they serialize as `null`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorOutput {
    pub fuel_cost: f64,
    pub total_expenses: f64,
    pub gross_total: f64,
    pub net_profit: f64,
    pub actual_cost_per_mile: Option<f64>,
    pub break_even_cost_per_mile: Option<f64>,
    pub profit_margin_percent: Option<f64>,
}

impl CalculatorOutput {
    /// Multiply the additive totals by `k`; per-mile figures and margin are
    /// intensive and carry over unchanged.
    pub fn scaled(&self, k: f64) -> CalculatorOutput {
        CalculatorOutput {
            fuel_cost: self.fuel_cost * k,
            total_expenses: self.total_expenses * k,
            gross_total: self.gross_total * k,
            net_profit: self.net_profit * k,
            ..*self
        }
    }
}
