use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::solution::Solution;

/// Daily operating rates used to price a solution. Loaded from config or
/// left at the defaults; the solver itself never looks at money.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CostRates {
    /// Flat cost of fielding one vehicle for the day, in currency units.
    pub fixed_cost_per_vehicle_day: f64,
    pub cost_per_km: f64,
    pub driver_hourly_rate: f64,
    /// Paid shift length per driver, in hours.
    pub shift_hours: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        CostRates {
            fixed_cost_per_vehicle_day: 120.0,
            cost_per_km: 0.35,
            driver_hourly_rate: 18.5,
            shift_hours: 8.0,
        }
    }
}

/// Priced view of a solution. All amounts are rounded to cents.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CostBreakdown {
    pub fixed_cost: f64,
    pub variable_cost: f64,
    pub driver_cost: f64,
    /// Serialized as `total_costs`; existing consumers of solution records
    /// key on the plural name.
    #[serde(rename = "total_costs")]
    pub total_cost: f64,
    /// Zero when the solution carries no load at all.
    pub cost_per_package: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Prices a solution: fixed and driver costs scale with vehicles actually
/// used, variable cost with distance driven. Idle vehicles cost nothing.
pub fn calculate_costs(solution: &Solution, rates: &CostRates) -> CostBreakdown {
    let used = solution.vehicles_used as f64;

    let fixed_cost = used * rates.fixed_cost_per_vehicle_day;
    let variable_cost = solution.total_distance_km * rates.cost_per_km;
    let driver_cost = used * rates.shift_hours * rates.driver_hourly_rate;
    let total_cost = fixed_cost + variable_cost + driver_cost;

    let cost_per_package = if solution.total_load > 0 {
        total_cost / solution.total_load as f64
    } else {
        0.0
    };

    CostBreakdown {
        fixed_cost: round2(fixed_cost),
        variable_cost: round2(variable_cost),
        driver_cost: round2(driver_cost),
        total_cost: round2(total_cost),
        cost_per_package: round2(cost_per_package),
    }
}
