use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    costs::CostBreakdown,
    solution::{Route, Solution},
};

/// Wire form of a solved instance, written next to the scenario it came
/// from. Routes here include the depot at both ends so the file reads as the
/// literal drive order.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Solution")]
pub struct JsonSolution {
    pub scenario: Option<String>,
    pub routes: Vec<JsonRoute>,
    pub total_distance_km: f64,
    pub total_load: i64,
    pub vehicles_used: usize,
    pub vehicles_available: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs: Option<CostBreakdown>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Route")]
pub struct JsonRoute {
    pub vehicle_id: usize,
    /// Node indices in drive order, starting and ending at the depot.
    pub route: Vec<usize>,
    pub distance_km: f64,
    pub load: i64,
    pub num_stops: usize,
}

impl JsonSolution {
    pub fn from_solution(
        solution: &Solution,
        scenario: Option<String>,
        costs: Option<CostBreakdown>,
    ) -> Self {
        JsonSolution {
            scenario,
            routes: solution.routes.iter().map(JsonRoute::from_route).collect(),
            total_distance_km: solution.total_distance_km,
            total_load: solution.total_load,
            vehicles_used: solution.vehicles_used,
            vehicles_available: solution.vehicles_available,
            costs,
        }
    }
}

impl JsonRoute {
    fn from_route(route: &Route) -> Self {
        let mut stops = Vec::with_capacity(route.stops.len() + 2);
        stops.push(0);
        stops.extend_from_slice(&route.stops);
        stops.push(0);

        JsonRoute {
            vehicle_id: route.vehicle,
            route: stops,
            distance_km: route.distance_km,
            load: route.load,
            num_stops: route.stops.len(),
        }
    }
}
