use serde::Serialize;

/// One vehicle's tour. `stops` holds the problem nodes in visit order,
/// without the depot endpoints; distance covers the full depot round trip.
#[derive(Clone, Debug, Serialize)]
pub struct Route {
    pub vehicle: usize,
    pub stops: Vec<usize>,
    pub distance_km: f64,
    pub load: i64,
}

/// A verified solution in problem units. Vehicles that never left the depot
/// are omitted from `routes` but still counted in `vehicles_available`.
#[derive(Clone, Debug, Serialize)]
pub struct Solution {
    pub routes: Vec<Route>,
    pub total_distance_km: f64,
    pub total_load: i64,
    pub vehicles_used: usize,
    pub vehicles_available: usize,
}

impl Solution {
    pub fn num_stops(&self) -> usize {
        self.routes.iter().map(|route| route.stops.len()).sum()
    }
}
