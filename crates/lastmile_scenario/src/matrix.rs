use geo::{Distance, Haversine, Point};
use tracing::debug;

use crate::scenario::Scenario;

/// Assumed average urban driving speed used to derive travel times.
pub const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Dense great-circle travel matrices over a scenario's nodes, depot at
/// index 0. Distances in kilometers, times in minutes.
pub struct DistanceTimeMatrices {
    pub distances: Vec<Vec<f64>>,
    pub times: Vec<Vec<f64>>,
}

pub fn build_matrices(scenario: &Scenario, speed_kmh: f64) -> DistanceTimeMatrices {
    let points: Vec<Point> = std::iter::once(scenario.depot)
        .chain(scenario.locations.iter().map(|location| location.coordinates))
        .map(|[lon, lat]| Point::new(lon, lat))
        .collect();

    let n = points.len();
    let haversine = Haversine;

    let mut distances = vec![vec![0.0; n]; n];
    let mut times = vec![vec![0.0; n]; n];

    for from in 0..n {
        for to in 0..n {
            if from == to {
                continue;
            }

            let km = haversine.distance(points[from], points[to]) / 1000.0;
            distances[from][to] = km;
            times[from][to] = km / speed_kmh * 60.0;
        }
    }

    debug!(nodes = n, speed_kmh, "built travel matrices");

    DistanceTimeMatrices { distances, times }
}
