use crate::problem::travel_matrices::TravelMatrices;

/// Travel speed assumed when deriving a time matrix for tests, km/h.
const TEST_SPEED_KMH: f64 = 40.0;

/// Nodes placed on a line at the given kilometer marks, node 0 first.
/// Distance between two nodes is the absolute difference of their marks.
pub fn line_matrices(positions_km: &[f64]) -> TravelMatrices {
    let distances = positions_km
        .iter()
        .map(|&from| {
            positions_km
                .iter()
                .map(|&to| (to - from).abs())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    matrices_from_distances(distances)
}

/// Builds matrices from explicit distance rows, deriving the time matrix at
/// a constant speed.
pub fn matrices_from_distances(distances: Vec<Vec<f64>>) -> TravelMatrices {
    let times = distances
        .iter()
        .map(|row| {
            row.iter()
                .map(|&km| km / TEST_SPEED_KMH * 60.0)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    TravelMatrices::new(distances, times).unwrap()
}

/// Demand vector with zero at the depot and the given value everywhere else.
pub fn uniform_demands(num_nodes: usize, demand: u32) -> Vec<u32> {
    let mut demands = vec![demand; num_nodes];
    demands[0] = 0;
    demands
}
