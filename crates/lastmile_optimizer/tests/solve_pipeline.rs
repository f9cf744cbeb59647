use jiff::SignedDuration;
use lastmile_optimizer::{
    costs::{CostRates, calculate_costs},
    error::SolveError,
    json::JsonSolution,
    problem::{fleet::FleetConfig, travel_matrices::TravelMatrices},
    search::{EscalationPolicy, FeasibilitySearch},
    solver::{insertion_engine::InsertionEngine, search_params::SearchParams},
};

/// Nodes on a line at the given kilometer marks; travel time at 40 km/h.
fn line_matrices(positions_km: &[f64]) -> TravelMatrices {
    let distances: Vec<Vec<f64>> = positions_km
        .iter()
        .map(|&from| positions_km.iter().map(|&to| (to - from).abs()).collect())
        .collect();
    let times: Vec<Vec<f64>> = distances
        .iter()
        .map(|row| row.iter().map(|&km| km / 40.0 * 60.0).collect())
        .collect();

    TravelMatrices::new(distances, times).unwrap()
}

fn params() -> SearchParams {
    SearchParams::with_time_budget(SignedDuration::from_secs(5))
}

#[test]
fn solves_a_small_feasible_instance() {
    let matrices = line_matrices(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    let demands = [0, 3, 4, 2, 3];

    let search = FeasibilitySearch::new(InsertionEngine);
    let solution = search
        .solve(&matrices, &demands, FleetConfig::new(2, 10), &params())
        .unwrap();

    assert_eq!(solution.num_stops(), 4);
    assert_eq!(solution.total_load, 12);
    assert_eq!(solution.vehicles_available, 2);
    assert!(solution.vehicles_used <= 2);

    for route in &solution.routes {
        assert!(route.load <= 10);
        assert!(route.distance_km > 0.0);
    }
}

#[test]
fn escalates_fleet_until_feasible() {
    // Four full truckloads but only two trucks configured; the first
    // escalation step adds the two missing ones.
    let matrices = line_matrices(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    let demands = [0, 5, 5, 5, 5];

    let search = FeasibilitySearch::new(InsertionEngine);
    let solution = search
        .solve(&matrices, &demands, FleetConfig::new(2, 5), &params())
        .unwrap();

    assert_eq!(solution.vehicles_available, 4);
    assert_eq!(solution.vehicles_used, 4);
    assert_eq!(solution.total_load, 20);
}

#[test]
fn reports_exhaustion_when_escalation_cannot_help() {
    // Twelve full truckloads; one configured vehicle plus at most ten
    // extra still falls short.
    let positions: Vec<f64> = (0..13).map(|i| i as f64).collect();
    let matrices = line_matrices(&positions);
    let mut demands = vec![5_u32; 13];
    demands[0] = 0;

    let search = FeasibilitySearch::new(InsertionEngine);
    let err = search
        .solve(&matrices, &demands, FleetConfig::new(1, 5), &params())
        .unwrap_err();

    match err {
        SolveError::Exhausted {
            attempts,
            max_vehicles,
        } => {
            assert_eq!(attempts, 4);
            assert_eq!(max_vehicles, 11);
        }
        other => panic!("expected exhaustion, got {other}"),
    }
}

#[test]
fn escalation_ceiling_limits_attempts() {
    let matrices = line_matrices(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    let demands = [0, 5, 5, 5, 5];

    let policy = EscalationPolicy {
        deltas: vec![0, 2, 5, 10],
        max_extra: Some(1),
    };
    let search = FeasibilitySearch::with_policy(InsertionEngine, policy);
    let err = search
        .solve(&matrices, &demands, FleetConfig::new(2, 5), &params())
        .unwrap_err();

    assert!(matches!(
        err,
        SolveError::Exhausted {
            attempts: 1,
            max_vehicles: 2
        }
    ));
}

#[test]
fn larger_fleets_preserve_feasibility() {
    // Feasible at the two-vehicle minimum; adding vehicles must never turn
    // the same instance infeasible. Escalation is pinned off so each fleet
    // size stands on its own.
    let matrices = line_matrices(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    let demands = [0, 3, 4, 2, 3];

    for vehicles in [2, 4, 8, 12] {
        let policy = EscalationPolicy {
            deltas: vec![0],
            max_extra: None,
        };
        let search = FeasibilitySearch::with_policy(InsertionEngine, policy);
        let solution = search
            .solve(&matrices, &demands, FleetConfig::new(vehicles, 10), &params())
            .unwrap();

        assert_eq!(solution.total_load, 12);
        assert_eq!(solution.num_stops(), 4);
        assert_eq!(solution.vehicles_available, vehicles);
    }
}

#[test]
fn identical_inputs_yield_identical_solutions() {
    let matrices = line_matrices(&[0.0, 2.3, 5.1, 1.7, 8.4, 3.3]);
    let demands = [0, 2, 3, 2, 4, 3];
    let search = FeasibilitySearch::new(InsertionEngine);

    let first = search
        .solve(&matrices, &demands, FleetConfig::new(2, 8), &params())
        .unwrap();
    let second = search
        .solve(&matrices, &demands, FleetConfig::new(2, 8), &params())
        .unwrap();

    assert_eq!(first.total_distance_km, second.total_distance_km);
    assert_eq!(first.vehicles_used, second.vehicles_used);

    let first_stops: Vec<_> = first.routes.iter().map(|r| r.stops.clone()).collect();
    let second_stops: Vec<_> = second.routes.iter().map(|r| r.stops.clone()).collect();
    assert_eq!(first_stops, second_stops);
}

#[test]
fn priced_solution_serializes_with_costs() {
    let matrices = line_matrices(&[0.0, 1.0, 2.0]);
    let demands = [0, 4, 4];

    let search = FeasibilitySearch::new(InsertionEngine);
    let solution = search
        .solve(&matrices, &demands, FleetConfig::new(1, 10), &params())
        .unwrap();

    let costs = calculate_costs(&solution, &CostRates::default());
    assert!(costs.total_cost > 0.0);
    assert!(costs.cost_per_package > 0.0);

    let json = JsonSolution::from_solution(&solution, Some("pipeline".into()), Some(costs));
    let text = serde_json::to_string_pretty(&json).unwrap();
    let back: JsonSolution = serde_json::from_str(&text).unwrap();

    assert_eq!(back.total_load, 8);
    assert_eq!(back.routes[0].route.first(), Some(&0));
    assert_eq!(back.routes[0].route.last(), Some(&0));
}
