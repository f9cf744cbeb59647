use fxhash::FxHashSet;

use crate::{
    problem::routing_model::RoutingModel,
    solution::{Route, Solution},
    solver::step_indexer::{RawAssignment, StepIndexer},
};

/// Converts a raw engine assignment into problem units by walking each
/// vehicle from its start step to its end step.
///
/// The walk doubles as verification: every non-depot node must be visited
/// exactly once, no route may exceed its vehicle's capacity, and the summed
/// arc costs must equal the engine's reported objective. A violation means
/// the engine is broken, so it panics rather than returning a bad solution.
pub fn extract_solution(model: &RoutingModel, assignment: &RawAssignment) -> Solution {
    let indexer = StepIndexer::new(model);

    let mut routes = Vec::new();
    let mut visited = FxHashSet::default();
    let mut total_cost = 0_i64;
    let mut total_load = 0_i64;

    for vehicle in 0..model.num_vehicles() {
        let mut stops = Vec::new();
        let mut cost = 0_i64;
        let mut load = 0_i64;

        let mut step = indexer.start(vehicle);
        while !indexer.is_end(step) {
            let next = assignment.next_step(step);
            cost += model.cost(indexer.node(step), indexer.node(next));

            if !indexer.is_end(next) {
                let node = indexer.node(next);
                assert!(visited.insert(node), "node {node} visited twice");
                stops.push(node);
                load += model.demand(node);
            }

            step = next;
        }

        assert!(load <= model.capacity(vehicle), "vehicle {vehicle} overloaded");

        total_cost += cost;
        total_load += load;

        if !stops.is_empty() {
            routes.push(Route {
                vehicle,
                stops,
                distance_km: RoutingModel::cost_to_km(cost),
                load,
            });
        }
    }

    assert_eq!(visited.len(), model.num_nodes() - 1, "unvisited nodes remain");
    assert_eq!(total_cost, assignment.objective(), "objective mismatch");
    assert_eq!(total_load, model.total_demand());

    Solution {
        vehicles_used: routes.len(),
        vehicles_available: model.num_vehicles(),
        routes,
        total_distance_km: RoutingModel::cost_to_km(total_cost),
        total_load,
    }
}
