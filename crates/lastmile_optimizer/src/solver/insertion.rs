use rand::{Rng, rngs::SmallRng};
use rayon::prelude::*;
use tracing::debug;

use crate::{
    problem::routing_model::RoutingModel,
    solver::{search_params::SearchParams, working_routes::WorkingRoutes},
};

/// Best feasible placement found for one node in the current partial
/// solution.
#[derive(Clone, Copy)]
struct Candidate {
    node: usize,
    route: usize,
    position: usize,
    cost: i64,
}

fn best_placement(model: &RoutingModel, routes: &WorkingRoutes, node: usize) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for route in 0..routes.num_routes() {
        if !routes.fits(model, route, node) {
            continue;
        }

        for position in 0..=routes.stops(route).len() {
            let cost = routes.insertion_cost(model, route, position, node);

            if best.is_none_or(|b| cost < b.cost) {
                best = Some(Candidate {
                    node,
                    route,
                    position,
                    cost,
                });
            }
        }
    }

    best
}

/// Cheapest-insertion construction: repeatedly evaluates the best placement
/// of every unassigned node in parallel, then commits the globally cheapest
/// one. Candidate costs are perturbed with small random noise so reruns with
/// different seeds explore different tie-breaks.
///
/// Returns `false` as soon as some node has no capacity-feasible placement
/// left; the routes are then partial and must be discarded.
pub(crate) fn construct(
    model: &RoutingModel,
    routes: &mut WorkingRoutes,
    params: &SearchParams,
    rng: &mut SmallRng,
) -> bool {
    let mut unassigned: Vec<usize> = (0..model.num_nodes())
        .filter(|&node| node != model.depot())
        .collect();

    // Bulky packages first, so cost ties resolve toward placing them early.
    unassigned.sort_unstable_by_key(|&node| std::cmp::Reverse(model.demand(node)));

    let noise_span = params.noise_level * model.max_cost() as f64;
    // The params fields are public; an out-of-range probability would panic
    // inside the RNG.
    let noise_probability = params.noise_probability.clamp(0.0, 1.0);

    while !unassigned.is_empty() {
        let candidates: Vec<Option<Candidate>> = unassigned
            .par_iter()
            .map(|&node| best_placement(model, routes, node))
            .collect();

        let mut chosen: Option<Candidate> = None;
        let mut chosen_key = i64::MAX;

        for candidate in candidates {
            let Some(candidate) = candidate else {
                debug!(unassigned = unassigned.len(), "construction ran out of capacity");
                return false;
            };

            let noise = if rng.random_bool(noise_probability) {
                (noise_span * rng.random_range(0.0..=1.0)) as i64
            } else {
                0
            };

            let key = candidate.cost + noise;
            if key < chosen_key {
                chosen_key = key;
                chosen = Some(candidate);
            }
        }

        // unassigned is non-empty, so a candidate was chosen or we returned.
        let chosen = chosen.unwrap();
        routes.insert(model, chosen.route, chosen.position, chosen.node);
        unassigned.retain(|&node| node != chosen.node);
    }

    true
}
