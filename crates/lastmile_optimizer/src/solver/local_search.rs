use std::time::Instant;

use tracing::debug;

use crate::{problem::routing_model::RoutingModel, solver::working_routes::WorkingRoutes};

/// Cost delta of reversing the stop segment `[from, to]` of a route. Segment
/// arcs are recomputed in both directions rather than assumed symmetric, so
/// this stays correct for asymmetric matrices.
fn two_opt_delta(
    model: &RoutingModel,
    routes: &WorkingRoutes,
    route: usize,
    from: usize,
    to: usize,
) -> i64 {
    let stops = routes.stops(route);
    let prev = if from == 0 { model.depot() } else { stops[from - 1] };
    let next = stops.get(to + 1).copied().unwrap_or(model.depot());

    let mut removed = model.cost(prev, stops[from]) + model.cost(stops[to], next);
    let mut added = model.cost(prev, stops[to]) + model.cost(stops[from], next);

    for k in from..to {
        removed += model.cost(stops[k], stops[k + 1]);
        added += model.cost(stops[k + 1], stops[k]);
    }

    added - removed
}

/// Applies the first improving 2-opt move found on the route, if any.
fn two_opt_pass(model: &RoutingModel, routes: &mut WorkingRoutes, route: usize) -> bool {
    let len = routes.stops(route).len();

    for from in 0..len {
        for to in (from + 1)..len {
            if two_opt_delta(model, routes, route, from, to) < 0 {
                routes.reverse_segment(route, from, to);
                return true;
            }
        }
    }

    false
}

/// Applies the first improving inter-route relocate found, if any. A move
/// takes one stop out of its route and reinserts it at the cheapest feasible
/// position of another route.
fn relocate_pass(model: &RoutingModel, routes: &mut WorkingRoutes) -> bool {
    for from_route in 0..routes.num_routes() {
        for position in 0..routes.stops(from_route).len() {
            let node = routes.stops(from_route)[position];
            let removal = routes.removal_cost(model, from_route, position);

            for to_route in 0..routes.num_routes() {
                if to_route == from_route || !routes.fits(model, to_route, node) {
                    continue;
                }

                for to_position in 0..=routes.stops(to_route).len() {
                    let insertion = routes.insertion_cost(model, to_route, to_position, node);

                    if removal + insertion < 0 {
                        routes.remove(model, from_route, position);
                        routes.insert(model, to_route, to_position, node);
                        return true;
                    }
                }
            }
        }
    }

    false
}

/// Improves a complete solution in place until no improving move remains or
/// the deadline passes. Alternates 2-opt sweeps over every route with
/// inter-route relocations; each accepted move strictly lowers the total arc
/// cost, so the loop terminates on integer costs.
pub(crate) fn improve(model: &RoutingModel, routes: &mut WorkingRoutes, deadline: Instant) {
    let mut moves = 0_u64;

    loop {
        if Instant::now() >= deadline {
            debug!(moves, "local search stopped at deadline");
            return;
        }

        let mut improved = false;

        for route in 0..routes.num_routes() {
            while two_opt_pass(model, routes, route) {
                improved = true;
                moves += 1;

                if Instant::now() >= deadline {
                    debug!(moves, "local search stopped at deadline");
                    return;
                }
            }
        }

        if relocate_pass(model, routes) {
            improved = true;
            moves += 1;
        }

        if !improved {
            debug!(moves, "local search reached a local optimum");
            return;
        }
    }
}
