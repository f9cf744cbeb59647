use std::time::{Duration, Instant};

use rand::{SeedableRng, rngs::SmallRng};
use tracing::debug;

use crate::{
    problem::routing_model::RoutingModel,
    solver::{
        engine::{EngineRun, RoutingEngine},
        insertion, local_search,
        search_params::SearchParams,
        step_indexer::RawAssignment,
        working_routes::WorkingRoutes,
    },
};

/// The bundled engine: parallel cheapest insertion to build a complete
/// assignment, then 2-opt and relocate until the time budget runs out.
/// Infeasibility is decided by construction alone; local search only ever
/// improves an already complete solution.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionEngine;

impl RoutingEngine for InsertionEngine {
    fn solve(&self, model: &RoutingModel, params: &SearchParams) -> EngineRun {
        let started = Instant::now();
        let budget = Duration::try_from(params.time_budget).unwrap_or(Duration::ZERO);
        let deadline = started + budget;

        let mut rng = SmallRng::seed_from_u64(params.seed);
        let mut routes = WorkingRoutes::empty(model);

        if !insertion::construct(model, &mut routes, params, &mut rng) {
            return EngineRun::Infeasible;
        }

        let constructed = routes.total_cost(model);
        local_search::improve(model, &mut routes, deadline);
        let improved = routes.total_cost(model);

        debug!(
            constructed,
            improved,
            elapsed = ?started.elapsed(),
            "insertion engine finished"
        );

        EngineRun::Feasible(RawAssignment::from_routes(model, &routes.into_routes()))
    }
}
