use tracing::{info, warn};

use crate::{
    error::SolveError,
    problem::{fleet::FleetConfig, routing_model::RoutingModel, travel_matrices::TravelMatrices},
    solution::{Solution, extract_solution},
    solver::{
        engine::{EngineRun, RoutingEngine},
        search_params::SearchParams,
    },
};

/// How far the fleet may grow past its configured size before giving up.
/// Each delta is tried in order; the first feasible attempt wins, so earlier
/// deltas should be smaller.
#[derive(Clone, Debug)]
pub struct EscalationPolicy {
    pub deltas: Vec<usize>,
    /// Hard ceiling on extra vehicles. Deltas beyond it are skipped, not
    /// clamped, so the same fleet size is never attempted twice.
    pub max_extra: Option<usize>,
}

impl Default for EscalationPolicy {
    fn default() -> Self {
        EscalationPolicy {
            deltas: vec![0, 2, 5, 10],
            max_extra: None,
        }
    }
}

impl EscalationPolicy {
    pub fn fleet_sizes(&self, base: usize) -> impl Iterator<Item = usize> + '_ {
        self.deltas
            .iter()
            .filter(|&&delta| self.max_extra.is_none_or(|max| delta <= max))
            .map(move |&delta| base + delta)
    }
}

/// Runs a routing engine with a progressively larger fleet until it finds a
/// feasible solution or the escalation policy is exhausted. Every attempt
/// gets the full time budget from `params`.
pub struct FeasibilitySearch<E> {
    engine: E,
    policy: EscalationPolicy,
}

impl<E: RoutingEngine> FeasibilitySearch<E> {
    pub fn new(engine: E) -> Self {
        FeasibilitySearch {
            engine,
            policy: EscalationPolicy::default(),
        }
    }

    pub fn with_policy(engine: E, policy: EscalationPolicy) -> Self {
        FeasibilitySearch { engine, policy }
    }

    pub fn solve(
        &self,
        matrices: &TravelMatrices,
        demands: &[u32],
        fleet: FleetConfig,
        params: &SearchParams,
    ) -> Result<Solution, SolveError> {
        let mut attempts = 0;
        let mut max_vehicles = fleet.vehicles;

        for vehicles in self.policy.fleet_sizes(fleet.vehicles) {
            attempts += 1;
            max_vehicles = vehicles;

            info!(
                attempt = attempts,
                vehicles,
                extra = vehicles - fleet.vehicles,
                "solving with escalated fleet"
            );

            let model =
                RoutingModel::build(matrices, demands, fleet.with_vehicles(vehicles))?;

            match self.engine.solve(&model, params) {
                EngineRun::Feasible(assignment) => {
                    let solution = extract_solution(&model, &assignment);
                    info!(
                        attempt = attempts,
                        vehicles_used = solution.vehicles_used,
                        total_distance_km = solution.total_distance_km,
                        "found feasible solution"
                    );
                    return Ok(solution);
                }
                EngineRun::Infeasible => {
                    warn!(attempt = attempts, vehicles, "attempt infeasible");
                }
            }
        }

        Err(SolveError::Exhausted {
            attempts,
            max_vehicles,
        })
    }
}
