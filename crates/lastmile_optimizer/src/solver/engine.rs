use crate::{
    problem::routing_model::RoutingModel,
    solver::{search_params::SearchParams, step_indexer::RawAssignment},
};

/// Outcome of a single time-boxed engine invocation. An engine either covers
/// every node or reports infeasibility; it never returns a partial
/// assignment.
pub enum EngineRun {
    Feasible(RawAssignment),
    Infeasible,
}

impl EngineRun {
    pub fn is_feasible(&self) -> bool {
        matches!(self, EngineRun::Feasible(_))
    }
}

/// The constraint-solver seam: any conforming engine can be substituted
/// without touching the escalation loop or the extractor. Implementations
/// must respect `params.time_budget` per invocation.
pub trait RoutingEngine {
    fn solve(&self, model: &RoutingModel, params: &SearchParams) -> EngineRun;
}
