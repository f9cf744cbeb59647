use crate::problem::routing_model::RoutingModel;

/// Maps between problem nodes and the engine's internal step space.
///
/// Steps `0..num_nodes` are the problem nodes themselves; after those come a
/// start/end step pair per vehicle, both standing for the depot. This gives
/// every vehicle its own route endpoints even though they share one physical
/// depot, so a raw assignment can be stored as a single linked `next` array.
#[derive(Clone, Copy, Debug)]
pub struct StepIndexer {
    num_nodes: usize,
    num_vehicles: usize,
    depot: usize,
}

impl StepIndexer {
    pub fn new(model: &RoutingModel) -> Self {
        StepIndexer {
            num_nodes: model.num_nodes(),
            num_vehicles: model.num_vehicles(),
            depot: model.depot(),
        }
    }

    /// Total number of internal steps.
    pub fn len(&self) -> usize {
        self.num_nodes + 2 * self.num_vehicles
    }

    pub fn start(&self, vehicle: usize) -> usize {
        debug_assert!(vehicle < self.num_vehicles);
        self.num_nodes + 2 * vehicle
    }

    pub fn end(&self, vehicle: usize) -> usize {
        self.start(vehicle) + 1
    }

    pub fn is_end(&self, step: usize) -> bool {
        step >= self.num_nodes && (step - self.num_nodes) % 2 == 1
    }

    /// Problem node a step stands for. Start and end steps are the depot.
    pub fn node(&self, step: usize) -> usize {
        if step < self.num_nodes { step } else { self.depot }
    }
}

/// A feasible assignment as produced by an engine: for every step, the step
/// the vehicle travels to next, plus the integer objective (total arc cost).
/// The extractor walks each vehicle from its start step to its end step.
pub struct RawAssignment {
    next: Vec<usize>,
    objective: i64,
}

impl RawAssignment {
    /// Encodes per-vehicle interior stop sequences into the linked form.
    /// Every non-depot node must appear exactly once across `routes`.
    pub fn from_routes(model: &RoutingModel, routes: &[Vec<usize>]) -> Self {
        let indexer = StepIndexer::new(model);
        debug_assert_eq!(routes.len(), model.num_vehicles());

        let mut next = vec![usize::MAX; indexer.len()];
        let mut objective = 0_i64;

        for (vehicle, stops) in routes.iter().enumerate() {
            let mut step = indexer.start(vehicle);

            for &node in stops {
                debug_assert!(node != model.depot() && node < model.num_nodes());
                next[step] = node;
                objective += model.cost(indexer.node(step), node);
                step = node;
            }

            let end = indexer.end(vehicle);
            next[step] = end;
            objective += model.cost(indexer.node(step), indexer.node(end));
        }

        RawAssignment { next, objective }
    }

    #[inline(always)]
    pub fn next_step(&self, step: usize) -> usize {
        self.next[step]
    }

    pub fn objective(&self) -> i64 {
        self.objective
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{problem::fleet::FleetConfig, problem::routing_model::RoutingModel, test_utils};

    fn model() -> RoutingModel {
        let matrices = test_utils::line_matrices(&[0.0, 1.0, 2.0, 3.0]);
        RoutingModel::build(&matrices, &[0, 1, 1, 1], FleetConfig::new(2, 10)).unwrap()
    }

    #[test]
    fn test_step_space_layout() {
        let model = model();
        let indexer = StepIndexer::new(&model);

        assert_eq!(indexer.len(), 4 + 4);
        assert_eq!(indexer.start(0), 4);
        assert_eq!(indexer.end(0), 5);
        assert_eq!(indexer.start(1), 6);
        assert!(indexer.is_end(5));
        assert!(!indexer.is_end(4));
        assert!(!indexer.is_end(2));
        assert_eq!(indexer.node(2), 2);
        assert_eq!(indexer.node(6), 0);
    }

    #[test]
    fn test_encode_and_walk() {
        let model = model();
        let indexer = StepIndexer::new(&model);
        let assignment = RawAssignment::from_routes(&model, &[vec![1, 3], vec![2]]);

        // depot -> 1 -> 3 -> depot plus depot -> 2 -> depot, in cost units.
        assert_eq!(assignment.objective(), (1000 + 2000 + 3000) + (2000 + 2000));

        let mut walked = Vec::new();
        let mut step = indexer.start(0);
        while !indexer.is_end(step) {
            walked.push(indexer.node(step));
            step = assignment.next_step(step);
        }
        walked.push(indexer.node(step));

        assert_eq!(walked, vec![0, 1, 3, 0]);
    }

    #[test]
    fn test_empty_route_links_start_to_end() {
        let model = model();
        let indexer = StepIndexer::new(&model);
        let assignment = RawAssignment::from_routes(&model, &[vec![1, 2, 3], vec![]]);

        assert_eq!(assignment.next_step(indexer.start(1)), indexer.end(1));
    }
}
