use crate::problem::routing_model::RoutingModel;

/// Mutable route state the engine works on: one interior stop sequence per
/// vehicle with its running load. Arc costs are evaluated on demand against
/// the model; loads are kept incrementally.
pub(crate) struct WorkingRoutes {
    routes: Vec<Vec<usize>>,
    loads: Vec<i64>,
}

impl WorkingRoutes {
    pub fn empty(model: &RoutingModel) -> Self {
        WorkingRoutes {
            routes: vec![Vec::new(); model.num_vehicles()],
            loads: vec![0; model.num_vehicles()],
        }
    }

    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    pub fn stops(&self, route: usize) -> &[usize] {
        &self.routes[route]
    }

    pub fn load(&self, route: usize) -> i64 {
        self.loads[route]
    }

    pub fn fits(&self, model: &RoutingModel, route: usize, node: usize) -> bool {
        self.loads[route] + model.demand(node) <= model.capacity(route)
    }

    /// Node visited before the given position, depot when at the front.
    fn node_before(&self, model: &RoutingModel, route: usize, position: usize) -> usize {
        if position == 0 {
            model.depot()
        } else {
            self.routes[route][position - 1]
        }
    }

    /// Node visited at the given position, depot when past the back.
    fn node_at_or_depot(&self, model: &RoutingModel, route: usize, position: usize) -> usize {
        self.routes[route]
            .get(position)
            .copied()
            .unwrap_or(model.depot())
    }

    /// Arc cost delta of inserting `node` at `position`. Capacity is checked
    /// separately via [`WorkingRoutes::fits`].
    pub fn insertion_cost(
        &self,
        model: &RoutingModel,
        route: usize,
        position: usize,
        node: usize,
    ) -> i64 {
        let prev = self.node_before(model, route, position);
        let next = self.node_at_or_depot(model, route, position);

        model.cost(prev, node) + model.cost(node, next) - model.cost(prev, next)
    }

    pub fn insert(&mut self, model: &RoutingModel, route: usize, position: usize, node: usize) {
        self.routes[route].insert(position, node);
        self.loads[route] += model.demand(node);
    }

    /// Arc cost delta of removing the stop at `position` (always ≤ 0 for
    /// metric matrices, but not assumed).
    pub fn removal_cost(&self, model: &RoutingModel, route: usize, position: usize) -> i64 {
        let node = self.routes[route][position];
        let prev = self.node_before(model, route, position);
        let next = self.node_at_or_depot(model, route, position + 1);

        model.cost(prev, next) - model.cost(prev, node) - model.cost(node, next)
    }

    pub fn remove(&mut self, model: &RoutingModel, route: usize, position: usize) -> usize {
        let node = self.routes[route].remove(position);
        self.loads[route] -= model.demand(node);
        node
    }

    pub fn route_cost(&self, model: &RoutingModel, route: usize) -> i64 {
        let mut cost = 0;
        let mut prev = model.depot();

        for &node in &self.routes[route] {
            cost += model.cost(prev, node);
            prev = node;
        }

        cost + model.cost(prev, model.depot())
    }

    pub fn total_cost(&self, model: &RoutingModel) -> i64 {
        (0..self.routes.len())
            .map(|route| self.route_cost(model, route))
            .sum()
    }

    /// Reverses the stop segment `[from, to]` in place (2-opt application).
    pub fn reverse_segment(&mut self, route: usize, from: usize, to: usize) {
        self.routes[route][from..=to].reverse();
    }

    pub fn into_routes(self) -> Vec<Vec<usize>> {
        self.routes
    }
}
