use crate::{
    error::ModelError,
    problem::{fleet::FleetConfig, travel_matrices::TravelMatrices},
};

/// Factor converting kilometers to integer cost units (meter resolution).
/// The solver works on integer arc costs only; real distances are recovered
/// by dividing by this constant.
pub const DISTANCE_SCALE: i64 = 1000;

/// Integer routing model handed to the constraint solver: scaled arc costs,
/// per-node demands, a uniform finite fleet and the depot at node 0.
///
/// Built fresh for every solve attempt; never mutated afterwards.
pub struct RoutingModel {
    cost_matrix: Vec<i64>,
    demands: Vec<i64>,
    capacities: Vec<i64>,
    num_nodes: usize,
    num_vehicles: usize,
    depot: usize,
}

impl RoutingModel {
    /// Validates inputs and scales the distance matrix into integer cost
    /// units. Any precondition violation is a configuration error reported
    /// here, before the solver ever runs.
    pub fn build(
        matrices: &TravelMatrices,
        demands: &[u32],
        fleet: FleetConfig,
    ) -> Result<Self, ModelError> {
        let num_nodes = matrices.num_locations();

        if demands.len() != num_nodes {
            return Err(ModelError::DimensionMismatch {
                demands: demands.len(),
                locations: num_nodes,
            });
        }

        if fleet.vehicles == 0 {
            return Err(ModelError::EmptyFleet);
        }

        if fleet.capacity == 0 {
            return Err(ModelError::ZeroCapacity);
        }

        if let Some(&depot_demand) = demands.first()
            && depot_demand != 0
        {
            return Err(ModelError::DepotDemand(depot_demand));
        }

        // A node heavier than one vehicle can never be served, no matter how
        // many vehicles the escalation loop adds.
        for (node, &demand) in demands.iter().enumerate() {
            if demand > fleet.capacity {
                return Err(ModelError::DemandExceedsCapacity {
                    node,
                    demand,
                    capacity: fleet.capacity,
                });
            }
        }

        let mut cost_matrix = vec![0_i64; num_nodes * num_nodes];
        for from in 0..num_nodes {
            for to in 0..num_nodes {
                if from == to {
                    continue;
                }

                let km = matrices.distance_km(from, to);
                let cost = (km * DISTANCE_SCALE as f64).round() as i64;

                // Distinct locations collapsing to zero cost would silently
                // under-report distance; that is a SCALE misconfiguration.
                if cost == 0 && km > 0.0 {
                    return Err(ModelError::ScaleUnderflow {
                        from,
                        to,
                        distance_km: km,
                        scale: DISTANCE_SCALE,
                    });
                }

                cost_matrix[from * num_nodes + to] = cost;
            }
        }

        Ok(RoutingModel {
            cost_matrix,
            demands: demands.iter().map(|&d| d as i64).collect(),
            capacities: vec![fleet.capacity as i64; fleet.vehicles],
            num_nodes,
            num_vehicles: fleet.vehicles,
            depot: 0,
        })
    }

    #[inline(always)]
    pub fn cost(&self, from: usize, to: usize) -> i64 {
        self.cost_matrix[from * self.num_nodes + to]
    }

    #[inline(always)]
    pub fn demand(&self, node: usize) -> i64 {
        self.demands[node]
    }

    pub fn demands(&self) -> &[i64] {
        &self.demands
    }

    #[inline(always)]
    pub fn capacity(&self, vehicle: usize) -> i64 {
        self.capacities[vehicle]
    }

    pub fn capacities(&self) -> &[i64] {
        &self.capacities
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    pub fn depot(&self) -> usize {
        self.depot
    }

    pub fn total_demand(&self) -> i64 {
        self.demands.iter().sum()
    }

    pub fn max_cost(&self) -> i64 {
        self.cost_matrix.iter().copied().max().unwrap_or(0)
    }

    /// Recovers kilometers from integer cost units.
    pub fn cost_to_km(cost: i64) -> f64 {
        cost as f64 / DISTANCE_SCALE as f64
    }
}
