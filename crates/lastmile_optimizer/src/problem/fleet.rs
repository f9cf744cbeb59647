/// Fleet configuration for a single solve attempt. The escalation loop
/// recreates this with a larger vehicle count for each retry; nothing else
/// carries over between attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetConfig {
    pub vehicles: usize,
    /// Uniform per-vehicle capacity, in packages.
    pub capacity: u32,
}

impl FleetConfig {
    pub fn new(vehicles: usize, capacity: u32) -> Self {
        FleetConfig { vehicles, capacity }
    }

    pub fn with_vehicles(self, vehicles: usize) -> Self {
        FleetConfig { vehicles, ..self }
    }

    /// Smallest fleet that can carry `total_demand` at this capacity,
    /// ignoring routing. Ceiling division; zero capacity yields zero and is
    /// rejected later by model validation.
    pub fn minimum_vehicles_for(total_demand: u64, capacity: u32) -> usize {
        if capacity == 0 {
            return 0;
        }

        total_demand.div_ceil(capacity as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_vehicles() {
        assert_eq!(FleetConfig::minimum_vehicles_for(0, 50), 0);
        assert_eq!(FleetConfig::minimum_vehicles_for(1490, 50), 30);
        assert_eq!(FleetConfig::minimum_vehicles_for(1501, 50), 31);
        assert_eq!(FleetConfig::minimum_vehicles_for(100, 0), 0);
    }
}
