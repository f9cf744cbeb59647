use rand::{
    Rng, SeedableRng,
    distr::{Distribution, weighted::WeightedIndex},
    rngs::SmallRng,
};
use rand_distr::Normal;
use tracing::info;

use crate::{
    error::ScenarioError,
    scenario::{DeliveryLocation, Scenario},
};

/// Package counts a location may demand per day, with their weights. Mostly
/// small parcels with a thin tail of bulk orders.
const DEMAND_CHOICES: [u32; 5] = [2, 3, 4, 8, 10];
const DEMAND_WEIGHTS: [f64; 5] = [0.50, 0.30, 0.15, 0.04, 0.01];

/// Shape of a synthetic delivery day. Defaults model a dense city: clusters
/// of customers within roughly 10 km of a central depot.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub name: String,
    pub num_locations: usize,
    pub num_clusters: usize,
    /// Depot position, `[lon, lat]` in degrees.
    pub depot: [f64; 2],
    /// Cluster centers fall within this many degrees of the depot.
    pub cluster_spread_degrees: f64,
    /// Standard deviation of a location's offset from its cluster center.
    pub location_jitter_degrees: f64,
    /// Peak-season demand as a multiple of base demand.
    pub peak_multiplier: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            name: "synthetic".into(),
            num_locations: 500,
            num_clusters: 8,
            depot: [-74.0060, 40.7128],
            cluster_spread_degrees: 0.09,
            location_jitter_degrees: 0.01,
            peak_multiplier: 2.67,
        }
    }
}

/// Generates a synthetic scenario. The same config and seed always produce
/// the same scenario.
pub fn generate_scenario(
    config: &GeneratorConfig,
    seed: u64,
) -> Result<Scenario, ScenarioError> {
    let mut rng = SmallRng::seed_from_u64(seed);

    let spread = config.cluster_spread_degrees;
    let centers: Vec<[f64; 2]> = (0..config.num_clusters)
        .map(|_| {
            [
                config.depot[0] + rng.random_range(-spread..=spread),
                config.depot[1] + rng.random_range(-spread..=spread),
            ]
        })
        .collect();

    // Sigma of zero is valid and pins locations to their cluster center.
    let jitter = Normal::new(0.0, config.location_jitter_degrees)
        .map_err(|_| ScenarioError::InvalidJitter(config.location_jitter_degrees))?;
    let demand = WeightedIndex::new(DEMAND_WEIGHTS)
        .expect("demand weights are a fixed positive table");

    let locations: Vec<DeliveryLocation> = (0..config.num_locations)
        .map(|_| {
            let center = centers[rng.random_range(0..centers.len())];
            let base_demand = DEMAND_CHOICES[demand.sample(&mut rng)];

            DeliveryLocation {
                coordinates: [
                    center[0] + jitter.sample(&mut rng),
                    center[1] + jitter.sample(&mut rng),
                ],
                base_demand,
                peak_demand: (base_demand as f64 * config.peak_multiplier).round() as u32,
            }
        })
        .collect();

    let scenario = Scenario {
        name: config.name.clone(),
        depot: config.depot,
        locations,
    };

    info!(
        name = scenario.name,
        locations = scenario.locations.len(),
        clusters = config.num_clusters,
        seed,
        "generated scenario"
    );

    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::DemandProfile;

    #[test]
    fn test_same_seed_same_scenario() {
        let config = GeneratorConfig {
            num_locations: 50,
            ..GeneratorConfig::default()
        };

        let first = generate_scenario(&config, 42).unwrap();
        let second = generate_scenario(&config, 42).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = GeneratorConfig {
            num_locations: 50,
            ..GeneratorConfig::default()
        };

        let first = generate_scenario(&config, 1).unwrap();
        let second = generate_scenario(&config, 2).unwrap();

        assert_ne!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_demands_come_from_the_choice_table() {
        let scenario = generate_scenario(&GeneratorConfig::default(), 7).unwrap();

        assert_eq!(scenario.locations.len(), 500);
        for location in &scenario.locations {
            assert!(DEMAND_CHOICES.contains(&location.base_demand));
            assert_eq!(
                location.peak_demand,
                (location.base_demand as f64 * 2.67).round() as u32
            );
        }
    }

    #[test]
    fn test_locations_stay_near_the_depot() {
        let config = GeneratorConfig::default();
        let scenario = generate_scenario(&config, 3).unwrap();

        // Spread plus a generous jitter allowance.
        let reach = config.cluster_spread_degrees + 6.0 * config.location_jitter_degrees;
        for location in &scenario.locations {
            assert!((location.coordinates[0] - config.depot[0]).abs() < reach);
            assert!((location.coordinates[1] - config.depot[1]).abs() < reach);
        }
    }

    #[test]
    fn test_peak_profile_scales_total_demand() {
        let scenario = generate_scenario(&GeneratorConfig::default(), 11).unwrap();

        let base = scenario.total_demand(DemandProfile::Base) as f64;
        let peak = scenario.total_demand(DemandProfile::Peak) as f64;

        // Per-location rounding keeps the ratio near but not exactly 2.67.
        assert!((peak / base - 2.67).abs() < 0.1);
    }

    #[test]
    fn test_negative_jitter_is_rejected() {
        let config = GeneratorConfig {
            location_jitter_degrees: -0.5,
            ..GeneratorConfig::default()
        };

        assert!(matches!(
            generate_scenario(&config, 0),
            Err(ScenarioError::InvalidJitter(_))
        ));
    }
}
