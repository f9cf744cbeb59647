use std::{fs, path::Path};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;

/// Which demand column of a scenario to solve against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DemandProfile {
    Base,
    Peak,
}

/// One delivery point. `coordinates` are `[lon, lat]` in degrees.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "DeliveryLocation")]
pub struct DeliveryLocation {
    pub coordinates: [f64; 2],
    pub base_demand: u32,
    pub peak_demand: u32,
}

/// A solvable day of deliveries: one depot plus the locations to serve.
/// The depot is not part of `locations`; matrix and demand builders put it
/// at index 0 themselves.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Scenario")]
pub struct Scenario {
    pub name: String,
    /// Depot position, `[lon, lat]` in degrees.
    pub depot: [f64; 2],
    pub locations: Vec<DeliveryLocation>,
}

impl Scenario {
    /// Number of matrix nodes, depot included.
    pub fn num_nodes(&self) -> usize {
        self.locations.len() + 1
    }

    /// Demand per node with the depot's zero at index 0.
    pub fn demands(&self, profile: DemandProfile) -> Vec<u32> {
        let mut demands = Vec::with_capacity(self.num_nodes());
        demands.push(0);

        for location in &self.locations {
            demands.push(match profile {
                DemandProfile::Base => location.base_demand,
                DemandProfile::Peak => location.peak_demand,
            });
        }

        demands
    }

    pub fn total_demand(&self, profile: DemandProfile) -> u64 {
        self.demands(profile).iter().map(|&d| d as u64).sum()
    }

    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let scenario: Scenario = serde_json::from_str(&text)?;
        if scenario.locations.is_empty() {
            return Err(ScenarioError::Empty);
        }

        Ok(scenario)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ScenarioError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| ScenarioError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
