use thiserror::Error;

/// Configuration errors. These are fatal to the solve request and are never
/// retried by the escalation loop.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("demand vector has {demands} entries but the matrices cover {locations} locations")]
    DimensionMismatch { demands: usize, locations: usize },

    #[error("distance and time matrices disagree in size ({distances} vs {times} locations)")]
    MatrixSizeMismatch { distances: usize, times: usize },

    #[error("matrix row {row} has {len} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("negative travel value between nodes {from} and {to}")]
    NegativeEntry { from: usize, to: usize },

    #[error("matrix diagonal must be zero, node {node} has {value}")]
    NonzeroDiagonal { node: usize, value: f64 },

    #[error("depot demand must be zero, got {0}")]
    DepotDemand(u32),

    #[error("node {node} demands {demand} packages but vehicle capacity is {capacity}")]
    DemandExceedsCapacity {
        node: usize,
        demand: u32,
        capacity: u32,
    },

    #[error("fleet must contain at least one vehicle")]
    EmptyFleet,

    #[error("vehicle capacity must be positive")]
    ZeroCapacity,

    #[error(
        "distance {distance_km} km between nodes {from} and {to} rounds to zero at scale {scale}"
    )]
    ScaleUnderflow {
        from: usize,
        to: usize,
        distance_km: f64,
        scale: i64,
    },
}

/// Outcome of a full escalating solve.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("no feasible solution after {attempts} attempts (largest fleet tried: {max_vehicles})")]
    Exhausted { attempts: usize, max_vehicles: usize },
}
