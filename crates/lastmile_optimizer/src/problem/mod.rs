pub mod fleet;
pub mod routing_model;
pub mod travel_matrices;
