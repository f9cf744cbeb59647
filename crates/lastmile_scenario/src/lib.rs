pub mod error;
pub mod generate;
pub mod matrix;
pub mod scenario;
