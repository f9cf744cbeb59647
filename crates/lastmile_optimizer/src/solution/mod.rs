mod extract;
mod solution;

pub use extract::extract_solution;
pub use solution::{Route, Solution};
