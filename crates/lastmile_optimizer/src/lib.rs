pub mod costs;
pub mod error;
pub mod json;
pub mod problem;
pub mod search;
pub mod solution;
pub mod solver;

#[cfg(test)]
pub(crate) mod test_utils;
