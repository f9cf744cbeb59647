pub mod engine;
pub mod insertion_engine;
pub mod search_params;
pub mod step_indexer;

mod insertion;
mod local_search;
mod working_routes;
