mod schema;
mod types;

pub use schema::generate_json_schema;
pub use types::{JsonRoute, JsonSolution};
