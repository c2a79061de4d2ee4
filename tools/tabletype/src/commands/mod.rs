pub mod schema;
pub mod translate;
