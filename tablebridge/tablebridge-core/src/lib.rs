//! Type descriptors of the source table format.
//!
//! This crate provides the host-independent schema representation
//! ([`SourceType`] / [`SourceField`]), the parser for the SQL-like type strings
//! stored in table metadata ([`parse_type`] / [`parse_schema`]) and a
//! tree-style formatter for schemas ([`format_source_fields`]).

mod error;
mod parser;
mod schema;

pub use error::TypeParseError;
pub use parser::{MAX_NESTING_DEPTH, parse_schema, parse_type};
pub use schema::{
    DEFAULT_DECIMAL_PRECISION, DEFAULT_DECIMAL_SCALE, DEFAULT_LENGTH, DEFAULT_TIME_PRECISION,
    DEFAULT_TIMESTAMP_PRECISION, ElementType, MAX_DECIMAL_PRECISION, MAX_LENGTH,
    MAX_TIME_PRECISION, MIN_DECIMAL_PRECISION, MIN_LENGTH, SourceField, SourceFields, SourceType,
    format_source_fields,
};
