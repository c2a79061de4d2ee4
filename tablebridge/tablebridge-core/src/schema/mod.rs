//! Source table-format schema representation.

mod format;
mod types;

pub use format::format_source_fields;
pub use types::{
    DEFAULT_DECIMAL_PRECISION, DEFAULT_DECIMAL_SCALE, DEFAULT_LENGTH, DEFAULT_TIME_PRECISION,
    DEFAULT_TIMESTAMP_PRECISION, ElementType, MAX_DECIMAL_PRECISION, MAX_LENGTH,
    MAX_TIME_PRECISION, MIN_DECIMAL_PRECISION, MIN_LENGTH, SourceField, SourceFields, SourceType,
};
