//! Host query-engine types and translation from source table-format types.
//!
//! [`translate`] maps a single [`SourceType`](tablebridge_core::SourceType)
//! tree to a [`HostType`] tree. [`translate_schema`] applies it to the
//! top-level columns of a table and either yields every column or fails as a
//! whole.

pub mod error;
pub mod translate;
pub mod types;

/// Re-export of [`error::TranslateError`].
pub use error::TranslateError;
/// Re-exports from [`translate`].
pub use translate::{ColumnMetadata, translate, translate_schema};
/// Re-exports from [`types`].
pub use types::{
    CHAR_MAX_LENGTH, HostType, MAX_DECIMAL_PRECISION, MILLIS_PRECISION, RowField,
    VARCHAR_MAX_LENGTH,
};
