//! Arrow integration layer for `tablebridge`.
//!
//! Page sources describe the batches they emit with an Arrow `Schema`. This
//! crate derives that schema from host types:
//! - [`host_type_to_arrow`] for a single [`HostType`](tablebridge_host::HostType).
//! - [`columns_to_arrow_schema`] for translated table columns.
//!
//! Conventions:
//! - Zoned timestamps use the `+00:00` time zone.
//! - Nested fields are always nullable; top-level fields follow column nullability.
//!
//! # Typical Flow
//! ```rust
//! use tablebridge_arrow::columns_to_arrow_schema;
//! use tablebridge_core::parse_schema;
//! use tablebridge_host::translate_schema;
//!
//! let fields = parse_schema("id BIGINT NOT NULL\nname STRING").unwrap();
//! let columns = translate_schema(&fields).unwrap();
//! let schema = columns_to_arrow_schema(&columns).unwrap();
//! assert_eq!(schema.fields().len(), 2);
//! ```
pub mod error;
pub mod schema_convert;

/// Re-export of [`error::ArrowSchemaError`].
pub use error::ArrowSchemaError;
/// Re-exports from [`schema_convert`].
pub use schema_convert::{column_to_arrow_field, columns_to_arrow_schema, host_type_to_arrow};

pub(crate) const TIMESTAMP_TZ: &str = "+00:00";
