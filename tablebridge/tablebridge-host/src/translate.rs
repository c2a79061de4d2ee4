use tablebridge_core::{ElementType, SourceField, SourceType};

use crate::{
    error::TranslateError,
    types::{CHAR_MAX_LENGTH, HostType, RowField, VARCHAR_MAX_LENGTH},
};

// ---------------------------------------------------------------------------
// Single type
// ---------------------------------------------------------------------------

/// Translates a source type tree into the equivalent host type tree.
///
/// Children are translated before their parent is built. Nullability is not
/// part of host types and is dropped.
///
/// Lossy rules:
/// - `CHAR`/`VARCHAR` lengths are clamped to the host maximum, never rejected.
/// - `BINARY(n)` and `VARBINARY(n)` both become `varbinary` without a length.
/// - `TIME`, `TIMESTAMP` and `TIMESTAMP WITH LOCAL TIME ZONE` are fixed at
///   millisecond precision regardless of the source precision.
/// - `MULTISET<T>` is translated as `MAP<T, INT>` (element to occurrence count).
///
/// Decimal precision and scale are passed through unchecked.
pub fn translate(source: &SourceType) -> Result<HostType, TranslateError> {
    let host = match source {
        SourceType::Char(length) => HostType::Char((*length).min(CHAR_MAX_LENGTH)),
        SourceType::VarChar(length) => HostType::Varchar((*length).min(VARCHAR_MAX_LENGTH)),
        SourceType::Boolean => HostType::Boolean,
        SourceType::Binary(_) | SourceType::VarBinary(_) => HostType::Varbinary,
        SourceType::Decimal { precision, scale } => HostType::Decimal {
            precision: *precision,
            scale: *scale,
        },
        SourceType::TinyInt => HostType::TinyInt,
        SourceType::SmallInt => HostType::SmallInt,
        SourceType::Int => HostType::Integer,
        SourceType::BigInt => HostType::BigInt,
        SourceType::Float => HostType::Real,
        SourceType::Double => HostType::Double,
        SourceType::Date => HostType::Date,
        // Sub-millisecond precision is truncated on purpose.
        SourceType::Time(_) => HostType::TIME_MILLIS,
        SourceType::Timestamp(_) => HostType::TIMESTAMP_MILLIS,
        SourceType::LocalZonedTimestamp(_) => HostType::TIMESTAMP_TZ_MILLIS,
        SourceType::Array(element) => HostType::array(translate(&element.data_type)?),
        SourceType::Map { key, value } => {
            HostType::map(translate(&key.data_type)?, translate(&value.data_type)?)
        }
        SourceType::Multiset(element) => translate(&counted_map(element))?,
        SourceType::Row(fields) => HostType::Row(
            fields
                .iter()
                .map(|field| -> Result<RowField, TranslateError> {
                    Ok(RowField::new(&field.name, translate(&field.element.data_type)?))
                })
                .collect::<Result<_, _>>()?,
        ),
        SourceType::Variant => {
            return Err(TranslateError::UnsupportedType {
                type_name: source.to_string(),
            });
        }
    };
    Ok(host)
}

/// `MULTISET<T>` re-expressed as `MAP<T, INT>`; the counter stays 32-bit.
fn counted_map(element: &ElementType) -> SourceType {
    SourceType::Map {
        key: Box::new(element.clone()),
        value: Box::new(ElementType::nullable(SourceType::Int)),
    }
}

// ---------------------------------------------------------------------------
// Table schema
// ---------------------------------------------------------------------------

/// Host-side description of one table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMetadata {
    pub name: String,
    pub host_type: HostType,
    pub nullable: bool,
    pub comment: Option<String>,
}

/// Translates the top-level columns of a table schema, in order.
///
/// The first column that cannot be translated fails the whole schema; no
/// partial column list is returned.
pub fn translate_schema(
    fields: impl AsRef<[SourceField]>,
) -> Result<Vec<ColumnMetadata>, TranslateError> {
    fields
        .as_ref()
        .iter()
        .map(|field| -> Result<ColumnMetadata, TranslateError> {
            let host_type =
                translate(&field.element.data_type).map_err(|source| TranslateError::Column {
                    column: field.name.clone(),
                    source: Box::new(source),
                })?;
            Ok(ColumnMetadata {
                name: field.name.clone(),
                host_type,
                nullable: field.element.nullable,
                comment: field.description.clone(),
            })
        })
        .collect()
}
