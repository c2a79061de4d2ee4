use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use tablebridge_host::{ColumnMetadata, HostType, MAX_DECIMAL_PRECISION, RowField};

use crate::error::ArrowSchemaError;

// ---------------------------------------------------------------------------
// Convert translated columns to an Arrow schema
// ---------------------------------------------------------------------------

/// Converts translated table columns into an Arrow `Schema`, in column order.
pub fn columns_to_arrow_schema(columns: &[ColumnMetadata]) -> Result<Schema, ArrowSchemaError> {
    let fields = columns
        .iter()
        .map(column_to_arrow_field)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Schema::new(fields))
}

pub fn column_to_arrow_field(column: &ColumnMetadata) -> Result<Field, ArrowSchemaError> {
    Ok(Field::new(
        &column.name,
        host_type_to_arrow(&column.host_type)?,
        column.nullable,
    ))
}

// ---------------------------------------------------------------------------
// Convert a single host type
// ---------------------------------------------------------------------------

/// Returns the Arrow data type used to carry values of `host_type`.
///
/// Decimals outside `1..=38` precision, or with a scale above the precision,
/// are rejected here.
pub fn host_type_to_arrow(host_type: &HostType) -> Result<DataType, ArrowSchemaError> {
    let dt = match host_type {
        HostType::Boolean => DataType::Boolean,
        HostType::TinyInt => DataType::Int8,
        HostType::SmallInt => DataType::Int16,
        HostType::Integer => DataType::Int32,
        HostType::BigInt => DataType::Int64,
        HostType::Real => DataType::Float32,
        HostType::Double => DataType::Float64,
        HostType::Decimal { precision, scale } => {
            if *precision == 0 || *precision > MAX_DECIMAL_PRECISION || scale > precision {
                return Err(ArrowSchemaError::DecimalOutOfRange {
                    precision: *precision,
                    scale: *scale,
                    max: MAX_DECIMAL_PRECISION,
                });
            }
            DataType::Decimal128(*precision, *scale as i8)
        }
        HostType::Char(_) | HostType::Varchar(_) => DataType::Utf8,
        HostType::Varbinary => DataType::Binary,
        HostType::Date => DataType::Date32,
        HostType::Time(precision) => match time_unit(*precision) {
            unit @ (TimeUnit::Second | TimeUnit::Millisecond) => DataType::Time32(unit),
            unit => DataType::Time64(unit),
        },
        HostType::Timestamp(precision) => DataType::Timestamp(time_unit(*precision), None),
        HostType::TimestampWithTimeZone(precision) => DataType::Timestamp(
            time_unit(*precision),
            Some(Arc::from(crate::TIMESTAMP_TZ)),
        ),
        HostType::Array(element) => {
            let child_dt = host_type_to_arrow(element)?;
            DataType::List(Arc::new(Field::new("item", child_dt, true)))
        }
        HostType::Map { key, value } => {
            let key_field = Field::new("key", host_type_to_arrow(key)?, false);
            let val_field = Field::new("value", host_type_to_arrow(value)?, true);
            let entry_struct = DataType::Struct(vec![key_field, val_field].into());
            let entry_field = Field::new("entries", entry_struct, false);
            DataType::Map(Arc::new(entry_field), false)
        }
        HostType::Row(fields) => {
            let arrow_fields = fields
                .iter()
                .map(row_field_to_arrow_field)
                .collect::<Result<Vec<_>, _>>()?;
            DataType::Struct(arrow_fields.into())
        }
    };
    Ok(dt)
}

fn row_field_to_arrow_field(field: &RowField) -> Result<Field, ArrowSchemaError> {
    Ok(Field::new(
        &field.name,
        host_type_to_arrow(&field.data_type)?,
        true,
    ))
}

/// Coarsest unit that still holds `precision` fractional-second digits.
/// Precisions beyond nanoseconds are carried at nanoseconds.
fn time_unit(precision: u8) -> TimeUnit {
    match precision {
        0 => TimeUnit::Second,
        1..=3 => TimeUnit::Millisecond,
        4..=6 => TimeUnit::Microsecond,
        _ => TimeUnit::Nanosecond,
    }
}
