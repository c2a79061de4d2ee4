use std::fmt::{Display, Formatter, Result};

/// Largest `char(n)` length the host engine accepts.
pub const CHAR_MAX_LENGTH: u32 = 65_536;
/// Largest bounded `varchar(n)` length the host engine accepts.
pub const VARCHAR_MAX_LENGTH: u32 = i32::MAX as u32 - 1;
pub const MAX_DECIMAL_PRECISION: u8 = 38;
pub const MILLIS_PRECISION: u8 = 3;

/// Type descriptor of the host query engine.
///
/// Host values are always nullable, so unlike the source system no
/// nullability is tracked per node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostType {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
    Decimal { precision: u8, scale: u8 },
    Char(u32),
    Varchar(u32),
    Varbinary,
    Date,
    Time(u8),
    Timestamp(u8),
    TimestampWithTimeZone(u8),
    Array(Box<HostType>),
    Map {
        key: Box<HostType>,
        value: Box<HostType>,
    },
    Row(Vec<RowField>),
}

impl HostType {
    pub const TIME_MILLIS: HostType = HostType::Time(MILLIS_PRECISION);
    pub const TIMESTAMP_MILLIS: HostType = HostType::Timestamp(MILLIS_PRECISION);
    pub const TIMESTAMP_TZ_MILLIS: HostType = HostType::TimestampWithTimeZone(MILLIS_PRECISION);

    pub fn array(element: HostType) -> Self {
        HostType::Array(Box::new(element))
    }

    pub fn map(key: HostType, value: HostType) -> Self {
        HostType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn row(fields: impl IntoIterator<Item = RowField>) -> Self {
        HostType::Row(fields.into_iter().collect())
    }

    /// Base name of the type, without parameters.
    pub fn type_name(&self) -> &'static str {
        match self {
            HostType::Boolean => "boolean",
            HostType::TinyInt => "tinyint",
            HostType::SmallInt => "smallint",
            HostType::Integer => "integer",
            HostType::BigInt => "bigint",
            HostType::Real => "real",
            HostType::Double => "double",
            HostType::Decimal { .. } => "decimal",
            HostType::Char(_) => "char",
            HostType::Varchar(_) => "varchar",
            HostType::Varbinary => "varbinary",
            HostType::Date => "date",
            HostType::Time(_) => "time",
            HostType::Timestamp(_) => "timestamp",
            HostType::TimestampWithTimeZone(_) => "timestamp with time zone",
            HostType::Array(_) => "array",
            HostType::Map { .. } => "map",
            HostType::Row(_) => "row",
        }
    }
}

/// Renders the engine's type signature, e.g. `map(varchar(5), array(integer))`.
impl Display for HostType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            HostType::Decimal { precision, scale } => write!(f, "decimal({precision},{scale})"),
            HostType::Char(n) => write!(f, "char({n})"),
            HostType::Varchar(n) => write!(f, "varchar({n})"),
            HostType::Time(p) => write!(f, "time({p})"),
            HostType::Timestamp(p) => write!(f, "timestamp({p})"),
            HostType::TimestampWithTimeZone(p) => write!(f, "timestamp({p}) with time zone"),
            HostType::Array(element) => write!(f, "array({element})"),
            HostType::Map { key, value } => write!(f, "map({key}, {value})"),
            HostType::Row(fields) => {
                f.write_str("row(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{field}")?;
                }
                f.write_str(")")
            }
            other => f.write_str(other.type_name()),
        }
    }
}

/// Named member of a host row type. Members are positional; the name is
/// carried for display and column resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowField {
    pub name: String,
    pub data_type: HostType,
}

impl RowField {
    pub fn new(name: impl Into<String>, data_type: HostType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

impl Display for RowField {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let simple = !self.name.is_empty()
            && !self.name.starts_with(|c: char| c.is_ascii_digit())
            && self
                .name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if simple {
            write!(f, "{} {}", self.name, self.data_type)
        } else {
            write!(f, "\"{}\" {}", self.name.replace('"', "\"\""), self.data_type)
        }
    }
}
