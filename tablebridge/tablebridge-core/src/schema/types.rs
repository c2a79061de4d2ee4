use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

/// Largest length accepted for `CHAR`, `VARCHAR`, `BINARY` and `VARBINARY`.
pub const MAX_LENGTH: u32 = i32::MAX as u32;
/// Smallest length accepted for string and binary types.
pub const MIN_LENGTH: u32 = 1;
/// Length used when a string or binary type omits its parameter.
pub const DEFAULT_LENGTH: u32 = 1;

pub const MIN_DECIMAL_PRECISION: u8 = 1;
pub const MAX_DECIMAL_PRECISION: u8 = 38;
pub const DEFAULT_DECIMAL_PRECISION: u8 = 10;
pub const DEFAULT_DECIMAL_SCALE: u8 = 0;

/// Largest fractional-second precision of `TIME` and `TIMESTAMP` (nanoseconds).
pub const MAX_TIME_PRECISION: u8 = 9;
pub const DEFAULT_TIME_PRECISION: u8 = 0;
pub const DEFAULT_TIMESTAMP_PRECISION: u8 = 6;

/// Type descriptor of the table-format schema.
///
/// Parameters are stored as written. Range limits are enforced by
/// [`parse_type`](crate::parse_type), not by construction, so an in-memory
/// descriptor may carry parameters beyond the constants above.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceType {
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Date,
    Char(u32),
    VarChar(u32),
    Binary(u32),
    VarBinary(u32),
    Decimal {
        precision: u8,
        scale: u8,
    },
    /// Time of day with the given fractional-second precision.
    Time(u8),
    /// Timestamp without time zone.
    Timestamp(u8),
    /// Timestamp with local time zone.
    LocalZonedTimestamp(u8),
    Array(Box<ElementType>),
    Map {
        key: Box<ElementType>,
        value: Box<ElementType>,
    },
    /// Unordered collection of possibly repeated elements.
    Multiset(Box<ElementType>),
    Row(SourceFields),
    /// Semi-structured value with a self-describing layout.
    Variant,
}

impl SourceType {
    /// `VARCHAR` of the largest length, spelled `STRING` in type strings.
    pub const STRING: SourceType = SourceType::VarChar(MAX_LENGTH);
    /// `VARBINARY` of the largest length, spelled `BYTES` in type strings.
    pub const BYTES: SourceType = SourceType::VarBinary(MAX_LENGTH);

    pub fn decimal(precision: u8, scale: u8) -> Self {
        SourceType::Decimal { precision, scale }
    }

    /// Array of nullable elements.
    pub fn array(element: SourceType) -> Self {
        SourceType::Array(Box::new(ElementType::nullable(element)))
    }

    /// Map with nullable keys and values.
    pub fn map(key: SourceType, value: SourceType) -> Self {
        SourceType::Map {
            key: Box::new(ElementType::nullable(key)),
            value: Box::new(ElementType::nullable(value)),
        }
    }

    /// Multiset of nullable elements.
    pub fn multiset(element: SourceType) -> Self {
        SourceType::Multiset(Box::new(ElementType::nullable(element)))
    }

    pub fn row(fields: impl Into<SourceFields>) -> Self {
        SourceType::Row(fields.into())
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            SourceType::Array(_)
                | SourceType::Map { .. }
                | SourceType::Multiset(_)
                | SourceType::Row(_)
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            SourceType::Boolean => "boolean",
            SourceType::TinyInt => "tinyint",
            SourceType::SmallInt => "smallint",
            SourceType::Int => "int",
            SourceType::BigInt => "bigint",
            SourceType::Float => "float",
            SourceType::Double => "double",
            SourceType::Date => "date",
            SourceType::Char(_) => "char",
            SourceType::VarChar(_) => "varchar",
            SourceType::Binary(_) => "binary",
            SourceType::VarBinary(_) => "varbinary",
            SourceType::Decimal { .. } => "decimal",
            SourceType::Time(_) => "time",
            SourceType::Timestamp(_) => "timestamp",
            SourceType::LocalZonedTimestamp(_) => "timestamp_ltz",
            SourceType::Array(_) => "array",
            SourceType::Map { .. } => "map",
            SourceType::Multiset(_) => "multiset",
            SourceType::Row(_) => "row",
            SourceType::Variant => "variant",
        }
    }
}

/// Renders the canonical type string accepted by [`parse_type`](crate::parse_type).
impl Display for SourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SourceType::Boolean => f.write_str("BOOLEAN"),
            SourceType::TinyInt => f.write_str("TINYINT"),
            SourceType::SmallInt => f.write_str("SMALLINT"),
            SourceType::Int => f.write_str("INT"),
            SourceType::BigInt => f.write_str("BIGINT"),
            SourceType::Float => f.write_str("FLOAT"),
            SourceType::Double => f.write_str("DOUBLE"),
            SourceType::Date => f.write_str("DATE"),
            SourceType::Char(n) => write!(f, "CHAR({n})"),
            SourceType::VarChar(n) => write!(f, "VARCHAR({n})"),
            SourceType::Binary(n) => write!(f, "BINARY({n})"),
            SourceType::VarBinary(n) => write!(f, "VARBINARY({n})"),
            SourceType::Decimal { precision, scale } => {
                write!(f, "DECIMAL({precision}, {scale})")
            }
            SourceType::Time(p) => write!(f, "TIME({p})"),
            SourceType::Timestamp(p) => write!(f, "TIMESTAMP({p})"),
            SourceType::LocalZonedTimestamp(p) => {
                write!(f, "TIMESTAMP({p}) WITH LOCAL TIME ZONE")
            }
            SourceType::Array(elem) => write!(f, "ARRAY<{elem}>"),
            SourceType::Map { key, value } => write!(f, "MAP<{key}, {value}>"),
            SourceType::Multiset(elem) => write!(f, "MULTISET<{elem}>"),
            SourceType::Row(fields) => {
                f.write_str("ROW<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "`{}` {}", field.name.replace('`', "``"), field.element)?;
                    if let Some(description) = &field.description {
                        write!(f, " '{}'", description.replace('\'', "''"))?;
                    }
                }
                f.write_str(">")
            }
            SourceType::Variant => f.write_str("VARIANT"),
        }
    }
}

/// Type with its nullability, used for columns and composite children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementType {
    pub data_type: SourceType,
    pub nullable: bool,
}

impl ElementType {
    pub fn new(data_type: SourceType, nullable: bool) -> Self {
        Self {
            data_type,
            nullable,
        }
    }

    pub fn nullable(data_type: SourceType) -> Self {
        Self::new(data_type, true)
    }

    pub fn not_null(data_type: SourceType) -> Self {
        Self::new(data_type, false)
    }
}

impl Display for ElementType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.data_type)?;
        if !self.nullable {
            f.write_str(" NOT NULL")?;
        }
        Ok(())
    }
}

/// Named member of a row type or a table schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceField {
    pub name: String,
    pub element: ElementType,
    pub description: Option<String>,
}

impl SourceField {
    pub fn new(name: impl Into<String>, data_type: SourceType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            element: ElementType::new(data_type, nullable),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered collection of [`SourceField`] used for table schemas and row members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SourceFields(pub Vec<SourceField>);

impl SourceFields {
    pub fn new(fields: Vec<SourceField>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[SourceField] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceField> {
        self.0.iter()
    }
}

impl From<Vec<SourceField>> for SourceFields {
    fn from(value: Vec<SourceField>) -> Self {
        Self(value)
    }
}

impl From<SourceFields> for Vec<SourceField> {
    fn from(value: SourceFields) -> Self {
        value.0
    }
}

impl AsRef<[SourceField]> for SourceFields {
    fn as_ref(&self) -> &[SourceField] {
        self.as_slice()
    }
}

impl Deref for SourceFields {
    type Target = [SourceField];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for SourceFields {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_source_fields(self.as_slice())?;
        f.write_str(&text)
    }
}
