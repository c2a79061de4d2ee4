//! Error types for type-string parsing.

/// Error returned by [`parse_type`](crate::parse_type) and
/// [`parse_schema`](crate::parse_schema).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeParseError {
    /// A character that cannot start any token.
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    /// A quoted identifier or string literal without its closing quote.
    #[error("unterminated {what} starting at offset {offset}")]
    Unterminated { what: &'static str, offset: usize },

    /// The input does not match the type grammar.
    #[error("expected {expected} at offset {offset}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    /// A word in type position that names no known type.
    #[error("unknown type '{name}' at offset {offset}")]
    UnknownType { name: String, offset: usize },

    /// A length or precision parameter outside the supported range.
    #[error("{parameter} of {type_name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        type_name: &'static str,
        parameter: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("decimal scale {scale} exceeds precision {precision}")]
    ScaleExceedsPrecision { precision: u8, scale: u8 },

    /// `ARRAY`, `MAP`, `MULTISET` or `ROW` nested deeper than the parser allows.
    #[error("type nesting exceeds {max} levels at offset {offset}")]
    NestingTooDeep { max: usize, offset: usize },

    /// Two members of the same row share a name.
    #[error("duplicate field name '{name}'")]
    DuplicateField { name: String },

    /// Error on a specific line of a schema text.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<TypeParseError>,
    },
}
