//! Parser for the SQL-like type strings stored in table metadata, built on
//! `nom` combinators.
//!
//! [`parse_type`] reads a single type such as `MAP<STRING, ARRAY<INT NOT NULL>>`.
//! [`parse_schema`] reads a whole table schema, one `name TYPE ['comment']`
//! column per line.
//!
//! Keywords are case-insensitive. `ROW` accepts both `ROW<...>` and
//! `ROW(...)`. Field names may be backquoted, with a doubled backquote standing
//! for a literal one; comments are single-quoted the same way.

use std::collections::HashSet;

use nom::{
    Finish, IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::{char, multispace0, satisfy},
    combinator::{cut, eof, map, opt, recognize, value},
    error::{ContextError, ErrorKind, ParseError, context},
    multi::separated_list0,
    sequence::{delimited, pair, preceded, terminated, tuple},
};

use crate::{
    error::TypeParseError,
    schema::{
        DEFAULT_DECIMAL_PRECISION, DEFAULT_DECIMAL_SCALE, DEFAULT_LENGTH, DEFAULT_TIME_PRECISION,
        DEFAULT_TIMESTAMP_PRECISION, ElementType, MAX_DECIMAL_PRECISION, MAX_LENGTH,
        MAX_TIME_PRECISION, MIN_DECIMAL_PRECISION, MIN_LENGTH, SourceField, SourceFields,
        SourceType,
    },
};

/// Deepest nesting of `ARRAY`, `MAP`, `MULTISET` and `ROW` accepted in one
/// type string.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Parse a type string into an [`ElementType`].
///
/// A trailing `NOT NULL` makes the result non-nullable; `NULL` or no suffix
/// keeps it nullable.
pub fn parse_type(text: &str) -> Result<ElementType, TypeParseError> {
    parse_complete(text, |i| element(i, 0))
}

/// Parse a schema text with one column per line.
///
/// Blank lines and lines starting with `#` are skipped. Column names must be
/// unique within the schema.
pub fn parse_schema(text: &str) -> Result<SourceFields, TypeParseError> {
    let mut fields = Vec::new();
    let mut seen = HashSet::new();

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let at_line = |source: TypeParseError| TypeParseError::Line {
            line: idx + 1,
            source: Box::new(source),
        };

        let field = parse_complete(trimmed, |i| field(i, 0)).map_err(at_line)?;
        if !seen.insert(field.name.clone()) {
            return Err(at_line(TypeParseError::DuplicateField { name: field.name }));
        }
        fields.push(field);
    }

    Ok(fields.into())
}

/// Runs `parser` over the whole of `text`, allowing surrounding whitespace.
fn parse_complete<'a, O>(
    text: &'a str,
    parser: impl FnMut(&'a str) -> PResult<'a, O>,
) -> Result<O, TypeParseError> {
    delimited(ws, parser, pair(ws, context("end of input", eof)))(text)
        .finish()
        .map(|(_, out)| out)
        .map_err(|failure| failure.into_error(text))
}

// ---------------------------------------------------------------------------
// Error plumbing
// ---------------------------------------------------------------------------

type PResult<'a, O> = IResult<&'a str, O, Failure<'a>>;

/// Parser error carrying the unparsed rest of the input, from which the byte
/// offset is recovered once parsing stops.
#[derive(Debug)]
struct Failure<'a> {
    input: &'a str,
    reason: Reason,
}

#[derive(Debug)]
enum Reason {
    Syntax,
    Expected(&'static str),
    Unterminated(&'static str),
    UnknownType(String),
    NestingTooDeep,
    Invalid(TypeParseError),
}

impl<'a> Failure<'a> {
    fn new(input: &'a str, reason: Reason) -> Self {
        Self { input, reason }
    }

    fn into_error(self, text: &str) -> TypeParseError {
        let offset = text.len().saturating_sub(self.input.len());
        match self.reason {
            Reason::Syntax => unexpected("type syntax", self.input, offset),
            Reason::Expected(expected) => unexpected(expected, self.input, offset),
            Reason::Unterminated(what) => TypeParseError::Unterminated { what, offset },
            Reason::UnknownType(name) => TypeParseError::UnknownType { name, offset },
            Reason::NestingTooDeep => TypeParseError::NestingTooDeep {
                max: MAX_NESTING_DEPTH,
                offset,
            },
            Reason::Invalid(err) => err,
        }
    }
}

impl<'a> ParseError<&'a str> for Failure<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Self::new(input, Reason::Syntax)
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    /// Keeps whichever alternative got further.
    fn or(self, other: Self) -> Self {
        if other.input.len() < self.input.len() {
            other
        } else {
            self
        }
    }
}

impl<'a> ContextError<&'a str> for Failure<'a> {
    fn add_context(_input: &'a str, expected: &'static str, other: Self) -> Self {
        match other.reason {
            Reason::Syntax => Self::new(other.input, Reason::Expected(expected)),
            _ => other,
        }
    }
}

/// Unrecoverable error at `input`: stops every enclosing `alt`.
fn fail<'a>(input: &'a str, reason: Reason) -> nom::Err<Failure<'a>> {
    nom::Err::Failure(Failure::new(input, reason))
}

fn unexpected(expected: &'static str, rest: &str, offset: usize) -> TypeParseError {
    match rest.chars().next() {
        Some(c) if !starts_token(c) => TypeParseError::UnexpectedChar { found: c, offset },
        _ => TypeParseError::UnexpectedToken {
            expected,
            found: describe(rest),
            offset,
        },
    }
}

fn starts_token(c: char) -> bool {
    is_ident_continue(c) || c.is_whitespace() || "()<>,`'".contains(c)
}

fn describe(rest: &str) -> String {
    match rest.chars().next() {
        None => "end of input".to_string(),
        Some('`') => "quoted identifier".to_string(),
        Some('\'') => "string literal".to_string(),
        Some(c) if c.is_ascii_digit() => {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            format!("number {digits}")
        }
        Some(c) if is_ident_continue(c) => {
            let word: String = rest.chars().take_while(|&c| is_ident_continue(c)).collect();
            format!("'{word}'")
        }
        Some(c) => format!("'{c}'"),
    }
}

fn check_range(
    type_name: &'static str,
    parameter: &'static str,
    value: u64,
    min: u64,
    max: u64,
) -> Result<u64, TypeParseError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(TypeParseError::OutOfRange {
            type_name,
            parameter,
            value,
            min,
            max,
        })
    }
}

// ---------------------------------------------------------------------------
// Lexical pieces
// ---------------------------------------------------------------------------

fn ws(input: &str) -> PResult<'_, ()> {
    value((), multispace0)(input)
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Parse an identifier (must start with a letter or `_`)
fn identifier(input: &str) -> PResult<'_, &str> {
    recognize(pair(
        satisfy(|c| c.is_alphabetic() || c == '_'),
        take_while(is_ident_continue),
    ))(input)
}

fn keyword_boundary(input: &str) -> PResult<'_, ()> {
    if input.chars().next().is_some_and(is_ident_continue) {
        return Err(nom::Err::Error(Failure::from_error_kind(
            input,
            ErrorKind::Verify,
        )));
    }
    Ok((input, ()))
}

/// Case-insensitive keyword that is not the prefix of a longer word.
fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    terminated(tag_no_case(word), keyword_boundary)
}

/// Keywords following an introducer, each separated by whitespace.
fn trailing_keywords<'a>(mut input: &'a str, words: &[&'static str]) -> PResult<'a, ()> {
    for &word in words {
        (input, _) = preceded(ws, context(word, keyword(word)))(input)?;
    }
    Ok((input, ()))
}

/// Parse an unsigned number; values beyond `u64` saturate and are rejected
/// by the range checks.
fn number(input: &str) -> PResult<'_, u64> {
    context(
        "number",
        map(take_while1(|c: char| c.is_ascii_digit()), |digits: &str| {
            digits.bytes().fold(0u64, |acc, d| {
                acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
            })
        }),
    )(input)
}

/// Read a quoted run where a doubled quote stands for one literal quote.
fn quoted<'a>(input: &'a str, quote: char, what: &'static str) -> PResult<'a, String> {
    let (mut rest, _) = char::<_, Failure<'a>>(quote)(input)?;
    let mut out = String::new();
    loop {
        let Some(end) = rest.find(quote) else {
            return Err(fail(input, Reason::Unterminated(what)));
        };
        out.push_str(&rest[..end]);
        rest = &rest[end + quote.len_utf8()..];
        match rest.strip_prefix(quote) {
            Some(after) => {
                out.push(quote);
                rest = after;
            }
            None => return Ok((rest, out)),
        }
    }
}

fn quoted_identifier(input: &str) -> PResult<'_, String> {
    quoted(input, '`', "quoted identifier")
}

fn string_literal(input: &str) -> PResult<'_, String> {
    quoted(input, '\'', "string literal")
}

/// `(inner)`; once the `(` is seen the rest is mandatory.
fn parenthesized<'a, O>(
    inner: impl FnMut(&'a str) -> PResult<'a, O>,
) -> impl FnMut(&'a str) -> PResult<'a, O> {
    preceded(
        pair(ws, char('(')),
        cut(terminated(
            preceded(ws, inner),
            preceded(ws, context("')'", char(')'))),
        )),
    )
}

/// `<inner>` directly after a composite keyword.
fn angled<'a, O>(
    input: &'a str,
    inner: impl FnMut(&'a str) -> PResult<'a, O>,
) -> PResult<'a, O> {
    cut(delimited(
        pair(ws, context("'<'", char('<'))),
        preceded(ws, inner),
        preceded(ws, context("'>'", char('>'))),
    ))(input)
}

fn comma(input: &str) -> PResult<'_, ()> {
    value((), tuple((ws, char(','), ws)))(input)
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// `TYPE [NOT NULL | NULL]`
fn element(input: &str, depth: usize) -> PResult<'_, ElementType> {
    let (rest, data_type) = data_type(input, depth)?;
    let (rest, nullable) = nullability(rest)?;
    Ok((rest, ElementType::new(data_type, nullable)))
}

fn nullability(input: &str) -> PResult<'_, bool> {
    map(
        opt(preceded(
            ws,
            alt((
                value(
                    false,
                    pair(keyword("NOT"), cut(preceded(ws, context("NULL", keyword("NULL"))))),
                ),
                value(true, keyword("NULL")),
            )),
        )),
        |nullable: Option<bool>| nullable.unwrap_or(true),
    )(input)
}

fn data_type(input: &str, depth: usize) -> PResult<'_, SourceType> {
    context(
        "type name",
        alt((
            primitive_type,
            |i| sized_type(i, "CHAR", SourceType::Char),
            |i| sized_type(i, "VARCHAR", SourceType::VarChar),
            |i| sized_type(i, "BINARY", SourceType::Binary),
            |i| sized_type(i, "VARBINARY", SourceType::VarBinary),
            decimal_type,
            time_type,
            timestamp_type,
            local_zoned_timestamp_type,
            |i| array_type(i, depth),
            |i| multiset_type(i, depth),
            |i| map_type(i, depth),
            |i| row_type(i, depth),
            unknown_type,
        )),
    )(input)
}

fn primitive_type(input: &str) -> PResult<'_, SourceType> {
    alt((
        value(SourceType::Boolean, keyword("BOOLEAN")),
        value(SourceType::TinyInt, keyword("TINYINT")),
        value(SourceType::SmallInt, keyword("SMALLINT")),
        value(SourceType::Int, alt((keyword("INTEGER"), keyword("INT")))),
        value(SourceType::BigInt, keyword("BIGINT")),
        value(SourceType::Float, keyword("FLOAT")),
        value(
            SourceType::Double,
            pair(keyword("DOUBLE"), opt(preceded(ws, keyword("PRECISION")))),
        ),
        value(SourceType::Date, keyword("DATE")),
        value(SourceType::STRING, keyword("STRING")),
        value(SourceType::BYTES, keyword("BYTES")),
        value(SourceType::Variant, keyword("VARIANT")),
    ))(input)
}

/// A word in type position that names no known type.
fn unknown_type(input: &str) -> PResult<'_, SourceType> {
    let (_, name) = identifier(input)?;
    Err(fail(input, Reason::UnknownType(name.to_string())))
}

fn optional_parameter(input: &str) -> PResult<'_, Option<u64>> {
    opt(parenthesized(number))(input)
}

/// `CHAR[(n)]` and friends; the length defaults to 1.
fn sized_type<'a>(
    input: &'a str,
    type_name: &'static str,
    build: fn(u32) -> SourceType,
) -> PResult<'a, SourceType> {
    let (rest, _) = keyword(type_name)(input)?;
    let (rest, length) = optional_parameter(rest)?;
    let length = match length {
        None => DEFAULT_LENGTH,
        Some(n) => check_range(
            type_name,
            "length",
            n,
            u64::from(MIN_LENGTH),
            u64::from(MAX_LENGTH),
        )
        .map_err(|err| fail(input, Reason::Invalid(err)))? as u32,
    };
    Ok((rest, build(length)))
}

fn precision<'a>(
    input: &'a str,
    type_name: &'static str,
    default: u8,
) -> PResult<'a, u8> {
    let (rest, precision) = optional_parameter(input)?;
    let precision = match precision {
        None => default,
        Some(p) => check_range(type_name, "precision", p, 0, u64::from(MAX_TIME_PRECISION))
            .map_err(|err| fail(input, Reason::Invalid(err)))? as u8,
    };
    Ok((rest, precision))
}

/// `DECIMAL[(p[, s])]`, also spelled `DEC` or `NUMERIC`.
fn decimal_type(input: &str) -> PResult<'_, SourceType> {
    let (rest, _) = alt((keyword("DECIMAL"), keyword("DEC"), keyword("NUMERIC")))(input)?;
    let (rest, params) = opt(parenthesized(pair(number, opt(preceded(comma, number)))))(rest)?;
    let (precision, scale) = match params {
        None => (
            u64::from(DEFAULT_DECIMAL_PRECISION),
            u64::from(DEFAULT_DECIMAL_SCALE),
        ),
        Some((precision, scale)) => (precision, scale.unwrap_or(0)),
    };

    let invalid = |err| fail(input, Reason::Invalid(err));
    let precision = check_range(
        "DECIMAL",
        "precision",
        precision,
        u64::from(MIN_DECIMAL_PRECISION),
        u64::from(MAX_DECIMAL_PRECISION),
    )
    .map_err(invalid)? as u8;
    let scale = check_range("DECIMAL", "scale", scale, 0, u64::from(MAX_DECIMAL_PRECISION))
        .map_err(invalid)? as u8;
    if scale > precision {
        return Err(invalid(TypeParseError::ScaleExceedsPrecision { precision, scale }));
    }
    Ok((rest, SourceType::Decimal { precision, scale }))
}

fn without_time_zone(input: &str) -> PResult<'_, ()> {
    preceded(
        pair(ws, keyword("WITHOUT")),
        cut(|i| trailing_keywords(i, &["TIME", "ZONE"])),
    )(input)
}

/// `TIME[(p)] [WITHOUT TIME ZONE]`
fn time_type(input: &str) -> PResult<'_, SourceType> {
    let (rest, _) = keyword("TIME")(input)?;
    let (rest, precision) = precision(rest, "TIME", DEFAULT_TIME_PRECISION)?;
    let (rest, _) = opt(without_time_zone)(rest)?;
    Ok((rest, SourceType::Time(precision)))
}

/// `TIMESTAMP[(p)] [WITHOUT TIME ZONE | WITH LOCAL TIME ZONE]`
fn timestamp_type(input: &str) -> PResult<'_, SourceType> {
    let (rest, _) = keyword("TIMESTAMP")(input)?;
    let (rest, precision) = precision(rest, "TIMESTAMP", DEFAULT_TIMESTAMP_PRECISION)?;
    let (rest, local) = opt(alt((
        value(
            true,
            preceded(
                pair(ws, keyword("WITH")),
                cut(|i| trailing_keywords(i, &["LOCAL", "TIME", "ZONE"])),
            ),
        ),
        value(false, without_time_zone),
    )))(rest)?;

    let data_type = if local == Some(true) {
        SourceType::LocalZonedTimestamp(precision)
    } else {
        SourceType::Timestamp(precision)
    };
    Ok((rest, data_type))
}

fn local_zoned_timestamp_type(input: &str) -> PResult<'_, SourceType> {
    let (rest, _) = keyword("TIMESTAMP_LTZ")(input)?;
    let (rest, precision) = precision(rest, "TIMESTAMP_LTZ", DEFAULT_TIMESTAMP_PRECISION)?;
    Ok((rest, SourceType::LocalZonedTimestamp(precision)))
}

/// Depth for the children of a composite starting at `input`.
fn nested(input: &str, depth: usize) -> Result<usize, nom::Err<Failure<'_>>> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(fail(input, Reason::NestingTooDeep));
    }
    Ok(depth + 1)
}

fn array_type(input: &str, depth: usize) -> PResult<'_, SourceType> {
    let (rest, _) = keyword("ARRAY")(input)?;
    let depth = nested(input, depth)?;
    let (rest, element) = angled(rest, |i| element(i, depth))?;
    Ok((rest, SourceType::Array(Box::new(element))))
}

fn multiset_type(input: &str, depth: usize) -> PResult<'_, SourceType> {
    let (rest, _) = keyword("MULTISET")(input)?;
    let depth = nested(input, depth)?;
    let (rest, element) = angled(rest, |i| element(i, depth))?;
    Ok((rest, SourceType::Multiset(Box::new(element))))
}

/// `MAP<K, V>`
fn map_type(input: &str, depth: usize) -> PResult<'_, SourceType> {
    let (rest, _) = keyword("MAP")(input)?;
    let depth = nested(input, depth)?;
    let (rest, (key, value)) = angled(rest, |i| {
        pair(
            |i| element(i, depth),
            preceded(
                tuple((ws, context("','", char(',')), ws)),
                |i| element(i, depth),
            ),
        )(i)
    })?;
    Ok((
        rest,
        SourceType::Map {
            key: Box::new(key),
            value: Box::new(value),
        },
    ))
}

/// `ROW<name T, ...>` or `ROW(name T, ...)`; an empty member list is allowed.
fn row_type(input: &str, depth: usize) -> PResult<'_, SourceType> {
    let (rest, _) = keyword("ROW")(input)?;
    let depth = nested(input, depth)?;
    let (rest, fields) = cut(preceded(
        ws,
        context(
            "'<' or '('",
            alt((
                preceded(
                    char('<'),
                    cut(terminated(
                        |i| field_list(i, depth),
                        context("',' or '>'", char('>')),
                    )),
                ),
                preceded(
                    char('('),
                    cut(terminated(
                        |i| field_list(i, depth),
                        context("',' or ')'", char(')')),
                    )),
                ),
            )),
        ),
    ))(rest)?;
    Ok((rest, SourceType::Row(fields)))
}

fn field_list(input: &str, depth: usize) -> PResult<'_, SourceFields> {
    let (rest, fields) =
        delimited(ws, separated_list0(comma, |i| field(i, depth)), ws)(input)?;

    let mut seen = HashSet::new();
    for field in &fields {
        if !seen.insert(field.name.as_str()) {
            return Err(fail(
                input,
                Reason::Invalid(TypeParseError::DuplicateField {
                    name: field.name.clone(),
                }),
            ));
        }
    }
    Ok((rest, fields.into()))
}

/// `name TYPE ['comment']`
fn field(input: &str, depth: usize) -> PResult<'_, SourceField> {
    let (rest, name) = context(
        "field name",
        alt((quoted_identifier, map(identifier, String::from))),
    )(input)?;
    let (rest, element) = cut(preceded(ws, |i| element(i, depth)))(rest)?;
    let (rest, description) = opt(preceded(ws, string_literal))(rest)?;
    Ok((
        rest,
        SourceField {
            name,
            element,
            description,
        },
    ))
}
