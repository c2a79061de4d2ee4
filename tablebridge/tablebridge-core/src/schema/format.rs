use std::fmt::{Error, Result, Write as _};

use super::{ElementType, SourceField, SourceType};

/// Format source fields in a readable style:
/// primitive fields are rendered in one line, compound fields are pretty-printed.
/// Nested fields follow the same rule.
pub fn format_source_fields(
    fields: impl AsRef<[SourceField]>,
) -> std::result::Result<String, Error> {
    let fields = fields.as_ref();
    let mut out = String::new();

    for field in fields.iter() {
        format_field(field, 0, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &SourceField, indent: usize, out: &mut String) -> Result {
    format_labeled_type(
        &field.name,
        &field.element,
        field.description.as_deref(),
        indent,
        out,
    )
}

fn format_data_type(
    element: &ElementType,
    description: Option<&str>,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", element.data_type.type_name())?;
    writeln!(out, "{pad}nullable: {}", element.nullable)?;
    if let Some(description) = description {
        writeln!(out, "{pad}comment: {description:?}")?;
    }

    match &element.data_type {
        SourceType::Row(fields) => {
            writeln!(out, "{pad}fields:")?;
            for child in fields.iter() {
                format_field(child, indent + 4, out)?;
            }
        }
        SourceType::Array(elem) | SourceType::Multiset(elem) => {
            format_labeled_type("element", elem, None, indent, out)?;
        }
        SourceType::Map { key, value } => {
            format_labeled_type("key", key, None, indent, out)?;
            format_labeled_type("value", value, None, indent, out)?;
        }
        other => unreachable!("{other:?} is not a compound type"),
    }

    Ok(())
}

fn format_labeled_type(
    label: &str,
    element: &ElementType,
    description: Option<&str>,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    if element.data_type.is_primitive() {
        write!(
            out,
            "{pad}{label}: {{ type: {}, nullable: {}",
            element.data_type, element.nullable
        )?;
        if let Some(description) = description {
            write!(out, ", comment: {description:?}")?;
        }
        writeln!(out, " }}")?;
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_data_type(element, description, indent + 4, out)?;
    }
    Ok(())
}
