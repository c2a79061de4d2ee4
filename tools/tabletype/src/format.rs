use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use tablebridge::{
    arrow::{columns_to_arrow_schema, host_type_to_arrow},
    core::{ElementType, SourceField, SourceFields, format_source_fields},
    host::{translate, translate_schema},
};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Query-engine type signatures
    Host,
    /// Arrow data types used for pages
    Arrow,
    /// Source types as an indented tree
    Tree,
}

impl OutputFormat {
    pub fn render_type(&self, element: &ElementType) -> Result<String> {
        let text = match self {
            OutputFormat::Host => translate(&element.data_type)?.to_string(),
            OutputFormat::Arrow => host_type_to_arrow(&translate(&element.data_type)?)?.to_string(),
            OutputFormat::Tree => {
                let field = SourceField {
                    name: "type".to_string(),
                    element: element.clone(),
                    description: None,
                };
                format_source_fields([field])?.trim_end().to_string()
            }
        };
        Ok(text)
    }

    pub fn render_schema(&self, fields: &SourceFields) -> Result<String> {
        let mut out = String::new();
        match self {
            OutputFormat::Host => {
                for column in translate_schema(fields)? {
                    write!(out, "{} {}", column.name, column.host_type)?;
                    if !column.nullable {
                        out.push_str(" NOT NULL");
                    }
                    if let Some(comment) = &column.comment {
                        write!(out, " COMMENT '{}'", comment.replace('\'', "''"))?;
                    }
                    out.push('\n');
                }
            }
            OutputFormat::Arrow => {
                let schema = columns_to_arrow_schema(&translate_schema(fields)?)?;
                for field in schema.fields() {
                    write!(out, "{}: {}", field.name(), field.data_type())?;
                    if !field.is_nullable() {
                        out.push_str(" not null");
                    }
                    out.push('\n');
                }
            }
            OutputFormat::Tree => out = format_source_fields(fields)?,
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use tablebridge::core::{parse_schema, parse_type};

    use super::*;

    #[test]
    fn host_schema_lists_columns_with_constraints() {
        let fields = parse_schema("id BIGINT NOT NULL 'it''s the key'\nts TIMESTAMP(9)").unwrap();
        let text = OutputFormat::Host.render_schema(&fields).unwrap();
        assert_eq!(
            text,
            "id bigint NOT NULL COMMENT 'it''s the key'\nts timestamp(3)\n"
        );
    }

    #[test]
    fn arrow_schema_marks_required_columns() {
        let fields = parse_schema("id INT NOT NULL\nname VARCHAR(3)").unwrap();
        let text = OutputFormat::Arrow.render_schema(&fields).unwrap();
        assert_eq!(text, "id: Int32 not null\nname: Utf8\n");
    }

    #[test]
    fn single_type_renders_per_format() {
        let element = parse_type("MULTISET<CHAR(70000)>").unwrap();
        assert_eq!(
            OutputFormat::Host.render_type(&element).unwrap(),
            "map(char(65536), integer)"
        );
        assert_eq!(
            OutputFormat::Tree.render_type(&element).unwrap(),
            "type:\n    type: multiset\n    nullable: true\n    element: { type: CHAR(70000), nullable: true }"
        );
    }

    #[test]
    fn unsupported_type_is_an_error() {
        let element = parse_type("VARIANT").unwrap();
        assert!(OutputFormat::Host.render_type(&element).is_err());
    }
}
