use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tablebridge::core::parse_schema;

use crate::format::OutputFormat;

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to the schema file
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Host)]
    format: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let text = fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;
        let fields = parse_schema(&text)
            .with_context(|| format!("failed to parse schema in {}", self.input.display()))?;
        tracing::debug!(path = %self.input.display(), columns = fields.len(), "parsed schema");

        let rendered = self.format.render_schema(&fields)?;
        match self.output {
            Some(path) => fs::write(path, rendered)?,
            None => print!("{rendered}"),
        }
        Ok(())
    }
}
