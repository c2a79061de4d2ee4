use anyhow::{Context, Result};
use clap::Args;
use tablebridge::core::parse_type;

use crate::format::OutputFormat;

#[derive(Args)]
pub struct TranslateArgs {
    /// Type strings, e.g. 'MAP<STRING, ARRAY<INT>>'
    #[arg(required = true)]
    types: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Host)]
    format: OutputFormat,
}

impl TranslateArgs {
    pub fn run(self) -> Result<()> {
        for text in &self.types {
            let element =
                parse_type(text).with_context(|| format!("failed to parse type '{text}'"))?;
            tracing::debug!(source = %element, "translating type");
            let rendered = self
                .format
                .render_type(&element)
                .with_context(|| format!("failed to translate '{text}'"))?;
            println!("{rendered}");
        }
        Ok(())
    }
}
