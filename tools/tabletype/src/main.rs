mod commands;
mod format;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{schema::SchemaArgs, translate::TranslateArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tabletype",
    about = "Translate table-format types into query-engine types"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate one or more type strings
    Translate(TranslateArgs),
    /// Translate a schema file with one `name TYPE ['comment']` column per line
    Schema(SchemaArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Translate(args) => args.run(),
        Commands::Schema(args) => args.run(),
    }
}
