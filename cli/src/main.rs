//! Datagen CLI
//!
//! Writes a requested number of synthetic bytes to a file or stdout.

mod commands;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use commands::{generate, Request};
use datagen::{GeneratorRegistry, RandomSource, StreamCopier};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "datagen")]
#[command(about = "Output synthetic data", long_about = None)]
#[command(version)]
struct Cli {
    /// Size in bytes. KB and MB multiply by 1024 and 1024*1024, 0x selects hex. Maximum is 1GB.
    #[arg(value_name = "SIZE", value_parser = datagen::parse_size, required_unless_present = "list")]
    size: Option<u64>,

    /// Content of the output data (see PATTERNS). 0 is the default.
    #[arg(short = 'd', long = "data", value_name = "KEY")]
    data: Option<String>,

    /// Output file path. Directories are created if necessary. Defaults to stdout.
    #[arg(short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Working buffer size, same syntax as SIZE
    #[arg(long, value_name = "SIZE", value_parser = datagen::parse_size, env = "DATAGEN_CHUNK_SIZE", default_value = "64KB")]
    chunk_size: u64,

    /// Print the available patterns and exit
    #[arg(long)]
    list: bool,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() {
    if let Err(e) = run() {
        eprintln!("[Error] {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Logs go to stderr; stdout may carry the generated data.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = GeneratorRegistry::standard(&RandomSource::from_os_rng());

    let matches = Cli::command()
        .after_help(format!("PATTERNS:\n{}", registry.help_text()))
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if cli.list {
        print!("{}", registry.help_text());
        return Ok(());
    }

    let size_bytes = cli.size.ok_or_else(|| {
        anyhow!("Insufficient arguments. You must pass the SIZE argument. Use -h to see help.")
    })?;
    let copier = StreamCopier::new(usize::try_from(cli.chunk_size)?)?;

    let request = Request {
        pattern_key: cli.data,
        destination: cli.output,
        size_bytes,
    };
    generate(&request, &registry, copier)
}
