//! maketables - regenerate `crates/core/src/jis/tables.rs`
//!
//! cargo run -p aozoraconv-maketables -- -o crates/core/src/jis/tables.rs

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use aozoraconv_maketables::{DEFAULT_SEPARATION, Tables, render};
use clap::{ArgAction, Parser};

/// Generate the JIS X 0213 lookup tables from the x0213.org code table.
#[derive(Parser, Debug)]
#[command(name = "maketables")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the code table
    #[arg(short = 'i', long, default_value = "data/jisx0213-2004-std.txt")]
    input: PathBuf,

    /// Path of the generated module, or stdout when omitted
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Minimum run of unmapped scalars that starts a new encode table
    #[arg(long, default_value_t = DEFAULT_SEPARATION)]
    separation: u32,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let tables = Tables::from_source(&source)
        .with_context(|| format!("failed to build tables from {}", args.input.display()))?;
    let generated = render(&tables, args.separation).context("failed to render tables")?;

    match &args.output {
        Some(path) => {
            fs::write(path, generated)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(generated.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
