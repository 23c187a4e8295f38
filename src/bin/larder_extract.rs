//! larder-extract: Extract per-ingredient median macro and key micro nutrients
//!
//! Reads an ingredient export (top-level `ingredients` array, each entry
//! carrying a `nutrients` measurement list) and emits one normalized row per
//! ingredient.
//!
//! Usage:
//!   # Default input path, JSONL to stdout
//!   larder-extract
//!
//!   # Explicit input, CSV to a file (parent directories are created)
//!   larder-extract --input export.json --format csv --output out/nutrients.csv
//!
//!   # Quick sanity check: first 5 rows, absent nutrients omitted
//!   larder-extract --input export.json --only-present --limit 5

// Use MiMalloc allocator for better performance
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use larder::{extract_to_writer, ExtractConfig, OutputFormat};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "larder-extract")]
#[command(about = "Extract per-ingredient median nutrients from an ingredient export", long_about = None)]
struct Args {
    /// Path to the exported ingredient JSON
    #[arg(long, default_value = "data/ingredients.json")]
    input: PathBuf,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "jsonl")]
    format: OutputFormat,

    /// Omit nutrient keys that are missing for a given ingredient
    #[arg(long)]
    only_present: bool,

    /// Process only the first N ingredients (useful for quick sanity checks)
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open input file: {}", args.input.display()))?;
    let document: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON from: {}", args.input.display()))?;

    let config = ExtractConfig {
        only_present: args.only_present,
        limit: args.limit,
    };

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            extract_to_writer(&document, &config, args.format, BufWriter::new(file))?;
        }
        None => {
            let stdout = std::io::stdout();
            extract_to_writer(&document, &config, args.format, stdout.lock())?;
        }
    }

    Ok(())
}
