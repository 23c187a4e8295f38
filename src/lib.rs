//! # Larder - Ingredient Nutrient Extraction
//!
//! A library for normalizing heterogeneous ingredient exports: each input
//! record carries a variable-length list of nutrient measurements keyed by
//! external numeric identifiers, and the pipeline projects it into one flat
//! row with a fixed, named set of macro- and micronutrient values.
//!
//! ## Quick Start
//!
//! ```rust
//! use larder::{extract_to_writer, ExtractConfig, OutputFormat};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let document = json!({
//!     "ingredients": [{
//!         "canonicalId": "c1",
//!         "ingredientName": "Chicken Breast",
//!         "nutrients": [
//!             {"nutrientId": "1003", "median": 31.0},
//!             {"nutrientId": "1008", "median": 165}
//!         ]
//!     }]
//! });
//!
//! let mut output = Vec::new();
//! let config = ExtractConfig { only_present: true, ..Default::default() };
//! extract_to_writer(&document, &config, OutputFormat::Jsonl, &mut output)?;
//!
//! // One line per ingredient: protein_g and energy_kcal, absent keys omitted
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use serde_json::Value;
use std::io::Write;

pub mod extract;

// Re-export commonly used types for convenience
pub use extract::{
    ArrayWriter, CsvWriter, ExtractConfig, JsonlWriter, OutputFormat, Row, RowProjector,
    RowStream, META_FIELDS, NUTRIENTS,
};

/// Main entry point: project every ingredient in `document` and write the
/// rows to `writer` in the requested format.
pub fn extract_to_writer<W: Write>(
    document: &Value,
    config: &ExtractConfig,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    let rows = RowStream::new(document, config);

    match format {
        OutputFormat::Jsonl => {
            let mut writer = JsonlWriter::new(writer);
            writer.write_rows(rows)?;
            writer.flush()
        }
        OutputFormat::Json => {
            let mut writer = ArrayWriter::new(writer);
            writer.write_rows(rows)?;
            writer.flush()
        }
        OutputFormat::Csv => {
            let mut writer = CsvWriter::new(writer);
            writer.write_rows(rows)?;
            writer.flush()
        }
    }
}
