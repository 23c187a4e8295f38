//! Nutrient extraction - project raw ingredient exports into flat rows
//!
//! This module turns the loosely-structured ingredient export (per-ingredient
//! measurement lists keyed by external nutrient ids) into one normalized row
//! per ingredient, with a fixed set of named nutrient columns, and writes the
//! result as JSONL, a JSON array, or CSV.

pub mod types;
pub mod registry;
pub mod projector;
pub mod stream;
pub mod writer;

pub use types::{ExtractConfig, OutputFormat, Row};
pub use registry::{NutrientSpec, META_FIELDS, NUTRIENTS};
pub use projector::RowProjector;
pub use stream::RowStream;
pub use writer::{ArrayWriter, CsvWriter, JsonlWriter};
