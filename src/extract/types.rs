use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One flat output row - seven metadata fields followed by nutrient values.
///
/// The underlying map preserves insertion order (serde_json's
/// `preserve_order` feature), so the key order a projector writes is the
/// key order every format emits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pub data: Map<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Row { data: Map::new() }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

/// Configuration for the extraction pass
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    /// Omit nutrient keys whose value is absent instead of emitting null
    pub only_present: bool,

    /// Produce at most this many rows (None = all ingredients)
    pub limit: Option<usize>,
}

/// Output encoding for the extracted rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One compact JSON object per line
    Jsonl,
    /// A single pretty-printed JSON array
    Json,
    /// Comma-separated values with a header row
    Csv,
}
