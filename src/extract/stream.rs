//! Lazy row production over a parsed ingredient document
//!
//! Rows come out in document order, one per ingredient, and are only
//! projected on demand: with a `limit` set, ingredients past the cap are
//! never touched, which keeps the line-delimited path cheap on large
//! exports.

use crate::extract::projector::RowProjector;
use crate::extract::types::{ExtractConfig, Row};
use serde_json::Value;

/// A single-pass iterator of projected rows over a document's
/// `ingredients` array.
///
/// A document with no `ingredients` key (or a non-array one) yields an
/// empty stream rather than an error.
pub struct RowStream<'a> {
    ingredients: std::slice::Iter<'a, Value>,
    projector: RowProjector,
    remaining: Option<usize>,
}

impl<'a> RowStream<'a> {
    pub fn new(document: &'a Value, config: &ExtractConfig) -> Self {
        let ingredients = document
            .get("ingredients")
            .and_then(Value::as_array)
            .map(|arr| arr.iter())
            .unwrap_or_default();

        RowStream {
            ingredients,
            projector: RowProjector::new(config.only_present),
            remaining: config.limit,
        }
    }
}

impl Iterator for RowStream<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.remaining == Some(0) {
            return None;
        }
        let ingredient = self.ingredients.next()?;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(self.projector.project(ingredient))
    }
}
