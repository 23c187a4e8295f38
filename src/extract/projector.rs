//! Row projection - one ingredient record in, one flat row out
//!
//! The projector walks the static nutrient registry rather than the
//! ingredient's own measurement list, so every row carries the same key
//! universe regardless of how sparse or noisy the input record is.

use crate::extract::registry::{META_FIELDS, NUTRIENTS};
use crate::extract::types::Row;
use serde_json::Value;
use std::collections::HashMap;

/// Index one ingredient's measurements by their external nutrient id.
///
/// Ids may arrive as JSON strings or numbers; both are normalized to the
/// decimal string form. Measurements with a missing or null `nutrientId`
/// are skipped, and duplicate ids resolve last-write-wins. This never
/// fails, whatever shape the entries have.
pub fn nutrient_index(nutrients: &[Value]) -> HashMap<String, &Value> {
    let mut index = HashMap::new();
    for measurement in nutrients {
        let id = match measurement.get("nutrientId") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => continue,
        };
        index.insert(id, measurement);
    }
    index
}

/// Pull the representative value out of a measurement, if there is one.
///
/// The expected unit is informational only: when the measurement reports a
/// different unit the value is still returned as-is, unconverted. That
/// trades correctness-under-unit-drift for determinism, and it is the
/// documented contract with downstream consumers.
pub fn extract_median(measurement: Option<&Value>, _expected_unit: &str) -> Option<Value> {
    let measurement = measurement?;
    match measurement.get("median") {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.clone()),
    }
}

/// Projects raw ingredient records into flat output rows
pub struct RowProjector {
    only_present: bool,
}

impl RowProjector {
    pub fn new(only_present: bool) -> Self {
        RowProjector { only_present }
    }

    /// Project one ingredient record into a row.
    ///
    /// Metadata fields are copied verbatim (missing fields become null so
    /// the seven-key layout is invariant). Nutrient keys follow in registry
    /// declaration order; an absent value is emitted as null, or omitted
    /// entirely when `only_present` is set.
    pub fn project(&self, ingredient: &Value) -> Row {
        let empty = Vec::new();
        let nutrients = ingredient
            .get("nutrients")
            .and_then(Value::as_array)
            .unwrap_or(&empty);
        let index = nutrient_index(nutrients);

        let mut row = Row::new();
        for &field in META_FIELDS {
            let value = ingredient.get(field).cloned().unwrap_or(Value::Null);
            row.data.insert(field.to_string(), value);
        }

        for spec in NUTRIENTS {
            match extract_median(index.get(spec.nutrient_id).copied(), spec.unit) {
                Some(value) => {
                    row.data.insert(spec.key.to_string(), value);
                }
                None => {
                    if !self.only_present {
                        row.data.insert(spec.key.to_string(), Value::Null);
                    }
                }
            }
        }

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_index_skips_missing_ids() {
        let nutrients = vec![
            json!({"nutrientId": "1003", "median": 31.0}),
            json!({"median": 5.0}),
            json!({"nutrientId": null, "median": 7.0}),
        ];

        let index = nutrient_index(&nutrients);
        assert_eq!(index.len(), 1);
        assert!(index.contains_key("1003"));
    }

    #[test]
    fn test_index_normalizes_numeric_ids() {
        let nutrients = vec![json!({"nutrientId": 1008, "median": 165})];

        let index = nutrient_index(&nutrients);
        assert!(index.contains_key("1008"));
    }

    #[test]
    fn test_index_last_write_wins() {
        let nutrients = vec![
            json!({"nutrientId": "1003", "median": 1.0}),
            json!({"nutrientId": "1003", "median": 2.0}),
        ];

        let index = nutrient_index(&nutrients);
        assert_eq!(index["1003"].get("median").unwrap(), 2.0);
    }

    #[test]
    fn test_extract_median_absent_record() {
        assert_eq!(extract_median(None, "g"), None);
    }

    #[test]
    fn test_extract_median_null_or_missing_value() {
        let no_median = json!({"nutrientId": "1003", "unit": "g"});
        assert_eq!(extract_median(Some(&no_median), "g"), None);

        let null_median = json!({"nutrientId": "1003", "median": null});
        assert_eq!(extract_median(Some(&null_median), "g"), None);
    }

    #[test]
    fn test_extract_median_ignores_unit_mismatch() {
        // Recorded in mg, expected in g: the value must come back untouched,
        // never rescaled and never rejected.
        let measurement = json!({"nutrientId": "1003", "unit": "mg", "median": 31.0});
        assert_eq!(extract_median(Some(&measurement), "g"), Some(json!(31.0)));
    }

    #[test]
    fn test_project_copies_metadata_verbatim() {
        let ingredient = json!({
            "canonicalId": "c1",
            "ingredientName": "Chicken Breast",
            "ingredientSlug": "chicken-breast",
            "syntheticFdcId": 900001,
            "frequency": 42,
            "fdcCount": 3,
            "canonicalRank": 1,
            "nutrients": []
        });

        let row = RowProjector::new(false).project(&ingredient);
        assert_eq!(row.get("canonicalId").unwrap(), "c1");
        assert_eq!(row.get("ingredientName").unwrap(), "Chicken Breast");
        assert_eq!(row.get("syntheticFdcId").unwrap(), 900001);
        assert_eq!(row.get("canonicalRank").unwrap(), 1);
    }

    #[test]
    fn test_project_missing_metadata_becomes_null() {
        let ingredient = json!({"canonicalId": "c1", "nutrients": []});

        let row = RowProjector::new(false).project(&ingredient);
        for &field in META_FIELDS {
            assert!(row.contains_key(field), "missing metadata key {}", field);
        }
        assert_eq!(row.get("frequency").unwrap(), &Value::Null);
    }

    #[test]
    fn test_project_default_emits_every_nutrient_key() {
        let ingredient = json!({
            "canonicalId": "c1",
            "ingredientName": "Chicken Breast",
            "nutrients": [
                {"nutrientId": "1003", "median": 31.0},
                {"nutrientId": "1008", "median": 165}
            ]
        });

        let row = RowProjector::new(false).project(&ingredient);
        assert_eq!(row.get("protein_g").unwrap(), 31.0);
        assert_eq!(row.get("energy_kcal").unwrap(), 165);
        assert_eq!(row.get("fat_g").unwrap(), &Value::Null);
        assert_eq!(row.data.len(), META_FIELDS.len() + NUTRIENTS.len());
    }

    #[test]
    fn test_project_only_present_omits_absent_keys() {
        let ingredient = json!({
            "canonicalId": "c1",
            "nutrients": [
                {"nutrientId": "1003", "median": 31.0},
                {"nutrientId": "1008", "median": 165}
            ]
        });

        let row = RowProjector::new(true).project(&ingredient);
        assert_eq!(row.get("protein_g").unwrap(), 31.0);
        assert_eq!(row.get("energy_kcal").unwrap(), 165);
        assert!(!row.contains_key("fat_g"));
        assert_eq!(row.data.len(), META_FIELDS.len() + 2);
    }

    #[test]
    fn test_project_handles_missing_nutrients_array() {
        let ingredient = json!({"canonicalId": "c1"});

        let row = RowProjector::new(false).project(&ingredient);
        assert_eq!(row.get("protein_g").unwrap(), &Value::Null);
    }

    #[test]
    fn test_row_key_order_is_meta_then_registry() {
        let ingredient = json!({
            "canonicalId": "c1",
            "nutrients": [{"nutrientId": "1003", "median": 31.0}]
        });

        let row = RowProjector::new(false).project(&ingredient);
        let keys: Vec<&str> = row.data.keys().map(String::as_str).collect();
        assert_eq!(&keys[..META_FIELDS.len()], META_FIELDS);
        assert_eq!(keys[META_FIELDS.len()], "energy_kcal");
        assert_eq!(keys[META_FIELDS.len() + 1], "protein_g");
    }
}
