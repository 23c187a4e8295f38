//! The canonical nutrient table and row metadata layout
//!
//! Output compatibility hinges on this table: each output key is bound to
//! one external nutrient number (USDA/FDC conventions, as used by the
//! upstream export) and the unit the export is expected to report it in.
//! The table is declaration-ordered; projectors and writers iterate it in
//! this order to keep row and column layout stable across runs.

/// One registry entry: output key, external nutrient id, expected unit.
///
/// The unit is bookkeeping only. Values are passed through as recorded even
/// when the measurement's own unit disagrees (see `extract_median`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutrientSpec {
    /// Human-readable output key, with the unit baked into the name
    pub key: &'static str,

    /// External nutrient identifier, matched against `nutrientId`
    pub nutrient_id: &'static str,

    /// Unit the export is expected to report this nutrient in
    pub unit: &'static str,
}

const fn spec(key: &'static str, nutrient_id: &'static str, unit: &'static str) -> NutrientSpec {
    NutrientSpec { key, nutrient_id, unit }
}

/// Metadata fields copied verbatim from each ingredient record, in the
/// fixed order they appear in every row.
pub const META_FIELDS: &[&str] = &[
    "canonicalId",
    "ingredientName",
    "ingredientSlug",
    "syntheticFdcId",
    "frequency",
    "fdcCount",
    "canonicalRank",
];

/// The full registry, macros first, then minerals, then vitamins.
pub const NUTRIENTS: &[NutrientSpec] = &[
    // Macros
    spec("energy_kcal", "1008", "kcal"),
    spec("protein_g", "1003", "g"),
    spec("fat_g", "1004", "g"),
    spec("carb_g", "1005", "g"),
    spec("fiber_g", "1079", "g"),
    spec("sugars_g", "2000", "g"),
    spec("water_g", "1051", "g"),
    spec("ash_g", "1007", "g"),
    // Minerals
    spec("calcium_mg", "1087", "mg"),
    spec("phosphorus_mg", "1091", "mg"),
    spec("potassium_mg", "1092", "mg"),
    spec("sodium_mg", "1093", "mg"),
    spec("magnesium_mg", "1090", "mg"),
    spec("iron_mg", "1089", "mg"),
    spec("zinc_mg", "1095", "mg"),
    spec("copper_mg", "1098", "mg"),
    spec("manganese_mg", "1101", "mg"),
    spec("iodine_ug", "1100", "µg"),
    spec("selenium_ug", "1103", "µg"),
    // Vitamins and related
    spec("vitamin_a_rae_ug", "1106", "µg"),
    spec("vitamin_d_ug", "1114", "µg"),
    spec("vitamin_e_mg", "1109", "mg"),
    spec("vitamin_k_ug", "1185", "µg"),
    spec("vitamin_c_mg", "1162", "mg"),
    spec("thiamin_b1_mg", "1165", "mg"),
    spec("riboflavin_b2_mg", "1166", "mg"),
    spec("niacin_b3_mg", "1167", "mg"),
    spec("pantothenic_b5_mg", "1170", "mg"),
    spec("vitamin_b6_mg", "1175", "mg"),
    spec("folate_total_ug", "1177", "µg"),
    spec("vitamin_b12_ug", "1178", "µg"),
    spec("choline_mg", "1180", "mg"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_output_keys_are_unique() {
        let keys: HashSet<&str> = NUTRIENTS.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), NUTRIENTS.len());
    }

    #[test]
    fn test_nutrient_ids_are_unique() {
        // Not required by the projector, but true of the shipped table
        let ids: HashSet<&str> = NUTRIENTS.iter().map(|s| s.nutrient_id).collect();
        assert_eq!(ids.len(), NUTRIENTS.len());
    }

    #[test]
    fn test_registry_shape() {
        assert_eq!(META_FIELDS.len(), 7);
        assert_eq!(NUTRIENTS.len(), 31);

        // Spot-check the macro block stays at the front in declared order
        assert_eq!(NUTRIENTS[0].key, "energy_kcal");
        assert_eq!(NUTRIENTS[0].nutrient_id, "1008");
        assert_eq!(NUTRIENTS[1].key, "protein_g");
        assert_eq!(NUTRIENTS[1].nutrient_id, "1003");
    }

    #[test]
    fn test_keys_carry_their_unit_suffix() {
        for spec in NUTRIENTS {
            let suffix = match spec.unit {
                "kcal" => "_kcal",
                "g" => "_g",
                "mg" => "_mg",
                "µg" => "_ug",
                other => panic!("unexpected unit: {}", other),
            };
            assert!(
                spec.key.ends_with(suffix),
                "{} does not end with {}",
                spec.key,
                suffix
            );
        }
    }
}
