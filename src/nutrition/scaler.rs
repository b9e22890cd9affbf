//! Food nutrient scaling
//!
//! Scales a food record's per-basis values to a requested quantity:
//! each nutrient × (requested_grams / serving_basis).

use serde::Serialize;

use crate::models::{FoodRecord, ScaledNutrients};

use super::serving::serving_basis;

/// Nutrients for a requested quantity of a specific food
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledFood {
    pub name: String,
    pub brand: Option<String>,
    pub quantity_grams: f64,
    pub serving_basis_grams: f64,
    pub ratio: f64,
    pub nutrients: ScaledNutrients,
}

/// Result of scaling an optional lookup result
#[derive(Debug, Clone, PartialEq)]
pub enum FoodOutcome {
    Found(ScaledFood),
    NotFound,
}

impl FoodOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, FoodOutcome::Found(_))
    }
}

/// Scale a record to `requested_grams`, which must already be validated positive
pub fn scale(record: &FoodRecord, requested_grams: f64, default_basis_grams: f64) -> ScaledFood {
    let basis = serving_basis(record.serving_size_grams, default_basis_grams);
    let ratio = requested_grams / basis;

    ScaledFood {
        name: record.name.clone(),
        brand: record.brand.clone(),
        quantity_grams: requested_grams,
        serving_basis_grams: basis,
        ratio,
        nutrients: record.base_nutrients() * ratio,
    }
}

/// Scale a lookup result; an absent record is reported as not found
pub fn scale_food_nutrients(
    record: Option<&FoodRecord>,
    requested_grams: f64,
    default_basis_grams: f64,
) -> FoodOutcome {
    match record {
        Some(r) => FoodOutcome::Found(scale(r, requested_grams, default_basis_grams)),
        None => FoodOutcome::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::serving::DEFAULT_SERVING_GRAMS;

    fn apple() -> FoodRecord {
        FoodRecord {
            calories_per_100g: Some(52.0),
            fat_per_100g: Some(0.2),
            protein_per_100g: Some(0.3),
            carbs_per_100g: Some(14.0),
            ..FoodRecord::new("Apple")
        }
    }

    #[test]
    fn test_per_100g_basis() {
        let scaled = scale(&apple(), 150.0, DEFAULT_SERVING_GRAMS);
        assert!((scaled.ratio - 1.5).abs() < 0.001);
        assert!((scaled.nutrients.calories - 78.0).abs() < 0.001);
        assert!((scaled.nutrients.fat - 0.3).abs() < 0.001);
        assert!((scaled.nutrients.protein - 0.45).abs() < 0.001);
        assert!((scaled.nutrients.carbs - 21.0).abs() < 0.001);
        assert_eq!(scaled.serving_basis_grams, 100.0);
    }

    #[test]
    fn test_explicit_serving_basis() {
        let record = FoodRecord {
            serving_size_grams: Some(30.0),
            calories_per_100g: Some(120.0),
            ..FoodRecord::new("Granola bar")
        };
        let scaled = scale(&record, 60.0, DEFAULT_SERVING_GRAMS);
        assert!((scaled.ratio - 2.0).abs() < 0.001);
        assert!((scaled.nutrients.calories - 240.0).abs() < 0.001);
    }

    #[test]
    fn test_missing_nutrients_scale_to_zero() {
        let record = FoodRecord {
            calories_per_100g: Some(200.0),
            ..FoodRecord::new("Mystery")
        };
        let scaled = scale(&record, 50.0, DEFAULT_SERVING_GRAMS);
        assert!((scaled.nutrients.calories - 100.0).abs() < 0.001);
        assert_eq!(scaled.nutrients.fat, 0.0);
        assert_eq!(scaled.nutrients.protein, 0.0);
        assert_eq!(scaled.nutrients.carbs, 0.0);
    }

    #[test]
    fn test_invalid_serving_size_uses_default() {
        let record = FoodRecord {
            serving_size_grams: Some(0.0),
            calories_per_100g: Some(100.0),
            ..FoodRecord::new("Zero serving")
        };
        let scaled = scale(&record, 100.0, DEFAULT_SERVING_GRAMS);
        assert!((scaled.nutrients.calories - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_not_found() {
        assert_eq!(
            scale_food_nutrients(None, 150.0, DEFAULT_SERVING_GRAMS),
            FoodOutcome::NotFound
        );
        assert!(scale_food_nutrients(Some(&apple()), 150.0, DEFAULT_SERVING_GRAMS).is_found());
    }
}
