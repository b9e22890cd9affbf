//! Food record model
//!
//! The normalized shape a food database lookup hands to the scaler.
//! Any numeric field may be missing; missing values count as zero.

use serde::{Deserialize, Serialize};

use super::ScaledNutrients;

/// Food composition as retrieved from an external database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub calories_per_100g: Option<f64>,
    /// Grams the nutrient values are anchored to; `None` means per 100 g
    #[serde(default)]
    pub serving_size_grams: Option<f64>,
    #[serde(default)]
    pub fat_per_100g: Option<f64>,
    #[serde(default)]
    pub protein_per_100g: Option<f64>,
    #[serde(default)]
    pub carbs_per_100g: Option<f64>,
}

impl FoodRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Nutrient values per serving basis, with missing or non-finite fields as 0
    pub fn base_nutrients(&self) -> ScaledNutrients {
        ScaledNutrients {
            calories: or_zero(self.calories_per_100g),
            fat: or_zero(self.fat_per_100g),
            protein: or_zero(self.protein_per_100g),
            carbs: or_zero(self.carbs_per_100g),
        }
    }
}

fn or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}
