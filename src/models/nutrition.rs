//! Shared nutrition data structure
//!
//! Used for per-basis food values and for scaled results.

use serde::{Deserialize, Serialize};

/// Nutritional values for some quantity of food
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaledNutrients {
    pub calories: f64, // kcal
    pub fat: f64,      // grams
    pub protein: f64,  // grams
    pub carbs: f64,    // grams
}

impl ScaledNutrients {
    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            fat: self.fat * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
        }
    }
}

impl std::ops::Mul<f64> for ScaledNutrients {
    type Output = ScaledNutrients;

    fn mul(self, multiplier: f64) -> ScaledNutrients {
        self.scale(multiplier)
    }
}
