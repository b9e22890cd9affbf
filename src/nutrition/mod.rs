//! Nutrition calculation module
//!
//! Exercise energy expenditure and food nutrient scaling.

pub mod energy;
pub mod scaler;
pub mod serving;

pub use energy::{
    energy_burned, energy_for_match, DEFAULT_FALLBACK_KCAL_PER_MINUTE, DEFAULT_WEIGHT_KG,
};
pub use scaler::{scale, scale_food_nutrients, FoodOutcome, ScaledFood};
pub use serving::{parse_serving_size, serving_basis, DEFAULT_SERVING_GRAMS};
