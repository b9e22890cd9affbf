//! Data models
//!
//! Exercise catalog entries, food records, and nutrition values.

mod exercise;
mod food;
mod nutrition;

pub use exercise::{CatalogEntry, ExerciseCatalog, MatchResult};
pub use food::FoodRecord;
pub use nutrition::ScaledNutrients;
