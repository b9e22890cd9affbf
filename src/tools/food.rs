//! Food MCP Tools
//!
//! Nutrient estimates for a food name and quantity in grams.

use serde::Serialize;

use super::{require_name, require_positive, InputError};
use crate::config::EngineConfig;
use crate::lookup::FoodLookup;
use crate::nutrition::{scale_food_nutrients, FoodOutcome};

pub const FOOD_NOT_FOUND: &str = "Food not found. Try a different name.";

/// Response for estimate_food
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FoodEstimate {
    Found(FoodEstimateDetail),
    NotFound(FoodNotFound),
}

impl FoodEstimate {
    pub fn is_found(&self) -> bool {
        matches!(self, FoodEstimate::Found(_))
    }
}

#[derive(Debug, Serialize)]
pub struct FoodEstimateDetail {
    pub found: bool,
    pub name: String,
    pub brand: Option<String>,
    pub quantity_grams: f64,
    pub serving_basis_grams: f64,
    pub calories: f64,
    pub fat: f64,
    pub protein: f64,
    pub carbs: f64,
}

#[derive(Debug, Serialize)]
pub struct FoodNotFound {
    pub found: bool,
    pub query: String,
    pub message: String,
}

/// Look a food up and scale its nutrients to `quantity_grams`
pub async fn estimate_food<L>(
    lookup: &L,
    config: &EngineConfig,
    query: &str,
    quantity_grams: f64,
) -> Result<FoodEstimate, InputError>
where
    L: FoodLookup + ?Sized,
{
    let query = require_name("food", query)?;
    let quantity_grams = require_positive("quantity", quantity_grams)?;

    let record = lookup.lookup(query).await;

    match scale_food_nutrients(record.as_ref(), quantity_grams, config.default_serving_grams) {
        FoodOutcome::Found(scaled) => {
            tracing::info!(
                "Estimated {:.1} kcal for {}g of '{}'",
                scaled.nutrients.calories,
                quantity_grams,
                scaled.name
            );
            Ok(FoodEstimate::Found(FoodEstimateDetail {
                found: true,
                name: scaled.name,
                brand: scaled.brand,
                quantity_grams: scaled.quantity_grams,
                serving_basis_grams: scaled.serving_basis_grams,
                calories: scaled.nutrients.calories,
                fat: scaled.nutrients.fat,
                protein: scaled.nutrients.protein,
                carbs: scaled.nutrients.carbs,
            }))
        }
        FoodOutcome::NotFound => {
            tracing::info!("No food record for '{}'", query);
            Ok(FoodEstimate::NotFound(FoodNotFound {
                found: false,
                query: query.to_string(),
                message: FOOD_NOT_FOUND.to_string(),
            }))
        }
    }
}
