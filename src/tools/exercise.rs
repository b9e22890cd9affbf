//! Exercise MCP Tools
//!
//! Calorie estimates for free-text activities, plus catalog inspection.

use serde::Serialize;

use super::{require_name, require_positive, InputError};
use crate::config::EngineConfig;
use crate::matching::resolve_exercise;
use crate::models::{CatalogEntry, ExerciseCatalog, MatchResult};
use crate::nutrition::energy_for_match;

/// Description reported for activities that did not match the catalog
pub const GENERIC_ACTIVITY: &str = "General physical activity";

// ============================================================================
// Response Structs
// ============================================================================

/// Response for estimate_exercise
#[derive(Debug, Serialize)]
pub struct ExerciseEstimate {
    pub found: bool,
    pub calories: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub met_value: Option<f64>,
    pub score: f64,
    pub minutes: f64,
    pub weight_kg: f64,
}

/// Response for match_exercise
#[derive(Debug, Serialize)]
pub struct MatchExerciseResponse {
    pub query: String,
    pub normalized_query: String,
    pub threshold: f64,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Response for list_exercises
#[derive(Debug, Serialize)]
pub struct ListExercisesResponse {
    pub exercises: Vec<CatalogEntry>,
    pub total: usize,
}

// ============================================================================
// Exercise Tool Functions
// ============================================================================

/// Estimate calories burned for an activity name and duration
pub fn estimate_exercise(
    config: &EngineConfig,
    catalog: &ExerciseCatalog,
    name: &str,
    minutes: f64,
    weight_kg: Option<f64>,
) -> Result<ExerciseEstimate, InputError> {
    let name = require_name("exercise", name)?;
    let minutes = require_positive("duration", minutes)?;
    let weight_kg = match weight_kg {
        Some(w) => require_positive("weight", w)?,
        None => config.default_weight_kg,
    };

    let result = resolve_exercise(name, catalog, config.similarity_threshold);
    let calories = energy_for_match(&result, minutes, weight_kg, config.fallback_kcal_per_minute);

    match &result.entry {
        Some(entry) if result.found => {
            tracing::debug!(
                "Matched '{}' to '{}' (score {:.3})",
                name,
                entry.key,
                result.score
            );
            Ok(ExerciseEstimate {
                found: true,
                calories,
                description: entry.description.clone(),
                exercise_name: Some(entry.key.clone()),
                met_value: Some(entry.met_value),
                score: result.score,
                minutes,
                weight_kg,
            })
        }
        _ => {
            tracing::info!(
                "No catalog match for '{}' (best score {:.3}), using generic estimate",
                name,
                result.score
            );
            Ok(ExerciseEstimate {
                found: false,
                calories,
                description: GENERIC_ACTIVITY.to_string(),
                exercise_name: None,
                met_value: None,
                score: result.score,
                minutes,
                weight_kg,
            })
        }
    }
}

/// Resolve an activity name without computing calories
pub fn match_exercise(
    config: &EngineConfig,
    catalog: &ExerciseCatalog,
    name: &str,
) -> Result<MatchExerciseResponse, InputError> {
    let name = require_name("exercise", name)?;
    Ok(MatchExerciseResponse {
        query: name.to_string(),
        normalized_query: crate::matching::normalize(name),
        threshold: config.similarity_threshold,
        result: resolve_exercise(name, catalog, config.similarity_threshold),
    })
}

/// List every catalog entry in match order
pub fn list_exercises(catalog: &ExerciseCatalog) -> ListExercisesResponse {
    ListExercisesResponse {
        exercises: catalog.entries().to_vec(),
        total: catalog.len(),
    }
}
