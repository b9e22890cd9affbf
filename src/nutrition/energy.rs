//! Exercise energy expenditure
//!
//! MET formula: calories = MET × weight_kg × duration_hours

use crate::models::MatchResult;

/// Body weight assumed when the caller supplies none
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Flat estimate for activities not found in the catalog
pub const DEFAULT_FALLBACK_KCAL_PER_MINUTE: f64 = 5.0;

/// Calories burned for a validated, positive duration and weight.
///
/// Unmatched activities use `minutes × fallback_kcal_per_minute` and
/// ignore `met_value` and `weight_kg` entirely.
pub fn energy_burned(
    minutes: f64,
    weight_kg: f64,
    met_value: f64,
    matched: bool,
    fallback_kcal_per_minute: f64,
) -> f64 {
    if !matched {
        return minutes * fallback_kcal_per_minute;
    }

    let hours = minutes / 60.0;
    met_value * weight_kg * hours
}

/// Convenience wrapper over [`energy_burned`] for a resolver result
pub fn energy_for_match(
    result: &MatchResult,
    minutes: f64,
    weight_kg: f64,
    fallback_kcal_per_minute: f64,
) -> f64 {
    match result.met_value() {
        Some(met) if result.found => {
            energy_burned(minutes, weight_kg, met, true, fallback_kcal_per_minute)
        }
        _ => energy_burned(minutes, weight_kg, 0.0, false, fallback_kcal_per_minute),
    }
}
