//! Exercise name resolution
//!
//! Picks the single best catalog entry for a free-text activity name.

use crate::models::{CatalogEntry, ExerciseCatalog, MatchResult};

use super::{normalize, similarity};

/// Minimum similarity for a name to count as a match
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;

/// Resolve an activity name against the catalog.
///
/// Every entry is scored once, in catalog order. Only a strictly higher
/// score replaces the current best, so ties go to the earliest entry. An
/// entry must score above zero to be considered at all. A best score below
/// `threshold` (or an empty catalog) is reported as not found, with the
/// best score still attached.
pub fn resolve_exercise(raw_name: &str, catalog: &ExerciseCatalog, threshold: f64) -> MatchResult {
    let name = normalize(raw_name);

    let mut best: Option<&CatalogEntry> = None;
    let mut best_score = 0.0;

    for entry in catalog {
        let score = similarity(&name, &entry.key);
        if score > best_score {
            best_score = score;
            best = Some(entry);
        }
    }

    match best {
        Some(entry) if best_score >= threshold => MatchResult::matched(entry.clone(), best_score),
        _ => MatchResult::not_found(best_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_only() -> ExerciseCatalog {
        ExerciseCatalog::from_entries(vec![CatalogEntry::new("running", 8.0, "Running")]).unwrap()
    }

    #[test]
    fn test_typo_matches() {
        let result = resolve_exercise("Runing", &running_only(), DEFAULT_SIMILARITY_THRESHOLD);
        assert!(result.found);
        assert_eq!(result.entry.as_ref().unwrap().key, "running");
        assert!((result.score - 0.857).abs() < 0.001);
    }

    #[test]
    fn test_exact_match_case_and_accents() {
        let catalog = ExerciseCatalog::builtin();
        let result = resolve_exercise("YÓGA", &catalog, DEFAULT_SIMILARITY_THRESHOLD);
        assert!(result.found);
        assert_eq!(result.entry.unwrap().key, "yoga");

        let result = resolve_exercise("Cycling", &catalog, DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.met_value(), Some(7.5));
    }

    #[test]
    fn test_unrelated_name_not_found() {
        let result = resolve_exercise("xyzabc123", &running_only(), DEFAULT_SIMILARITY_THRESHOLD);
        assert!(!result.found);
        assert!(result.entry.is_none());
        assert!(result.score < DEFAULT_SIMILARITY_THRESHOLD);
    }

    #[test]
    fn test_empty_catalog() {
        let result = resolve_exercise("running", &ExerciseCatalog::default(), 0.3);
        assert_eq!(result, MatchResult::not_found(0.0));
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        // "bat" is one substitution from both keys
        let catalog = ExerciseCatalog::from_entries(vec![
            CatalogEntry::new("cat", 2.0, "First"),
            CatalogEntry::new("hat", 3.0, "Second"),
        ])
        .unwrap();

        for _ in 0..5 {
            let result = resolve_exercise("bat", &catalog, 0.3);
            assert!(result.found);
            assert_eq!(result.entry.unwrap().description, "First");
        }
    }

    #[test]
    fn test_threshold_is_configurable() {
        let catalog = running_only();
        // "run" vs "running": 3/7 ~= 0.43
        assert!(resolve_exercise("run", &catalog, 0.3).found);
        assert!(!resolve_exercise("run", &catalog, 0.5).found);
        assert!(resolve_exercise("running", &catalog, 1.0).found);
    }

    #[test]
    fn test_below_threshold_keeps_score() {
        let result = resolve_exercise("run", &running_only(), 0.9);
        assert!(!result.found);
        assert!((result.score - 3.0 / 7.0).abs() < 0.001);
    }

    #[test]
    fn test_picks_best_of_builtin() {
        let catalog = ExerciseCatalog::builtin();
        let result = resolve_exercise("swiming", &catalog, 0.3);
        assert_eq!(result.entry.unwrap().key, "swimming");

        let result = resolve_exercise("weight-training", &catalog, 0.3);
        assert_eq!(result.entry.unwrap().key, "weight training");
    }
}
