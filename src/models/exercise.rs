//! Exercise catalog model
//!
//! The fixed set of known activities and their MET coefficients, plus the
//! result of resolving a free-text activity name against it.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::matching::normalize;

/// A known activity with its MET coefficient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Normalized activity name, the string names are matched against
    pub key: String,
    /// Metabolic equivalent: kcal per kg of body weight per hour
    pub met_value: f64,
    pub description: String,
}

impl CatalogEntry {
    pub fn new(key: &str, met_value: f64, description: &str) -> Self {
        Self {
            key: normalize(key),
            met_value,
            description: description.to_string(),
        }
    }
}

/// Immutable, ordered exercise catalog
///
/// Enumeration order is significant: when two entries score the same
/// similarity against a query, the one listed first wins.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExerciseCatalog {
    entries: Vec<CatalogEntry>,
}

impl ExerciseCatalog {
    /// Build a catalog from entries, normalizing keys and rejecting bad MET values
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, ConfigError> {
        let mut normalized = Vec::with_capacity(entries.len());
        for entry in entries {
            if !entry.met_value.is_finite() || entry.met_value <= 0.0 {
                return Err(ConfigError::InvalidCatalogEntry {
                    key: entry.key,
                    met_value: entry.met_value,
                });
            }
            normalized.push(CatalogEntry {
                key: normalize(&entry.key),
                ..entry
            });
        }
        Ok(Self { entries: normalized })
    }

    /// Parse a JSON array of `{key, met_value, description}` objects
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// The built-in activity table.
    ///
    /// Values follow the Harvard Health "calories burned in 30 minutes" table.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new("walking", 3.5, "Walking at moderate pace (3.5 mph)"),
                CatalogEntry::new("running", 8.0, "Running at 6 mph (10 min/mile)"),
                CatalogEntry::new("swimming", 6.0, "Swimming leisurely"),
                CatalogEntry::new("dance", 5.0, "General dancing"),
                CatalogEntry::new("sex", 1.8, "Sexual activity (moderate effort)"),
                CatalogEntry::new("cycling", 7.5, "Cycling at 12-14 mph"),
                CatalogEntry::new("yoga", 3.0, "Hatha yoga"),
                CatalogEntry::new("weight training", 4.0, "General weight lifting"),
                CatalogEntry::new("basketball", 8.0, "Playing basketball"),
                CatalogEntry::new("football", 8.0, "Playing football/soccer"),
            ],
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExerciseCatalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Outcome of resolving an activity name against the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub found: bool,
    pub entry: Option<CatalogEntry>,
    /// Best similarity seen, in [0, 1]; 0 for an empty catalog
    pub score: f64,
}

impl MatchResult {
    pub fn not_found(score: f64) -> Self {
        Self {
            found: false,
            entry: None,
            score,
        }
    }

    pub fn matched(entry: CatalogEntry, score: f64) -> Self {
        Self {
            found: true,
            entry: Some(entry),
            score,
        }
    }

    /// MET value of the matched entry, if any
    pub fn met_value(&self) -> Option<f64> {
        self.entry.as_ref().map(|e| e.met_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = ExerciseCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.entries()[0].key, "walking");
        assert_eq!(catalog.entries()[9].key, "football");
    }

    #[test]
    fn test_entry_keys_are_normalized() {
        let entry = CatalogEntry::new("Café Dancing", 5.0, "Dancing");
        assert_eq!(entry.key, "cafe dancing");
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"key": "Rowing", "met_value": 7.0, "description": "Rowing machine"},
            {"key": "hiking", "met_value": 6.0, "description": "Hiking"}
        ]"#;
        let catalog = ExerciseCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].key, "rowing");
    }

    #[test]
    fn test_from_json_rejects_non_positive_met() {
        let json = r#"[{"key": "resting", "met_value": 0.0, "description": "Lying still"}]"#;
        let result = ExerciseCatalog::from_json(json);
        assert!(matches!(result, Err(ConfigError::InvalidCatalogEntry { .. })));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            ExerciseCatalog::from_json("{not json"),
            Err(ConfigError::CatalogParse(_))
        ));
    }

    #[test]
    fn test_empty_catalog_allowed() {
        let catalog = ExerciseCatalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_match_result_met_value() {
        let entry = CatalogEntry::new("running", 8.0, "Running");
        assert_eq!(MatchResult::matched(entry, 1.0).met_value(), Some(8.0));
        assert_eq!(MatchResult::not_found(0.1).met_value(), None);
    }
}
