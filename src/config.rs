//! Runtime configuration
//!
//! Read once at startup from `INTAKE_*` environment variables. Unset
//! variables take their defaults; set but invalid ones are errors.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::lookup::DEFAULT_OPEN_FOOD_FACTS_URL;
use crate::matching::DEFAULT_SIMILARITY_THRESHOLD;
use crate::models::ExerciseCatalog;
use crate::nutrition::{DEFAULT_FALLBACK_KCAL_PER_MINUTE, DEFAULT_SERVING_GRAMS, DEFAULT_WEIGHT_KG};

pub const ENV_SIMILARITY_THRESHOLD: &str = "INTAKE_SIMILARITY_THRESHOLD";
pub const ENV_FALLBACK_KCAL_PER_MINUTE: &str = "INTAKE_FALLBACK_KCAL_PER_MINUTE";
pub const ENV_DEFAULT_WEIGHT_KG: &str = "INTAKE_DEFAULT_WEIGHT_KG";
pub const ENV_DEFAULT_SERVING_GRAMS: &str = "INTAKE_DEFAULT_SERVING_GRAMS";
pub const ENV_LOOKUP_TIMEOUT_SECS: &str = "INTAKE_LOOKUP_TIMEOUT_SECS";
pub const ENV_FOOD_API_URL: &str = "INTAKE_FOOD_API_URL";
pub const ENV_CATALOG_PATH: &str = "INTAKE_CATALOG_PATH";

/// Default bound on a single food database request
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}' ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Failed to read exercise catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid exercise catalog JSON: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Catalog entry '{key}' has invalid MET value {met_value}")]
    InvalidCatalogEntry { key: String, met_value: f64 },
}

/// Adjustable constants of the estimation engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineConfig {
    pub similarity_threshold: f64,
    pub fallback_kcal_per_minute: f64,
    pub default_weight_kg: f64,
    pub default_serving_grams: f64,
    pub lookup_timeout_secs: u64,
    pub food_api_url: String,
    pub catalog_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            fallback_kcal_per_minute: DEFAULT_FALLBACK_KCAL_PER_MINUTE,
            default_weight_kg: DEFAULT_WEIGHT_KG,
            default_serving_grams: DEFAULT_SERVING_GRAMS,
            lookup_timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
            food_api_url: DEFAULT_OPEN_FOOD_FACTS_URL.to_string(),
            catalog_path: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let similarity_threshold = match get(ENV_SIMILARITY_THRESHOLD) {
            Some(raw) => {
                let value = parse_f64(ENV_SIMILARITY_THRESHOLD, &raw)?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(invalid(ENV_SIMILARITY_THRESHOLD, &raw, "must be between 0 and 1"));
                }
                value
            }
            None => defaults.similarity_threshold,
        };

        let fallback_kcal_per_minute = positive_or(
            &get,
            ENV_FALLBACK_KCAL_PER_MINUTE,
            defaults.fallback_kcal_per_minute,
        )?;
        let default_weight_kg =
            positive_or(&get, ENV_DEFAULT_WEIGHT_KG, defaults.default_weight_kg)?;
        let default_serving_grams =
            positive_or(&get, ENV_DEFAULT_SERVING_GRAMS, defaults.default_serving_grams)?;

        let lookup_timeout_secs = match get(ENV_LOOKUP_TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) | Err(_) => {
                    return Err(invalid(ENV_LOOKUP_TIMEOUT_SECS, &raw, "expected a positive integer"))
                }
                Ok(secs) => secs,
            },
            None => defaults.lookup_timeout_secs,
        };

        let food_api_url = get(ENV_FOOD_API_URL)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.food_api_url);

        let catalog_path = get(ENV_CATALOG_PATH)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            similarity_threshold,
            fallback_kcal_per_minute,
            default_weight_kg,
            default_serving_grams,
            lookup_timeout_secs,
            food_api_url,
            catalog_path,
        })
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    /// The configured catalog file, or the built-in table
    pub fn load_catalog(&self) -> Result<ExerciseCatalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => load_catalog_file(path),
            None => Ok(ExerciseCatalog::builtin()),
        }
    }
}

/// Read an exercise catalog from a JSON file
pub fn load_catalog_file(path: &Path) -> Result<ExerciseCatalog, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    ExerciseCatalog::from_json(&json)
}

fn invalid(name: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        name,
        value: value.to_string(),
        reason,
    }
}

fn parse_f64(name: &'static str, raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(name, raw, "expected a number")),
    }
}

fn positive_or<F>(get: &F, name: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(raw) => {
            let value = parse_f64(name, &raw)?;
            if value <= 0.0 {
                return Err(invalid(name, &raw, "must be positive"));
            }
            Ok(value)
        }
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_source(source(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.similarity_threshold, 0.3);
        assert_eq!(config.fallback_kcal_per_minute, 5.0);
        assert_eq!(config.default_weight_kg, 70.0);
        assert_eq!(config.default_serving_grams, 100.0);
        assert_eq!(config.lookup_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let config = EngineConfig::from_source(source(&[
            (ENV_SIMILARITY_THRESHOLD, "0.5"),
            (ENV_FALLBACK_KCAL_PER_MINUTE, "4"),
            (ENV_DEFAULT_WEIGHT_KG, " 82.5 "),
            (ENV_LOOKUP_TIMEOUT_SECS, "10"),
            (ENV_CATALOG_PATH, "/etc/intake/catalog.json"),
        ]))
        .unwrap();
        assert_eq!(config.similarity_threshold, 0.5);
        assert_eq!(config.fallback_kcal_per_minute, 4.0);
        assert_eq!(config.default_weight_kg, 82.5);
        assert_eq!(config.lookup_timeout_secs, 10);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/intake/catalog.json"))
        );
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let result = EngineConfig::from_source(source(&[(ENV_SIMILARITY_THRESHOLD, "1.5")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let result = EngineConfig::from_source(source(&[(ENV_DEFAULT_WEIGHT_KG, "0")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        let result = EngineConfig::from_source(source(&[(ENV_DEFAULT_WEIGHT_KG, "heavy")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = EngineConfig::from_source(source(&[(ENV_LOOKUP_TIMEOUT_SECS, "0")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_builtin_catalog_without_path() {
        let catalog = EngineConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = EngineConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/intake/catalog.json")),
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.load_catalog(),
            Err(ConfigError::CatalogRead { .. })
        ));
    }

    #[test]
    fn test_load_catalog_file() {
        let path = std::env::temp_dir().join(format!("intake-catalog-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"key": "Rowing", "met_value": 7.0, "description": "Rowing machine"}]"#,
        )
        .unwrap();

        let catalog = load_catalog_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].key, "rowing");
    }
}
