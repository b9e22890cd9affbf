//! Intake Status Tool
//!
//! Provides runtime status information about the Intake service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::EngineConfig;

/// Usage instructions for AI assistants
pub const INSTRUCTIONS: &str = r#"
# Intake Instructions

Intake estimates calories for foods and exercises from free-text names.

## Food

**Tool:** `estimate_food`
- `name`: what was eaten, e.g. "apple" or "greek yogurt"
- `grams`: quantity eaten in grams (must be positive)

Nutrition comes from Open Food Facts. Values are per 100 g unless the
product reports a serving size, in which case they are scaled by
`grams / serving size`. Missing nutrients count as 0.

If `found` is false, ask the user for a different or more specific name.

## Exercise

**Tool:** `estimate_exercise`
- `name`: the activity, e.g. "running", "swiming" (typos are tolerated)
- `minutes`: duration (must be positive)
- `weight_kg`: optional body weight; defaults to the configured value (70 kg)

Matched activities use the MET formula:
`calories = MET × weight_kg × minutes / 60`.

Unmatched activities (`found: false`) use a flat 5 kcal per minute
regardless of weight. Present these as rough estimates ("~150 kcal").

## Inspection

- `list_exercises`: the known activities and their MET values
- `match_exercise`: which activity a name resolves to, with its similarity score
- `normalize_text` / `text_similarity`: the comparison primitives

## Notes

- Names are compared case- and accent-insensitively
- A name must reach the similarity threshold (default 0.3) to match
- When two activities score the same, the one listed first wins
"#;

/// Runtime status of the Intake service
#[derive(Debug, Clone, Serialize)]
pub struct IntakeStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Engine configuration in effect
    pub config: EngineConfig,
    pub catalog_size: usize,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, config: &EngineConfig, catalog_size: usize) -> IntakeStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        IntakeStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            config: config.clone(),
            catalog_size,
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_config() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status(&EngineConfig::default(), 10);
        assert_eq!(status.catalog_size, 10);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.config.similarity_threshold, 0.3);
    }
}
