//! Build metadata embedded by `build.rs`
//!
//! Builds made without the script (e.g. `rustc` directly or a doc build)
//! report build 0 and an "unknown" timestamp.

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build counter; 0 when the variable is absent or not a plain decimal
pub const BUILD_NUMBER: u64 = decimal_or_zero(option_env!("INTAKE_BUILD_NUMBER"));

/// UTC compile time, `%Y-%m-%dT%H:%M:%SZ`
pub const BUILD_TIMESTAMP: &str = match option_env!("INTAKE_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

const fn decimal_or_zero(raw: Option<&str>) -> u64 {
    let bytes = match raw {
        Some(s) if !s.is_empty() => s.as_bytes(),
        _ => return 0,
    };
    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            return 0;
        }
        value = value * 10 + (digit - b'0') as u64;
        i += 1;
    }
    value
}

/// Snapshot reported by the status tool
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: VERSION,
            description: env!("CARGO_PKG_DESCRIPTION"),
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }

    /// Single-line identification, e.g. `intake 1.0.0 (build 12, 2026-01-01T00:00:00Z)`
    pub fn summary(&self) -> String {
        format!(
            "{} {} (build {}, {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Write the startup banner to stderr; stdout carries the MCP stream
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("-- {} --", info.summary());
    eprintln!("   {}", info.description);
}
