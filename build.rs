//! Build script for Intake
//!
//! Bumps the counter in `build_number.txt` and exposes it, together with the
//! UTC build time, as `INTAKE_BUILD_NUMBER` / `INTAKE_BUILD_TIMESTAMP`.

use std::fs;
use std::path::Path;

const COUNTER_FILE: &str = "build_number.txt";

/// Last recorded build; a missing or corrupt counter restarts at 0
fn previous_build(path: &Path) -> u64 {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn main() {
    println!("cargo:rerun-if-changed=src");

    let counter = Path::new(COUNTER_FILE);
    let build = previous_build(counter) + 1;

    // A read-only checkout still builds; the number just stops advancing
    if let Err(e) = fs::write(counter, build.to_string()) {
        println!("cargo:warning=could not update {}: {}", COUNTER_FILE, e);
    }

    let compiled_at = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

    println!("cargo:rustc-env=INTAKE_BUILD_NUMBER={}", build);
    println!("cargo:rustc-env=INTAKE_BUILD_TIMESTAMP={}", compiled_at);
    println!("cargo:warning=intake build {} ({})", build, compiled_at);
}
