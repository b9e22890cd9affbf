//! Intake Tools module
//!
//! Boundary validation and response shaping for the MCP tools.
//! Inputs are checked here so the calculation core only sees valid values.

pub mod exercise;
pub mod food;
pub mod status;
pub mod text;

use thiserror::Error;

/// Rejected tool input
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Please enter a valid {0}")]
    EmptyName(&'static str),

    #[error("Invalid {field}: {value} (must be a positive number)")]
    NotPositive { field: &'static str, value: f64 },
}

/// Trimmed, non-empty name
pub(crate) fn require_name<'a>(field: &'static str, name: &'a str) -> Result<&'a str, InputError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyName(field));
    }
    Ok(trimmed)
}

/// Finite, strictly positive quantity
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(InputError::NotPositive { field, value });
    }
    Ok(value)
}
