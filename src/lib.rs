//! Intake Library
//!
//! Name resolution and quantity scaling for food and exercise calorie estimates.

pub mod build_info;
pub mod config;
pub mod lookup;
pub mod matching;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
