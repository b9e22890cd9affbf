//! Name matching module
//!
//! Normalization, edit-distance similarity, and catalog resolution.

pub mod normalize;
pub mod resolver;
pub mod similarity;

pub use normalize::normalize;
pub use resolver::{resolve_exercise, DEFAULT_SIMILARITY_THRESHOLD};
pub use similarity::{edit_distance, similarity};
