//! Food database lookup
//!
//! The single asynchronous seam of the system. Implementations own their
//! timeout and report every failure as `None`, so callers only ever see
//! "a record" or "nothing".

pub mod open_food_facts;

use async_trait::async_trait;

use crate::models::FoodRecord;

pub use open_food_facts::{LookupError, OpenFoodFactsClient, DEFAULT_OPEN_FOOD_FACTS_URL};

/// A source of food composition records
#[async_trait]
pub trait FoodLookup: Send + Sync {
    /// Best record for a free-text query, or `None` if absent or unavailable
    async fn lookup(&self, query: &str) -> Option<FoodRecord>;
}
