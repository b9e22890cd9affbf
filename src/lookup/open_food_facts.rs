//! Open Food Facts search client
//!
//! Queries the public Open Food Facts search endpoint and maps the first
//! usable product to a [`FoodRecord`]. Failures are logged and become `None`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::FoodLookup;
use crate::models::FoodRecord;
use crate::nutrition::parse_serving_size;

pub const DEFAULT_OPEN_FOOD_FACTS_URL: &str = "https://world.openfoodfacts.org/cgi/search.pl";

const SEARCH_FIELDS: &str = "product_name,nutriments,serving_size,brands";

const KEY_ENERGY_KCAL: &str = "energy-kcal_100g";
const KEY_FAT: &str = "fat_100g";
const KEY_PROTEINS: &str = "proteins_100g";
const KEY_CARBOHYDRATES: &str = "carbohydrates_100g";

/// Lookup error types; logged by the client, never returned to callers
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Food database returned status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Debug, Default, Deserialize)]
struct Product {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    brands: Option<String>,
    #[serde(default)]
    serving_size: Option<Value>,
    #[serde(default)]
    nutriments: Option<Map<String, Value>>,
}

impl Product {
    fn nutriment(&self, key: &str) -> Option<f64> {
        self.nutriments.as_ref().and_then(|n| n.get(key)).and_then(number)
    }

    fn has_energy(&self) -> bool {
        self.nutriment(KEY_ENERGY_KCAL).map_or(false, |kcal| kcal != 0.0)
    }
}

/// Accept JSON numbers and numeric strings
fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Map a search response to a record: the first product with an energy
/// value, otherwise the first product at all
pub(crate) fn record_from_response(query: &str, response: SearchResponse) -> Option<FoodRecord> {
    let mut products = response.products;
    if products.is_empty() {
        return None;
    }

    let index = products.iter().position(Product::has_energy).unwrap_or(0);
    let product = products.swap_remove(index);

    let serving_size_grams = match &product.serving_size {
        Some(Value::String(s)) => parse_serving_size(s),
        Some(other) => number(other),
        None => None,
    };

    Some(FoodRecord {
        name: non_empty(&product.product_name).unwrap_or_else(|| query.to_string()),
        brand: non_empty(&product.brands),
        calories_per_100g: product.nutriment(KEY_ENERGY_KCAL),
        serving_size_grams,
        fat_per_100g: product.nutriment(KEY_FAT),
        protein_per_100g: product.nutriment(KEY_PROTEINS),
        carbs_per_100g: product.nutriment(KEY_CARBOHYDRATES),
    })
}

/// Open Food Facts client with a bounded request time
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    /// Use a preconfigured client; its timeout bounds every lookup
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("search_terms", query),
                ("json", "1"),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        Ok(response.json::<SearchResponse>().await?)
    }
}

#[async_trait]
impl FoodLookup for OpenFoodFactsClient {
    async fn lookup(&self, query: &str) -> Option<FoodRecord> {
        match self.search(query).await {
            Ok(response) => {
                let record = record_from_response(query, response);
                if record.is_none() {
                    tracing::debug!("No Open Food Facts products for '{}'", query);
                }
                record
            }
            Err(e) => {
                tracing::warn!("Open Food Facts lookup for '{}' failed: {}", query, e);
                None
            }
        }
    }
}
