//! Intake MCP Server Implementation
//!
//! Implements the MCP server with all Intake tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::lookup::FoodLookup;
use crate::models::ExerciseCatalog;
use crate::tools::exercise;
use crate::tools::food;
use crate::tools::status::StatusTracker;
use crate::tools::text;
use crate::tools::InputError;

/// Intake MCP Service
///
/// Configuration and catalog are fixed at construction and shared read-only.
#[derive(Clone)]
pub struct IntakeService {
    status_tracker: Arc<StatusTracker>,
    config: Arc<EngineConfig>,
    catalog: Arc<ExerciseCatalog>,
    lookup: Arc<dyn FoodLookup>,
    tool_router: ToolRouter<IntakeService>,
}

impl IntakeService {
    pub fn new(config: EngineConfig, catalog: ExerciseCatalog, lookup: Arc<dyn FoodLookup>) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            lookup,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateExerciseParams {
    /// Activity name, e.g. "running" or "weight training" (typos tolerated)
    pub name: String,
    /// Duration in minutes
    pub minutes: f64,
    /// Body weight in kg (defaults to the configured weight, normally 70)
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MatchExerciseParams {
    /// Activity name to resolve
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateFoodParams {
    /// Food name to search for
    pub name: String,
    /// Quantity eaten, in grams
    pub grams: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NormalizeTextParams {
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TextSimilarityParams {
    pub a: String,
    pub b: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn invalid_params(e: InputError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl IntakeService {
    // --- Status ---

    #[tool(description = "Get the current status of the Intake service including build info, engine configuration, and process information")]
    fn intake_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status(&self.config, self.catalog.len());
        to_json(&status)
    }

    #[tool(description = "Get instructions for estimating food and exercise calories. Call this when unsure how to use the Intake tools.")]
    fn intake_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(INSTRUCTIONS)]))
    }

    // --- Exercise ---

    #[tool(description = "Estimate calories burned for an activity and duration. Matches the activity name approximately; unknown activities get a generic per-minute estimate (found=false).")]
    fn estimate_exercise(&self, Parameters(p): Parameters<EstimateExerciseParams>) -> Result<CallToolResult, McpError> {
        let result = exercise::estimate_exercise(&self.config, &self.catalog, &p.name, p.minutes, p.weight_kg)
            .map_err(invalid_params)?;
        to_json(&result)
    }

    #[tool(description = "Show which known activity a name resolves to, with its similarity score and the match threshold")]
    fn match_exercise(&self, Parameters(p): Parameters<MatchExerciseParams>) -> Result<CallToolResult, McpError> {
        let result = exercise::match_exercise(&self.config, &self.catalog, &p.name)
            .map_err(invalid_params)?;
        to_json(&result)
    }

    #[tool(description = "List all known activities with their MET values")]
    fn list_exercises(&self) -> Result<CallToolResult, McpError> {
        to_json(&exercise::list_exercises(&self.catalog))
    }

    // --- Food ---

    #[tool(description = "Estimate calories, fat, protein, and carbs for a quantity (grams) of a food, using Open Food Facts data. Returns found=false if no product matches.")]
    async fn estimate_food(&self, Parameters(p): Parameters<EstimateFoodParams>) -> Result<CallToolResult, McpError> {
        let result = food::estimate_food(self.lookup.as_ref(), &self.config, &p.name, p.grams)
            .await
            .map_err(invalid_params)?;
        to_json(&result)
    }

    // --- Text ---

    #[tool(description = "Normalize a name the way Intake compares names (accents removed, lower-cased)")]
    fn normalize_text(&self, Parameters(p): Parameters<NormalizeTextParams>) -> Result<CallToolResult, McpError> {
        to_json(&text::normalize_text(&p.text))
    }

    #[tool(description = "Compute the normalized edit-distance similarity (0-1) between two names")]
    fn text_similarity(&self, Parameters(p): Parameters<TextSimilarityParams>) -> Result<CallToolResult, McpError> {
        to_json(&text::text_similarity(&p.a, &p.b))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for IntakeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "intake".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Intake".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Intake - food and exercise calorie estimates from free-text names. \
                 Call intake_instructions first if unsure. \
                 Food: estimate_food (name + grams). \
                 Exercise: estimate_exercise (name + minutes, optional weight_kg), match_exercise, list_exercises. \
                 Text: normalize_text, text_similarity. \
                 Status: intake_status."
                    .into(),
            ),
        }
    }
}
