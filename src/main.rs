//! Intake
//!
//! An MCP server for food and exercise calorie estimation.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use intake::build_info;
use intake::config::EngineConfig;
use intake::lookup::OpenFoodFactsClient;
use intake::mcp::IntakeService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("intake=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = EngineConfig::from_env()?;
    let catalog = config.load_catalog()?;
    match &config.catalog_path {
        Some(path) => eprintln!("Exercise catalog: {} ({} entries)", path.display(), catalog.len()),
        None => eprintln!("Exercise catalog: built-in ({} entries)", catalog.len()),
    }
    if catalog.is_empty() {
        tracing::warn!("Exercise catalog is empty; every activity will use the generic estimate");
    }

    eprintln!("Food database: {}", config.food_api_url);
    let lookup = OpenFoodFactsClient::new(&config.food_api_url, config.lookup_timeout())?;

    let service = IntakeService::new(config, catalog, Arc::new(lookup));

    eprintln!("Starting MCP server on stdio...");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
