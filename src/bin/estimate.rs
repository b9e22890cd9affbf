//! Command-line calorie estimates
//! Usage:
//!   cargo run --bin estimate -- exercise <name> <minutes> [weight_kg]
//!   cargo run --bin estimate -- food <name> <grams>

use intake::config::EngineConfig;
use intake::lookup::OpenFoodFactsClient;
use intake::tools::exercise::estimate_exercise;
use intake::tools::food::{estimate_food, FoodEstimate};

const USAGE: &str = "Usage:\n  estimate exercise <name> <minutes> [weight_kg]\n  estimate food <name> <grams>";

/// Parse a quantity argument; unparsable values become NaN and are rejected downstream
fn quantity(arg: Option<&String>) -> f64 {
    arg.and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(f64::NAN)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("intake=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = EngineConfig::from_env()?;

    match args.get(1).map(|s| s.as_str()) {
        Some("exercise") => {
            let name = args.get(2).map(|s| s.as_str()).unwrap_or("");
            let minutes = quantity(args.get(3));
            let weight_kg = args.get(4).map(|s| quantity(Some(s)));

            let catalog = config.load_catalog()?;
            let estimate = match estimate_exercise(&config, &catalog, name, minutes, weight_kg) {
                Ok(e) => e,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(2);
                }
            };

            if estimate.found {
                println!("Calories burned: {:.2} kcal", estimate.calories);
                println!(
                    "Activity: {} ({})",
                    estimate.description,
                    estimate.exercise_name.unwrap_or_default()
                );
            } else {
                println!("Calories burned: ~{:.2} kcal", estimate.calories);
                println!("Note: Used generic estimate for \"{}\"", name.trim());
            }
        }
        Some("food") => {
            let name = args.get(2).map(|s| s.as_str()).unwrap_or("");
            let grams = quantity(args.get(3));

            let lookup = OpenFoodFactsClient::new(&config.food_api_url, config.lookup_timeout())?;
            let estimate = match estimate_food(&lookup, &config, name, grams).await {
                Ok(e) => e,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(2);
                }
            };

            match estimate {
                FoodEstimate::Found(food) => {
                    println!("Food: {}", food.name);
                    println!("Calories: {:.2} kcal", food.calories);
                    println!("Fat: {:.2}g | Protein: {:.2}g", food.fat, food.protein);
                    println!("Carbs: {:.2}g", food.carbs);
                }
                FoodEstimate::NotFound(nf) => println!("{}", nf.message),
            }
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}
