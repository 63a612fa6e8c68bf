use anyhow::{Context, Result};
use recipe_compat::cli::parse_args;
use recipe_compat::grocery_loader::load_grocery_inventory;
use recipe_compat::pantry_index::PantryIndex;
use recipe_compat::recipe_analyzer::{analyze_recipes, shopping_suggestions};
use recipe_compat::recipe_compatibility::{RecipeCompatibility, DEFAULT_CONFIDENCE_THRESHOLD};
use recipe_compat::recipe_loader::parse_recipes_json;
use std::path::Path;
use tokio::fs;

// Environment override for the strict-availability cutoff, usually set via .env
const MIN_CONFIDENCE_ENV_VAR: &str = "RECIPE_COMPAT_MIN_CONFIDENCE";

fn resolve_min_confidence(cli_value: Option<u8>) -> u8 {
    if let Some(value) = cli_value {
        return value;
    }
    match std::env::var(MIN_CONFIDENCE_ENV_VAR) {
        Ok(raw) => raw.trim().parse::<u8>().unwrap_or_else(|_| {
            eprintln!(
                "Warning: {} is not a number in 0-100 ('{}'), using default {}.",
                MIN_CONFIDENCE_ENV_VAR, raw, DEFAULT_CONFIDENCE_THRESHOLD
            );
            DEFAULT_CONFIDENCE_THRESHOLD
        }),
        Err(_) => DEFAULT_CONFIDENCE_THRESHOLD,
    }
}

fn print_report(results: &[RecipeCompatibility], min_confidence: u8) {
    if results.is_empty() {
        println!("\nNo recipes to report.");
        return;
    }

    println!("\nRecipe compatibility (best first):");
    for (rank, result) in results.iter().enumerate() {
        println!(
            "\n{}. {} — {}% compatible ({} of {} ingredients, match confidence {}%)",
            rank + 1,
            result.recipe_title,
            result.compatibility_score,
            result.available_ingredients.len(),
            result.total_ingredients,
            result.confidence_score,
        );

        for matched in &result.available_ingredients {
            let ingredient = matched.matched_ingredient.as_deref().unwrap_or("?");
            let category = matched.matched_category.as_deref().unwrap_or("?");
            let below = if matched.confidence < min_confidence {
                " [below confidence threshold]"
            } else {
                ""
            };
            println!(
                "   have: {} -> {} ({}, {} match, {}%){}",
                matched.recipe_text, ingredient, category, matched.match_type, matched.confidence, below
            );
        }
        for missing in &result.missing_ingredients {
            println!("   need: {}", missing.recipe_text);
        }
    }

    let suggestions = shopping_suggestions(results);
    if !suggestions.is_empty() {
        println!("\nShopping suggestions ({} items):", suggestions.len());
        for suggestion in &suggestions {
            println!(" - {}", suggestion);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // .env may carry RECIPE_COMPAT_MIN_CONFIDENCE

    let cli_args = parse_args();
    let min_confidence = resolve_min_confidence(cli_args.min_confidence);

    println!("Loading grocery inventory from {}...", cli_args.groceries_file);
    let inventory = load_grocery_inventory(Path::new(&cli_args.groceries_file))
        .with_context(|| format!("Failed to load grocery inventory from '{}'", cli_args.groceries_file))?;
    println!(
        " > Inventory loaded: {} categories, {} ingredients.",
        inventory.category_count(),
        inventory.ingredient_count()
    );
    if inventory.ingredient_count() == 0 {
        println!(" > Inventory is empty; every recipe will score 0.");
    }

    let index = PantryIndex::new(&inventory);

    println!("Loading recipes from {}...", cli_args.recipes_file);
    let recipes_content = fs::read_to_string(&cli_args.recipes_file)
        .await
        .with_context(|| format!("Failed to read recipe file '{}'", cli_args.recipes_file))?;
    let recipes = parse_recipes_json(&recipes_content)
        .with_context(|| format!("Failed to parse recipes from '{}'", cli_args.recipes_file))?;
    println!(" > {} recipes loaded.", recipes.len());

    println!("Analyzing recipes against the pantry...");
    let mut results = analyze_recipes(&index, &recipes);

    if let Some(min_score) = cli_args.min_score {
        let before = results.len();
        results.retain(|r| r.compatibility_score >= min_score);
        println!(
            " > {} of {} recipes at or above {}% compatibility.",
            results.len(),
            before,
            min_score
        );
    }

    if cli_args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_report(&results, min_confidence);
        let cookable = results
            .iter()
            .filter(|r| r.compatibility_score == 100 && r.total_ingredients > 0)
            .count();
        println!(
            "\nDone. {} of {} reported recipes can be made entirely from the pantry.",
            cookable,
            results.len()
        );
    }

    Ok(())
}
