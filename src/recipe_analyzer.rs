use rayon::prelude::*;
use std::collections::HashSet;

use crate::normalizer::normalize_ingredient_name;
use crate::pantry_index::PantryIndex;
use crate::recipe_compatibility::{calculate_recipe_compatibility, RecipeCompatibility};
use crate::recipe_loader::Recipe;

/// Scores every recipe against the pantry and ranks them best-first.
///
/// Each compatibility calculation is pure and index-read-only, so the map
/// runs in parallel; the order-preserving collect plus a stable sort keeps
/// equal-score recipes in their input order. No deduplication, no
/// filtering: callers cut on score or confidence themselves.
pub fn analyze_recipes(index: &PantryIndex, recipes: &[Recipe]) -> Vec<RecipeCompatibility> {
    let mut results: Vec<RecipeCompatibility> = recipes
        .par_iter()
        .map(|recipe| calculate_recipe_compatibility(index, recipe))
        .collect();
    results.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));
    results
}

/// Missing-ingredient lines across a set of analyzed recipes, deduplicated
/// by normalized name, first-seen order. Feeds shopping-list suggestions.
pub fn shopping_suggestions(results: &[RecipeCompatibility]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut suggestions = Vec::new();
    for result in results {
        for missing in &result.missing_ingredients {
            let key = normalize_ingredient_name(&missing.recipe_text);
            if key.is_empty() {
                continue;
            }
            if seen.insert(key) {
                suggestions.push(missing.recipe_text.clone());
            }
        }
    }
    suggestions
}
