use serde::{Deserialize, Serialize};

use crate::pantry_index::PantryIndex;
use crate::pantry_matcher::{match_ingredient, IngredientMatch, MatchType};
use crate::recipe_loader::Recipe;

/// Recommended cutoff when a caller wants a stricter notion of "available"
/// than the calculator's (which counts every non-`none` match).
pub const DEFAULT_CONFIDENCE_THRESHOLD: u8 = 50;

/// How well one recipe fits the current pantry. Computed on demand from an
/// index snapshot; never persisted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecipeCompatibility {
    pub recipe_id: String,
    pub recipe_title: String,
    pub total_ingredients: usize,
    /// Matches with type != `none`, in recipe order.
    pub available_ingredients: Vec<IngredientMatch>,
    /// Matches with type == `none`, in recipe order.
    pub missing_ingredients: Vec<IngredientMatch>,
    /// Percentage of ingredient lines resolvable against the pantry, 0-100.
    pub compatibility_score: u8,
    /// Mean confidence over the available matches, 0-100.
    pub confidence_score: u8,
}

impl RecipeCompatibility {
    /// Available matches at or above a caller-chosen confidence. The
    /// calculator itself never filters; low-confidence fuzzy matches stay
    /// in `available_ingredients` and stricter callers cut here.
    pub fn available_with_confidence(&self, min_confidence: u8) -> Vec<&IngredientMatch> {
        self.available_ingredients
            .iter()
            .filter(|m| m.confidence >= min_confidence)
            .collect()
    }
}

/// Runs the matcher over every ingredient line of a recipe and aggregates
/// the results. Pure function over its inputs; a zero-ingredient recipe
/// scores 0 rather than dividing by zero.
pub fn calculate_recipe_compatibility(index: &PantryIndex, recipe: &Recipe) -> RecipeCompatibility {
    let mut available_ingredients = Vec::new();
    let mut missing_ingredients = Vec::new();

    for line in &recipe.ingredients {
        let matched = match_ingredient(index, line);
        if matched.match_type == MatchType::None {
            missing_ingredients.push(matched);
        } else {
            available_ingredients.push(matched);
        }
    }

    let total_ingredients = recipe.ingredients.len();
    let compatibility_score = if total_ingredients == 0 {
        0
    } else {
        (100.0 * available_ingredients.len() as f64 / total_ingredients as f64).round() as u8
    };
    let confidence_score = if available_ingredients.is_empty() {
        0
    } else {
        let sum: f64 = available_ingredients.iter().map(|m| f64::from(m.confidence)).sum();
        (sum / available_ingredients.len() as f64).round() as u8
    };

    RecipeCompatibility {
        recipe_id: recipe.identifier().to_string(),
        recipe_title: recipe.title.clone(),
        total_ingredients,
        available_ingredients,
        missing_ingredients,
        compatibility_score,
        confidence_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grocery_loader::{GroceryCategory, GroceryInventory};

    fn produce_index() -> PantryIndex {
        PantryIndex::new(&GroceryInventory {
            categories: vec![GroceryCategory {
                name: "produce".to_string(),
                ingredients: vec!["onion".to_string(), "garlic".to_string()],
            }],
        })
    }

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("{id} title"),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    #[test]
    fn test_partition_counts_add_up_to_total() {
        let index = produce_index();
        let result = calculate_recipe_compatibility(
            &index,
            &recipe("soup", &["2 cups diced onions", "1 clove garlic, minced", "3 tbsp olive oil"]),
        );
        assert_eq!(
            result.available_ingredients.len() + result.missing_ingredients.len(),
            result.total_ingredients
        );
        assert_eq!(result.available_ingredients.len(), 2);
        assert_eq!(result.missing_ingredients.len(), 1);
        assert_eq!(result.missing_ingredients[0].recipe_text, "3 tbsp olive oil");
    }

    #[test]
    fn test_compatibility_score_rounds_available_fraction() {
        let index = produce_index();
        let result = calculate_recipe_compatibility(
            &index,
            &recipe("soup", &["2 cups diced onions", "1 clove garlic, minced", "3 tbsp olive oil"]),
        );
        // round(100 * 2/3)
        assert_eq!(result.compatibility_score, 67);
    }

    #[test]
    fn test_zero_ingredient_recipe_scores_zero() {
        let index = produce_index();
        let result = calculate_recipe_compatibility(&index, &recipe("empty", &[]));
        assert_eq!(result.total_ingredients, 0);
        assert_eq!(result.compatibility_score, 0);
        assert_eq!(result.confidence_score, 0);
    }

    #[test]
    fn test_confidence_score_is_mean_of_available_matches_only() {
        let index = produce_index();
        let result = calculate_recipe_compatibility(&index, &recipe("aromatics", &["onion", "garlic"]));
        // Both exact, so the mean is exactly 100.
        assert_eq!(result.compatibility_score, 100);
        assert_eq!(result.confidence_score, 100);

        let nothing = calculate_recipe_compatibility(&index, &recipe("bare", &["olive oil"]));
        assert_eq!(nothing.compatibility_score, 0);
        assert_eq!(nothing.confidence_score, 0);
    }

    #[test]
    fn test_fuzzy_matches_count_as_available() {
        let index = PantryIndex::new(&GroceryInventory {
            categories: vec![GroceryCategory {
                name: "pantry".to_string(),
                ingredients: vec!["chicken stock".to_string()],
            }],
        });
        let result = calculate_recipe_compatibility(&index, &recipe("roast", &["2 chicken breasts"]));
        assert_eq!(result.available_ingredients.len(), 1);
        assert_eq!(result.compatibility_score, 100);
        assert_eq!(result.available_ingredients[0].match_type, MatchType::Fuzzy);
    }

    #[test]
    fn test_available_with_confidence_filters_caller_side() {
        let index = PantryIndex::new(&GroceryInventory {
            categories: vec![GroceryCategory {
                name: "pantry".to_string(),
                ingredients: vec!["chicken stock".to_string()],
            }],
        });
        let result = calculate_recipe_compatibility(&index, &recipe("roast", &["2 chicken breasts"]));
        let fuzzy_confidence = result.available_ingredients[0].confidence;

        assert_eq!(result.available_with_confidence(fuzzy_confidence).len(), 1);
        assert!(result.available_with_confidence(fuzzy_confidence + 1).is_empty());
        // The unfiltered list is untouched either way.
        assert_eq!(result.available_ingredients.len(), 1);
    }
}
