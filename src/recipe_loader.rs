use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A recipe as supplied by the recipe store: an identifier, a title and the
/// ordered free-text ingredient lines. Instructions, ratings and the rest
/// of the recipe record live with the persistence collaborator and never
/// reach the matching core.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Recipe {
    /// Stable identifier. Optional in the file; falls back to the title.
    #[serde(default)]
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn identifier(&self) -> &str {
        if self.id.is_empty() {
            &self.title
        } else {
            &self.id
        }
    }
}

/// Parses a recipe collection from JSON: either a bare array of recipes or
/// an object with a top-level `recipes` array.
pub fn parse_recipes_json(content: &str) -> Result<Vec<Recipe>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RecipeFile {
        Bare(Vec<Recipe>),
        Wrapped { recipes: Vec<Recipe> },
    }

    let parsed: RecipeFile =
        serde_json::from_str(content).with_context(|| "Failed to parse recipe JSON")?;
    Ok(match parsed {
        RecipeFile::Bare(recipes) => recipes,
        RecipeFile::Wrapped { recipes } => recipes,
    })
}
