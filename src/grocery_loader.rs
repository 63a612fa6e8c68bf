use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

// Expected column headers in the grocery CSV.
const CATEGORY_COL: &str = "Category";
const INGREDIENT_COL: &str = "Ingredient";

const UNCATEGORIZED: &str = "uncategorized";

/// One label bucket of the kitchen inventory. Categories are loose labels,
/// not a partition: the same ingredient may appear under two categories.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GroceryCategory {
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Snapshot of the user's kitchen inventory, category order preserved as
/// loaded. An empty inventory is a normal state (new users), not an error.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GroceryInventory {
    pub categories: Vec<GroceryCategory>,
}

impl GroceryInventory {
    pub fn ingredient_count(&self) -> usize {
        self.categories.iter().map(|c| c.ingredients.len()).sum()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

/// Loads a grocery inventory from a CSV file with `Category,Ingredient`
/// columns. Row order defines category order and ingredient order within a
/// category; rows with an empty ingredient name are skipped; a row with an
/// empty category lands in "uncategorized".
pub fn load_grocery_inventory(csv_path: &Path) -> Result<GroceryInventory> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Grocery CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open grocery CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    let category_idx = headers
        .iter()
        .position(|h| h == CATEGORY_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", CATEGORY_COL))?;
    let ingredient_idx = headers
        .iter()
        .position(|h| h == INGREDIENT_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", INGREDIENT_COL))?;

    let mut inventory = GroceryInventory::default();
    let mut category_positions: HashMap<String, usize> = HashMap::new();

    for (row_index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read record at row index {}", row_index))?;

        let ingredient = record
            .get(ingredient_idx)
            .ok_or_else(|| anyhow::anyhow!("Missing ingredient at row {}", row_index))?
            .trim()
            .to_string();
        if ingredient.is_empty() {
            // Skip rows with empty ingredient names
            continue;
        }

        let category = match record.get(category_idx).map(str::trim) {
            Some("") | None => UNCATEGORIZED.to_string(),
            Some(name) => name.to_string(),
        };

        let position = *category_positions.entry(category.clone()).or_insert_with(|| {
            inventory.categories.push(GroceryCategory {
                name: category.clone(),
                ingredients: Vec::new(),
            });
            inventory.categories.len() - 1
        });
        inventory.categories[position].ingredients.push(ingredient);
    }

    Ok(inventory)
}
