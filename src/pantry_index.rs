use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::grocery_loader::GroceryInventory;
use crate::normalizer::normalize_ingredient_name;

/// One inventory ingredient as indexed: the category it came from, the name
/// as the user entered it, and the normalized comparison key.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IndexedEntry {
    pub category: String,
    pub ingredient: String,
    pub normalized: String,
}

/// Lookup structure over a grocery inventory snapshot.
///
/// Built once from an inventory and never updated in place; rebuild from the
/// latest snapshot whenever the inventory changes. Entry order follows
/// category insertion order, then ingredient order within each category,
/// which is what breaks ties in the substring scan.
pub struct PantryIndex {
    entries: Vec<IndexedEntry>,
    exact: HashMap<String, usize>,
}

impl PantryIndex {
    pub fn new(inventory: &GroceryInventory) -> Self {
        let mut entries: Vec<IndexedEntry> = Vec::new();
        let mut exact: HashMap<String, usize> = HashMap::new();

        for category in &inventory.categories {
            for ingredient in &category.ingredients {
                let normalized = normalize_ingredient_name(ingredient);
                if normalized.is_empty() {
                    continue;
                }
                // First-seen entry wins when two categories hold the same
                // normalized name.
                exact.entry(normalized.clone()).or_insert(entries.len());
                entries.push(IndexedEntry {
                    category: category.name.clone(),
                    ingredient: ingredient.clone(),
                    normalized,
                });
            }
        }

        Self { entries, exact }
    }

    /// O(1) lookup by normalized name.
    pub fn lookup_exact(&self, normalized: &str) -> Option<&IndexedEntry> {
        self.exact.get(normalized).map(|&idx| &self.entries[idx])
    }

    /// Fallback scan: first entry (in build order) whose normalized form
    /// contains the query, or is contained by it.
    pub fn lookup_substring(&self, normalized: &str) -> Option<&IndexedEntry> {
        if normalized.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.normalized.contains(normalized) || normalized.contains(&entry.normalized))
    }

    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grocery_loader::GroceryCategory;

    fn sample_inventory() -> GroceryInventory {
        GroceryInventory {
            categories: vec![
                GroceryCategory {
                    name: "produce".to_string(),
                    ingredients: vec!["Yellow Onions".to_string(), "Garlic".to_string()],
                },
                GroceryCategory {
                    name: "dairy".to_string(),
                    ingredients: vec!["Butter".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_index_build_preserves_category_then_ingredient_order() {
        let index = PantryIndex::new(&sample_inventory());
        let order: Vec<&str> = index.entries().iter().map(|e| e.ingredient.as_str()).collect();
        assert_eq!(order, vec!["Yellow Onions", "Garlic", "Butter"]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_lookup_exact_uses_normalized_names() {
        let index = PantryIndex::new(&sample_inventory());
        let entry = index.lookup_exact("yellow onion").expect("should index normalized name");
        assert_eq!(entry.category, "produce");
        assert_eq!(entry.ingredient, "Yellow Onions");
        assert!(index.lookup_exact("Yellow Onions").is_none());
    }

    #[test]
    fn test_lookup_substring_matches_either_direction() {
        let index = PantryIndex::new(&sample_inventory());
        // query contained in entry
        assert_eq!(index.lookup_substring("onion").unwrap().ingredient, "Yellow Onions");
        // entry contained in query
        assert_eq!(index.lookup_substring("salted butter").unwrap().ingredient, "Butter");
        assert!(index.lookup_substring("saffron").is_none());
        assert!(index.lookup_substring("").is_none());
    }

    #[test]
    fn test_duplicate_normalized_names_first_category_wins() {
        let inventory = GroceryInventory {
            categories: vec![
                GroceryCategory {
                    name: "produce".to_string(),
                    ingredients: vec!["Onion".to_string()],
                },
                GroceryCategory {
                    name: "pantry".to_string(),
                    ingredients: vec!["onions".to_string()],
                },
            ],
        };
        let index = PantryIndex::new(&inventory);
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup_exact("onion").unwrap().category, "produce");
    }

    #[test]
    fn test_empty_inventory_builds_empty_index() {
        let index = PantryIndex::new(&GroceryInventory::default());
        assert!(index.is_empty());
        assert!(index.lookup_exact("onion").is_none());
        assert!(index.lookup_substring("onion").is_none());
    }

    #[test]
    fn test_blank_ingredient_names_are_not_indexed() {
        let inventory = GroceryInventory {
            categories: vec![GroceryCategory {
                name: "produce".to_string(),
                ingredients: vec!["   ".to_string(), "Leek".to_string()],
            }],
        };
        let index = PantryIndex::new(&inventory);
        assert_eq!(index.len(), 1);
        assert_eq!(index.entries()[0].ingredient, "Leek");
    }
}
