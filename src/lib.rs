pub mod cli;
pub mod grocery_loader;
pub mod normalizer;
pub mod pantry_index;
pub mod pantry_matcher;
pub mod recipe_analyzer;
pub mod recipe_compatibility;
pub mod recipe_loader;
