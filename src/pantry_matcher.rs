use serde::{Deserialize, Serialize};

use crate::normalizer::normalize_ingredient_name;
use crate::pantry_index::{IndexedEntry, PantryIndex};

// Confidence bands per match tier. The ordering (exact > partial > fuzzy >
// none) and the monotonic overlap-to-confidence mapping are the contract;
// the band edges themselves are tunable heuristics.
pub const EXACT_CONFIDENCE: u8 = 100;
const PARTIAL_CONFIDENCE_FLOOR: u8 = 60;
const PARTIAL_CONFIDENCE_SPAN: u8 = 30;
const FUZZY_CONFIDENCE_FLOOR: u8 = 40;
const FUZZY_CONFIDENCE_SPAN: u8 = 20;

// Word containment below this length matches almost anything ("a", "of"),
// so containment only applies to words of at least this many characters.
const MIN_CONTAINMENT_LEN: usize = 3;

/// How an ingredient line was resolved against the inventory.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Partial,
    Fuzzy,
    None,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Exact => write!(f, "exact"),
            MatchType::Partial => write!(f, "partial"),
            MatchType::Fuzzy => write!(f, "fuzzy"),
            MatchType::None => write!(f, "none"),
        }
    }
}

/// Result of matching one recipe ingredient line against the pantry.
/// Created fresh per call and never persisted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IngredientMatch {
    /// The recipe ingredient line exactly as written.
    pub recipe_text: String,
    pub matched_category: Option<String>,
    pub matched_ingredient: Option<String>,
    pub match_type: MatchType,
    /// 0-100. `None` is always 0, `Exact` always 100.
    pub confidence: u8,
}

impl IngredientMatch {
    fn not_found(recipe_text: &str) -> Self {
        Self {
            recipe_text: recipe_text.to_string(),
            matched_category: None,
            matched_ingredient: None,
            match_type: MatchType::None,
            confidence: 0,
        }
    }

    fn found(recipe_text: &str, entry: &IndexedEntry, match_type: MatchType, confidence: u8) -> Self {
        Self {
            recipe_text: recipe_text.to_string(),
            matched_category: Some(entry.category.clone()),
            matched_ingredient: Some(entry.ingredient.clone()),
            match_type,
            confidence,
        }
    }
}

/// Matches one free-text recipe ingredient line against the pantry index.
///
/// Cascade, first success wins: exact lookup on the normalized name, then
/// substring lookup, then word-overlap fuzzy scan, then `None`. A heuristic
/// classifier: false positives ("onion powder" vs "onion") are expected and
/// accepted; the contract is consistent, explainable scoring.
///
/// Total function: blank input and an empty pantry short-circuit to `None`
/// without touching the index.
pub fn match_ingredient(index: &PantryIndex, recipe_text: &str) -> IngredientMatch {
    if index.is_empty() {
        return IngredientMatch::not_found(recipe_text);
    }

    let normalized = normalize_ingredient_name(recipe_text);
    if normalized.is_empty() {
        return IngredientMatch::not_found(recipe_text);
    }

    if let Some(entry) = index.lookup_exact(&normalized) {
        return IngredientMatch::found(recipe_text, entry, MatchType::Exact, EXACT_CONFIDENCE);
    }

    if let Some(entry) = index.lookup_substring(&normalized) {
        let confidence = partial_confidence(&normalized, &entry.normalized);
        return IngredientMatch::found(recipe_text, entry, MatchType::Partial, confidence);
    }

    if let Some((entry, confidence)) = best_fuzzy_candidate(index, &normalized) {
        return IngredientMatch::found(recipe_text, entry, MatchType::Fuzzy, confidence);
    }

    IngredientMatch::not_found(recipe_text)
}

// Substring confidence scales with how much of the longer string the
// matched (shorter) side covers: near-complete coverage scores near 90,
// a short overlap scores near 60.
fn partial_confidence(query: &str, entry: &str) -> u8 {
    let shorter = query.len().min(entry.len());
    let longer = query.len().max(entry.len());
    let ratio = shorter as f64 / longer as f64;
    PARTIAL_CONFIDENCE_FLOOR + (f64::from(PARTIAL_CONFIDENCE_SPAN) * ratio).round() as u8
}

fn words_overlap(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    if a.len() >= MIN_CONTAINMENT_LEN && b.len() >= MIN_CONTAINMENT_LEN {
        return a.contains(b) || b.contains(a);
    }
    false
}

// Scans the whole index for the entry sharing the most words with the
// query. Confidence scales with the fraction of overlapping words; ties
// keep the earlier entry.
fn best_fuzzy_candidate<'a>(index: &'a PantryIndex, normalized: &str) -> Option<(&'a IndexedEntry, u8)> {
    let query_words: Vec<&str> = normalized.split_whitespace().collect();
    if query_words.is_empty() {
        return None;
    }

    let mut best: Option<(&IndexedEntry, u8)> = None;
    for entry in index.entries() {
        let entry_words: Vec<&str> = entry.normalized.split_whitespace().collect();
        if entry_words.is_empty() {
            continue;
        }
        let matched = query_words
            .iter()
            .filter(|qw| entry_words.iter().any(|ew| words_overlap(qw, ew)))
            .count();
        if matched == 0 {
            continue;
        }
        let fraction = matched as f64 / query_words.len().max(entry_words.len()) as f64;
        let confidence = FUZZY_CONFIDENCE_FLOOR + (f64::from(FUZZY_CONFIDENCE_SPAN) * fraction).round() as u8;
        if best.map_or(true, |(_, best_confidence)| confidence > best_confidence) {
            best = Some((entry, confidence));
        }
    }
    best
}
