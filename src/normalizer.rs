// Canonicalizes free-text ingredient names into comparison keys.
// "2 cups diced yellow onions, chopped" -> "diced yellow onion"

// Unit words recognized when they appear in the quantity prefix of an
// ingredient line. Stored in singular form; tokens are singularized before
// the table lookup, so "cups", "cloves" etc. are covered.
const UNIT_WORDS: &[&str] = &[
    "cup", "tablespoon", "tbsp", "teaspoon", "tsp", "ounce", "oz", "pound",
    "lb", "gram", "g", "kilogram", "kg", "milliliter", "ml", "liter", "l",
    "clove", "slice", "pinch", "dash", "can", "stick", "piece", "handful",
    "bunch", "sprig", "head", "package", "bag",
];

/// Canonical comparison form of an ingredient name.
///
/// Lowercases, trims, collapses whitespace, drops the preparation clause
/// after the first comma, strips the leading quantity/unit prefix (as long
/// as an ingredient word remains) and singularizes trailing plurals.
///
/// Total and deterministic: any input normalizes to something (possibly the
/// empty string), identical input always yields identical output, and the
/// result is a fixed point (normalizing twice changes nothing).
pub fn normalize_ingredient_name(raw: &str) -> String {
    // The portion after the first comma is a preparation clause
    // (", diced", ", to taste"); it is display-only and never matched on.
    let name_part = raw.split(',').next().unwrap_or("");

    // Tokens are canonicalized before the prefix strip so the unit table
    // only needs singular forms, and so the output is a fixed point of this
    // function.
    let lowered = name_part.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split_whitespace()
        .map(canonical_token)
        .filter(|t| !t.is_empty())
        .collect();

    // Strip leading quantity and unit tokens ("2", "1/2", "cup") while at
    // least one token would remain to serve as the ingredient noun.
    let mut start = 0;
    while start + 1 < tokens.len() && is_quantity_or_unit(tokens[start]) {
        start += 1;
    }

    tokens[start..].join(" ")
}

// Strips edge punctuation and trailing plurals until stable: trimming a
// plural 's' can expose punctuation ("onion.s" -> "onion.") and vice versa,
// so a single pass of each is not a fixed point.
fn canonical_token(token: &str) -> &str {
    let mut current = token;
    loop {
        let next = singularize(strip_edge_punctuation(current));
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_edge_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

fn is_quantity_or_unit(token: &str) -> bool {
    is_quantity(token) || UNIT_WORDS.contains(&token)
}

// Accepts integers, decimals and ASCII fractions ("3", "1.5", "1/2").
fn is_quantity(token: &str) -> bool {
    if token.parse::<f64>().is_ok() {
        return true;
    }
    match token.split_once('/') {
        Some((num, den)) => num.parse::<u32>().is_ok() && den.parse::<u32>().is_ok(),
        None => false,
    }
}

// Trims a trailing plural 's' from words of three or more characters.
// "onions" -> "onion"; "ss" endings ("swiss") and two-letter words ("is")
// are left alone.
fn singularize(word: &str) -> &str {
    if word.len() >= 3 && word.ends_with('s') && !word.ends_with("ss") {
        &word[..word.len() - 1]
    } else {
        word
    }
}
