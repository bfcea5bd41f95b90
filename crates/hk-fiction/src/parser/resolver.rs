//! Item name resolution with fuzzy matching.

use strsim::jaro_winkler;

/// Minimum similarity score for a "did you mean" suggestion (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Turn typed item text into an item ID: lowercase, words joined by `_`.
pub fn normalize_item(input: &str) -> String {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// The closest item ID to the input, if any scores above the threshold.
pub fn suggest_item<'a>(items: &'a [String], input: &str) -> Option<&'a str> {
    let wanted = normalize_item(input);
    items
        .iter()
        .map(|item| (item.as_str(), jaro_winkler(&wanted, item)))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(item, _)| item)
}
