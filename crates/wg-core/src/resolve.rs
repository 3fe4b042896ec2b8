//! Fuzzy "did you mean" suggestions for scene ids and game names.

use strsim::jaro_winkler;

/// Minimum similarity score for a suggestion (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Find the known name closest to `input`, if any is close enough.
pub fn closest_match<'a>(known: impl IntoIterator<Item = &'a str>, input: &str) -> Option<String> {
    let mut best: Option<(&str, f64)> = None;
    for id in known {
        let score = jaro_winkler(input, id);
        if score >= FUZZY_THRESHOLD && best.is_none_or(|(_, top)| score > top) {
            best = Some((id, score));
        }
    }
    best.map(|(id, _)| id.to_string())
}
