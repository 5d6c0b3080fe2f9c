//! Input normalization.
//!
//! Converts a raw phrase into the canonical form the vocabulary is keyed by,
//! and splits it into tokens.

use extenso_vocabulary::canonical_form;

/// Normalizes and tokenizes numeral phrases.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes a raw phrase.
    ///
    /// - Collapses every run of whitespace to a single space
    /// - Trims leading and trailing whitespace
    /// - Title-cases every word ("TRÊS mil" becomes "Três Mil")
    #[must_use]
    pub fn normalize(phrase: &str) -> String {
        let collapsed = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
        canonical_form(&collapsed)
    }

    /// Splits a normalized phrase into tokens. An empty phrase has none.
    #[must_use]
    pub fn tokenize(normalized: &str) -> Vec<&str> {
        if normalized.is_empty() {
            return Vec::new();
        }
        normalized.split(' ').collect()
    }
}
