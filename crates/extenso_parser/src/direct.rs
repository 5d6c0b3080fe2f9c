//! Whole-phrase lookup.
//!
//! Some phrases are lexicalized and do not decompose under the token scan
//! ("Mil Milhões" under the long scale), so the whole phrase is tried first.

use extenso_foundation::ScaleMode;
use extenso_vocabulary::Vocabulary;

/// Looks up the whole normalized phrase in the base table, then in the table
/// of the active scale.
#[must_use]
pub fn resolve_whole(vocabulary: &Vocabulary, phrase: &str, mode: ScaleMode) -> Option<i64> {
    let value = vocabulary.lookup(phrase, mode);
    if let Some(value) = value {
        tracing::debug!(phrase, value, "direct match");
    }
    value
}
