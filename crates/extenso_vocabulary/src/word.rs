//! Word classification records.
//!
//! Classification is closed and static: every word the scan needs to reason
//! about carries one [`WordClass`] describing how it combines with its
//! neighbours.

use std::fmt;

/// Magnitude named by a scale word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScaleTier {
    /// 10^3
    Thousand,
    /// 10^6
    Million,
    /// 10^9 or 10^12 depending on the scale
    Billion,
    /// 10^12 or 10^18 depending on the scale
    Trillion,
}

impl ScaleTier {
    /// Tiers above thousand. Only these take an implicit leading "one".
    #[must_use]
    pub const fn is_above_thousand(self) -> bool {
        !matches!(self, Self::Thousand)
    }
}

impl fmt::Display for ScaleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Thousand => "thousand",
            Self::Million => "million",
            Self::Billion => "billion",
            Self::Trillion => "trillion",
        };
        f.write_str(name)
    }
}

/// Grammatical number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrammaticalNumber {
    /// "Milhão"
    Singular,
    /// "Milhões"
    Plural,
}

/// How a word behaves during the token scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WordClass {
    /// Scale tier, for words that multiply what came before them.
    pub tier: Option<ScaleTier>,
    /// Singular or plural form of a scale word.
    pub number: Option<GrammaticalNumber>,
    /// May follow another word without a separator, and must never follow one.
    pub separator_exempt: bool,
    /// Cannot appear right after "thousand" in short-scale phrases.
    pub clashes_with_thousand: bool,
    /// Bare singular scale word that is only tabled with a leading "one".
    pub implicit_one: bool,
}

impl WordClass {
    /// Class of the "thousand" literal.
    #[must_use]
    pub const fn thousand() -> Self {
        Self {
            tier: Some(ScaleTier::Thousand),
            number: None,
            separator_exempt: true,
            clashes_with_thousand: false,
            implicit_one: false,
        }
    }

    /// Returns true if the word multiplies the values accumulated before it.
    #[must_use]
    pub const fn is_scale(&self) -> bool {
        self.tier.is_some()
    }
}

/// A million/billion/trillion name as registered in a vocabulary.
///
/// `singular` is the bare form ("Milhão"); the tables key it together with
/// the vocabulary's word for one ("Um Milhão").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleWord<'a> {
    /// Magnitude of the word. Never [`ScaleTier::Thousand`].
    pub tier: ScaleTier,
    /// Bare singular form.
    pub singular: &'a str,
    /// Plural form.
    pub plural: &'a str,
    /// Value under the short scale.
    pub short_scale: i64,
    /// Value under the long scale.
    pub long_scale: i64,
}

/// Puts a word or phrase in the canonical casing used as table keys.
///
/// Each whitespace-separated word gets its first character upper-cased and
/// the rest lower-cased. Whitespace itself is kept as is.
#[must_use]
pub fn canonical_form(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}
