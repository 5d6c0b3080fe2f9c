//! Standard European Portuguese vocabulary.
//!
//! Numbers are written the way Portugal writes them: "dezasseis" rather than
//! the Brazilian "dezesseis", "bilião" rather than "bilhão". Under the long
//! scale, which is the default in Portugal, a "bilião" is a million millions
//! and 10^9 is said "mil milhões".

use std::sync::OnceLock;

use extenso_foundation::{Result, ScaleMode};

use crate::vocabulary::{Vocabulary, VocabularyBuilder};
use crate::word::{ScaleTier, ScaleWord};

/// The connective between numeral components.
pub const SEPARATOR: &str = "e";

/// The word for one.
pub const ONE: &str = "um";

/// The word for thousand.
pub const THOUSAND: &str = "mil";

/// Scale-independent words.
pub const NUMBERS: &[(&str, i64)] = &[
    ("zero", 0),
    ("um", 1),
    ("dois", 2),
    ("três", 3),
    ("quatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("sete", 7),
    ("oito", 8),
    ("nove", 9),
    ("dez", 10),
    ("onze", 11),
    ("doze", 12),
    ("treze", 13),
    ("catorze", 14),
    ("quatorze", 14),
    ("quinze", 15),
    ("dezasseis", 16),
    ("dezassete", 17),
    ("dezoito", 18),
    ("dezanove", 19),
    ("vinte", 20),
    ("trinta", 30),
    ("quarenta", 40),
    ("cinquenta", 50),
    ("sessenta", 60),
    ("setenta", 70),
    ("oitenta", 80),
    ("noventa", 90),
    ("cem", 100),
    ("cento", 100),
    ("duzentos", 200),
    ("trezentos", 300),
    ("quatrocentos", 400),
    ("quinhentos", 500),
    ("seiscentos", 600),
    ("setecentos", 700),
    ("oitocentos", 800),
    ("novecentos", 900),
    ("mil", 1_000),
];

/// Million, billion and trillion under both scales.
pub const SCALE_WORDS: &[ScaleWord<'static>] = &[
    ScaleWord {
        tier: ScaleTier::Million,
        singular: "milhão",
        plural: "milhões",
        short_scale: 1_000_000,
        long_scale: 1_000_000,
    },
    ScaleWord {
        tier: ScaleTier::Billion,
        singular: "bilião",
        plural: "biliões",
        short_scale: 1_000_000_000,
        long_scale: 1_000_000_000_000,
    },
    ScaleWord {
        tier: ScaleTier::Trillion,
        singular: "trilião",
        plural: "triliões",
        short_scale: 1_000_000_000_000,
        long_scale: 1_000_000_000_000_000_000,
    },
];

/// Phrases lexicalized under the long scale only.
pub const LONG_SCALE_PHRASES: &[(&str, i64)] = &[
    ("mil milhões", 1_000_000_000),
    ("mil biliões", 1_000_000_000_000_000),
];

/// Builds the European Portuguese vocabulary.
///
/// # Errors
///
/// Propagates builder errors. The shipped tables are consistent, so this only
/// fails if they are edited into an inconsistent state.
pub fn european() -> Result<Vocabulary> {
    let mut builder = VocabularyBuilder::new(SEPARATOR, ONE, THOUSAND);

    for &(word, value) in NUMBERS {
        builder.register_number(word, value)?;
    }
    for scale_word in SCALE_WORDS {
        builder.register_scale_word(scale_word)?;
    }
    for &(phrase, value) in LONG_SCALE_PHRASES {
        builder.register_scale_phrase(ScaleMode::Long, phrase, value)?;
    }

    builder.build()
}

static STANDARD: OnceLock<Vocabulary> = OnceLock::new();

/// The shared European Portuguese vocabulary, built on first use.
///
/// # Panics
///
/// Panics if the shipped tables are inconsistent, which the unit tests rule
/// out.
pub fn standard() -> &'static Vocabulary {
    STANDARD.get_or_init(|| european().expect("standard Portuguese vocabulary is consistent"))
}
