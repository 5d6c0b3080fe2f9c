//! Conversion outcomes.
//!
//! A phrase either resolves to a whole non-negative number or is rejected.
//! Rejections are ordinary values: every malformed phrase maps to one
//! externally visible sentinel, while [`Rejection`] keeps the rule that failed
//! so callers and tests can tell the failure points apart.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorContext, Result};

/// The string returned in place of a number when a phrase cannot be resolved.
pub const INVALID_NUMBER: &str = "InvalidNumber";

/// Why a phrase was rejected.
///
/// Positions are 0-indexed token positions in the normalized phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rejection {
    /// The phrase had no tokens at all.
    EmptyPhrase,
    /// The phrase opened with the separator word.
    LeadingSeparator,
    /// The phrase closed with the separator word.
    TrailingSeparator {
        /// Position of the closing separator.
        position: usize,
    },
    /// The separator was followed by a word that must never follow it.
    SeparatorBeforeExempt {
        /// Position of the separator.
        position: usize,
        /// The exempt word that followed.
        word: String,
    },
    /// Two separators in a row.
    DoubledSeparator {
        /// Position of the second separator.
        position: usize,
    },
    /// A word that needs a separator in front of it did not get one.
    MissingSeparator {
        /// Position of the word.
        position: usize,
        /// The word as looked up.
        word: String,
    },
    /// Short-scale phrases cannot place "thousand" right before a higher
    /// scale word.
    ThousandBeforeScale {
        /// Position of the thousand word.
        position: usize,
        /// The scale word that followed.
        word: String,
    },
    /// The word is in none of the active tables.
    UnknownToken {
        /// Position of the word.
        position: usize,
        /// The word as looked up.
        word: String,
    },
    /// The value does not fit in a signed 64-bit integer.
    Overflow,
    /// The phrase exceeded the configured token limit.
    TooManyTokens {
        /// The configured limit.
        limit: usize,
        /// Number of tokens in the phrase.
        count: usize,
    },
}

impl Rejection {
    /// The token position the rejection points at, if any.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::LeadingSeparator => Some(0),
            Self::TrailingSeparator { position }
            | Self::SeparatorBeforeExempt { position, .. }
            | Self::DoubledSeparator { position }
            | Self::MissingSeparator { position, .. }
            | Self::ThousandBeforeScale { position, .. }
            | Self::UnknownToken { position, .. } => Some(*position),
            Self::EmptyPhrase | Self::Overflow | Self::TooManyTokens { .. } => None,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPhrase => write!(f, "empty phrase"),
            Self::LeadingSeparator => write!(f, "phrase starts with the separator"),
            Self::TrailingSeparator { position } => {
                write!(f, "phrase ends with the separator (token {position})")
            }
            Self::SeparatorBeforeExempt { position, word } => {
                write!(f, "separator at token {position} cannot precede '{word}'")
            }
            Self::DoubledSeparator { position } => {
                write!(f, "doubled separator at token {position}")
            }
            Self::MissingSeparator { position, word } => {
                write!(f, "missing separator before '{word}' (token {position})")
            }
            Self::ThousandBeforeScale { position, word } => {
                write!(
                    f,
                    "thousand at token {position} cannot combine with '{word}' in short scale"
                )
            }
            Self::UnknownToken { position, word } => {
                write!(f, "unknown word '{word}' (token {position})")
            }
            Self::Overflow => write!(f, "value does not fit in 64 bits"),
            Self::TooManyTokens { limit, count } => {
                write!(f, "phrase has {count} tokens, limit is {limit}")
            }
        }
    }
}

/// The result of converting one phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Conversion {
    /// The phrase resolved to this value.
    Number(i64),
    /// The phrase was rejected.
    Invalid(Rejection),
}

impl Conversion {
    /// Returns true if the phrase resolved to a number.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// The resolved value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Invalid(_) => None,
        }
    }

    /// The rejection reason, if any.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Number(_) => None,
            Self::Invalid(r) => Some(r),
        }
    }

    /// Turns a rejection into an [`Error`] carrying the offending phrase.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErrorKind::InvalidNumber`] if the phrase was rejected.
    pub fn into_result(self, phrase: &str) -> Result<i64> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Invalid(rejection) => {
                let mut context = ErrorContext::new().with_phrase(phrase);
                if let Some(position) = rejection.position() {
                    context = context.with_position(position);
                }
                Err(Error::invalid_number(rejection).with_context(context))
            }
        }
    }
}

impl From<Rejection> for Conversion {
    fn from(rejection: Rejection) -> Self {
        Self::Invalid(rejection)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Invalid(_) => f.write_str(INVALID_NUMBER),
        }
    }
}
