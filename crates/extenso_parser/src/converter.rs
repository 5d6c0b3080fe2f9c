//! Main conversion pipeline.
//!
//! Orchestrates the full flow from raw phrase to number:
//! normalize, try the whole phrase, then scan token by token.

use extenso_foundation::{Conversion, Rejection, Result, ScaleMode};
use extenso_vocabulary::Vocabulary;

use crate::config::ConverterConfig;
use crate::direct::resolve_whole;
use crate::normalize::Normalizer;
use crate::reducer::reduce;

/// Converts numeral phrases against a borrowed vocabulary.
///
/// Holds no mutable state, so one converter can serve any number of threads.
#[derive(Clone, Copy, Debug)]
pub struct Converter<'v> {
    vocabulary: &'v Vocabulary,
    config: ConverterConfig,
}

impl<'v> Converter<'v> {
    /// Creates a converter with the default configuration (long scale).
    #[must_use]
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self::with_config(vocabulary, ConverterConfig::default())
    }

    /// Creates a converter with the given configuration.
    #[must_use]
    pub fn with_config(vocabulary: &'v Vocabulary, config: ConverterConfig) -> Self {
        Self { vocabulary, config }
    }

    /// Returns the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts a phrase using the configured scale.
    #[must_use]
    pub fn convert(&self, phrase: &str) -> Conversion {
        self.convert_with(phrase, self.config.scale_mode)
    }

    /// Converts a phrase using the given scale.
    #[must_use]
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn convert_with(&self, phrase: &str, mode: ScaleMode) -> Conversion {
        let normalized = Normalizer::normalize(phrase);
        self.convert_normalized(&normalized, mode)
    }

    /// Converts a phrase using the configured scale, reporting a rejection
    /// as an error.
    ///
    /// # Errors
    ///
    /// Returns [`extenso_foundation::ErrorKind::InvalidNumber`] with the
    /// normalized phrase and token position as context.
    pub fn try_convert(&self, phrase: &str) -> Result<i64> {
        let normalized = Normalizer::normalize(phrase);
        self.convert_normalized(&normalized, self.config.scale_mode)
            .into_result(&normalized)
    }

    fn convert_normalized(&self, normalized: &str, mode: ScaleMode) -> Conversion {
        let tokens = Normalizer::tokenize(normalized);
        if tokens.is_empty() {
            return Conversion::Invalid(Rejection::EmptyPhrase);
        }
        if let Some(limit) = self.config.max_tokens {
            if tokens.len() > limit {
                return Conversion::Invalid(Rejection::TooManyTokens {
                    limit,
                    count: tokens.len(),
                });
            }
        }

        if let Some(value) = resolve_whole(self.vocabulary, normalized, mode) {
            return Conversion::Number(value);
        }

        reduce(self.vocabulary, &tokens, mode)
    }
}
