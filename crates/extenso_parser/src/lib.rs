//! Numeral phrase parser for Extenso.
//!
//! This crate turns phrases like "cento e vinte e dois" into numbers.
//!
//! # Architecture
//!
//! ```text
//! "  cento e VINTE e dois "
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   NORMALIZER    │  → "Cento E Vinte E Dois"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DIRECT MATCH    │  → whole phrase in the tables? (no)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TOKEN REDUCER   │  → [100] [100, 20] [100, 20, 2]
//! └─────────────────┘
//!          │
//!          ▼
//!        122
//! ```
//!
//! # Modules
//!
//! - [`normalize`] - Whitespace collapsing, casing, tokenization
//! - [`direct`] - Whole-phrase lookup
//! - [`reducer`] - Separator validation and multiplier composition
//! - [`converter`] - Pipeline orchestration
//! - [`config`] - Converter configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod converter;
pub mod direct;
pub mod normalize;
pub mod reducer;

pub use config::ConverterConfig;
pub use converter::Converter;
pub use direct::resolve_whole;
pub use normalize::Normalizer;
pub use reducer::reduce;

use extenso_foundation::{Conversion, ScaleMode};
use extenso_vocabulary::portuguese;

/// Converts a phrase with the standard Portuguese vocabulary.
///
/// Returns the decimal value, or [`extenso_foundation::INVALID_NUMBER`] if
/// the phrase cannot be resolved. Never panics.
#[must_use]
pub fn convert(phrase: &str, use_short_scale: bool) -> String {
    convert_phrase(phrase, ScaleMode::from_short_flag(use_short_scale)).to_string()
}

/// Converts a phrase with the standard Portuguese vocabulary, keeping the
/// rejection reason.
#[must_use]
pub fn convert_phrase(phrase: &str, mode: ScaleMode) -> Conversion {
    Converter::new(portuguese::standard()).convert_with(phrase, mode)
}
