//! Vocabulary tables and word classes for Extenso.
//!
//! This crate provides:
//! - [`Vocabulary`] - Read-only word tables plus the classes that drive the token scan
//! - [`VocabularyBuilder`] - Registration with conflict checks
//! - [`WordClass`], [`ScaleTier`], [`ScaleWord`] - Word classification records
//! - [`portuguese`] - The standard European Portuguese vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod portuguese;
pub mod vocabulary;
pub mod word;

pub use vocabulary::{Vocabulary, VocabularyBuilder};
pub use word::{GrammaticalNumber, ScaleTier, ScaleWord, WordClass, canonical_form};
