//! Core types, conversion results, and errors for Extenso.
//!
//! This crate provides:
//! - [`ScaleMode`] - Short-scale vs long-scale reading of large-number names
//! - [`Conversion`] - The outcome of converting one numeral phrase
//! - [`Rejection`] - Why a phrase was rejected
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod conversion;
pub mod error;
pub mod scale;

pub use conversion::{Conversion, INVALID_NUMBER, Rejection};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use scale::ScaleMode;
