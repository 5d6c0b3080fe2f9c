//! Extenso - European Portuguese numbers in words to integers
//!
//! This crate re-exports all layers of the Extenso system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: extenso_runtime     - REPL, CLI, logging setup
//! Layer 2: extenso_parser      - Normalizer, direct match, token reducer
//! Layer 1: extenso_vocabulary  - Number word tables and word classes
//! Layer 0: extenso_foundation  - Core types (ScaleMode, Conversion, Error)
//! ```
//!
//! ```
//! assert_eq!(extenso::convert("cento e vinte e dois", false), "122");
//! assert_eq!(extenso::convert("e cento", false), "InvalidNumber");
//! ```

pub use extenso_foundation as foundation;
pub use extenso_parser as parser;
pub use extenso_runtime as runtime;
pub use extenso_vocabulary as vocabulary;

pub use extenso_foundation::{Conversion, INVALID_NUMBER, Rejection, ScaleMode};
pub use extenso_parser::{Converter, ConverterConfig, convert, convert_phrase};
