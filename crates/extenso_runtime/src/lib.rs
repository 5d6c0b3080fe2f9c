//! REPL, CLI, and logging setup for Extenso.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-convert-print loop
//! - [`run_batch`] - Line-by-line conversion for the CLI
//! - [`init_tracing`] - `RUST_LOG`-driven log output

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod repl;
pub mod session;

pub use batch::{BatchSummary, render, run_batch};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::ExtensoHighlighter;
pub use logging::init_tracing;
pub use repl::{Repl, Response};
pub use session::Session;
