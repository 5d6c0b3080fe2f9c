//! Error types for the Extenso system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Malformed phrases are not errors on the conversion path; they only become
//! an [`Error`] when a caller asks for a `Result` via
//! [`Conversion::into_result`](crate::Conversion::into_result).

use std::fmt;

use thiserror::Error;

use crate::conversion::Rejection;

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Extenso operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(rejection: Rejection) -> Self {
        Self::new(ErrorKind::InvalidNumber(rejection))
    }

    /// Creates a conflicting vocabulary entry error.
    #[must_use]
    pub fn conflicting_entry(word: impl Into<String>, existing: i64, new: i64) -> Self {
        Self::new(ErrorKind::ConflictingEntry {
            word: word.into(),
            existing,
            new,
        })
    }

    /// Creates a missing literal error.
    #[must_use]
    pub fn missing_literal(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingLiteral(what.into()))
    }

    /// The rejection behind an [`ErrorKind::InvalidNumber`] error.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match &self.kind {
            ErrorKind::InvalidNumber(r) => Some(r),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(e.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The phrase could not be resolved to a number.
    #[error("invalid number: {0}")]
    InvalidNumber(Rejection),

    /// A vocabulary table would map one word to two values.
    #[error("conflicting entry for '{word}': {existing} vs {new}")]
    ConflictingEntry {
        /// The word being registered.
        word: String,
        /// The value already in the table.
        existing: i64,
        /// The value that was rejected.
        new: i64,
    },

    /// A literal the algorithm depends on is empty or unregistered.
    #[error("missing literal: {0}")]
    MissingLiteral(String),

    /// The vocabulary is inconsistent in some other way.
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// Reading input failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// A command, option or setting was not understood.
    #[error("{0}")]
    Usage(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The normalized phrase being converted.
    pub phrase: Option<String>,
    /// Token position inside the phrase.
    pub position: Option<usize>,
    /// Stack of enclosing operations, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the phrase.
    #[must_use]
    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrase = Some(phrase.into());
        self
    }

    /// Sets the token position.
    #[must_use]
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(phrase) = &self.phrase {
            write!(f, "in phrase '{phrase}'")?;
            if let Some(position) = self.position {
                write!(f, " at token {position}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
