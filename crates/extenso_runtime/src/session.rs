//! Session state for the REPL.

use extenso_foundation::{Conversion, Rejection, ScaleMode};

/// Session state for an interactive REPL session.
#[derive(Clone, Debug, Default)]
pub struct Session {
    /// Scale used for plain phrases.
    scale_mode: ScaleMode,

    /// Phrases that resolved to a number.
    accepted: u64,

    /// Phrases that were rejected.
    rejected: u64,

    /// Reason for the most recent rejection.
    last_rejection: Option<Rejection>,
}

impl Session {
    /// Creates a new long-scale session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new session using the given scale.
    #[must_use]
    pub fn with_scale_mode(scale_mode: ScaleMode) -> Self {
        Self {
            scale_mode,
            ..Self::default()
        }
    }

    /// Returns the current scale.
    #[must_use]
    pub const fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    /// Switches the scale for subsequent phrases.
    pub fn set_scale_mode(&mut self, scale_mode: ScaleMode) {
        self.scale_mode = scale_mode;
    }

    /// Counts a conversion outcome.
    pub fn record(&mut self, conversion: &Conversion) {
        match conversion {
            Conversion::Number(_) => self.accepted += 1,
            Conversion::Invalid(rejection) => {
                self.rejected += 1;
                self.last_rejection = Some(rejection.clone());
            }
        }
    }

    /// Number of accepted phrases.
    #[must_use]
    pub const fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Number of rejected phrases.
    #[must_use]
    pub const fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Reason for the most recent rejection.
    #[must_use]
    pub const fn last_rejection(&self) -> Option<&Rejection> {
        self.last_rejection.as_ref()
    }
}
