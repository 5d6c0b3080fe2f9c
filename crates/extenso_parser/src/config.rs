//! Converter configuration.

use extenso_foundation::ScaleMode;

/// Configuration for a [`Converter`](crate::Converter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Scale used by [`Converter::convert`](crate::Converter::convert).
    pub scale_mode: ScaleMode,

    /// Phrases with more tokens than this are rejected before the scan.
    /// `None` means no limit.
    pub max_tokens: Option<usize>,
}

impl ConverterConfig {
    /// Short-scale configuration with no token limit.
    #[must_use]
    pub fn short_scale() -> Self {
        Self {
            scale_mode: ScaleMode::Short,
            ..Self::default()
        }
    }

    /// Long-scale configuration with no token limit.
    #[must_use]
    pub fn long_scale() -> Self {
        Self::default()
    }

    /// Builder method to set the scale mode.
    #[must_use]
    pub fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }

    /// Builder method to set the token limit.
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}
