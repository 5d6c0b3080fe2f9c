//! Naming conventions for large numbers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// Which convention gives meaning to "million", "billion" and "trillion".
///
/// Under the short scale each new name is a thousand times the previous one
/// (a billion is 10^9). Under the long scale each new name is a million times
/// the previous one (a billion is 10^12).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScaleMode {
    /// 10^9 is a billion.
    Short,
    /// 10^9 is a thousand millions, 10^12 is a billion.
    #[default]
    Long,
}

impl ScaleMode {
    /// Selects the mode from the `use_short_scale` flag of the string API.
    #[must_use]
    pub const fn from_short_flag(use_short_scale: bool) -> Self {
        if use_short_scale {
            Self::Short
        } else {
            Self::Long
        }
    }

    /// Returns true for [`ScaleMode::Short`].
    #[must_use]
    pub const fn is_short(self) -> bool {
        matches!(self, Self::Short)
    }

    /// The lowercase name used by the CLI and REPL.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" | "short-scale" => Ok(Self::Short),
            "long" | "long-scale" => Ok(Self::Long),
            other => Err(Error::new(ErrorKind::Usage(format!(
                "unknown scale mode: {other}"
            )))),
        }
    }
}
