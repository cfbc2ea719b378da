use std::str::FromStr;

use serde::Deserialize;

use crate::error::CoreError;

/// How opening windows whose open time is later than their close time are
/// treated when a dataset is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPolicy {
    /// Inverted windows are kept as written and matched with the same
    /// arithmetic as any other window.
    #[default]
    Lenient,
    /// Inverted windows are rejected and abort the load.
    Strict,
}

impl WindowPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl std::fmt::Display for WindowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(CoreError::InvalidConfiguration(format!(
                "unknown window policy `{other}` (expected `lenient` or `strict`)"
            ))),
        }
    }
}
