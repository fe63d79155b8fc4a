//! Timeframe tiers controlling how aggressively history is downsampled.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoinlensError;

/// Named display window for a historical price chart.
///
/// Serialized as the short codes used on the wire (`"7d"`, `"30d"`, `"6m"`, `"1y"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Tier {
    /// Seven-day window. Every point is shown.
    #[default]
    #[serde(rename = "7d")]
    Short,
    /// Thirty-day window.
    #[serde(rename = "30d")]
    Medium,
    /// Six-month window.
    #[serde(rename = "6m")]
    Long,
    /// One-year window.
    #[serde(rename = "1y")]
    Extended,
}

impl Tier {
    /// All tiers, shortest window first.
    pub const ALL: [Self; 4] = [Self::Short, Self::Medium, Self::Long, Self::Extended];

    /// Wire code for this tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "7d",
            Self::Medium => "30d",
            Self::Long => "6m",
            Self::Extended => "1y",
        }
    }

    /// Human-readable window name used in chart titles, e.g. "30-Day".
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Short => "7-Day",
            Self::Medium => "30-Day",
            Self::Long => "6-Month",
            Self::Extended => "1-Year",
        }
    }

    /// Whether axis labels for this tier show month and year rather than month and day.
    #[must_use]
    pub const fn is_monthly(self) -> bool {
        matches!(self, Self::Long | Self::Extended)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = CoinlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7d" => Ok(Self::Short),
            "30d" => Ok(Self::Medium),
            "6m" => Ok(Self::Long),
            "1y" => Ok(Self::Extended),
            other => Err(CoinlensError::InvalidArg(format!(
                "unknown timeframe {other:?} (expected one of 7d, 30d, 6m, 1y)"
            ))),
        }
    }
}
