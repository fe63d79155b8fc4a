//! Asset classes and their default axis rounding rules.

use serde::{Deserialize, Serialize};

use crate::GranularityTable;

const BITCOIN_ROWS: &[(f64, f64)] = &[
    (50_000.0, 15_000.0),
    (25_000.0, 7_500.0),
    (15_000.0, 5_000.0),
    (10_000.0, 3_000.0),
    (5_000.0, 2_000.0),
    (0.0, 1_500.0),
];

const ETHER_ROWS: &[(f64, f64)] = &[
    (2_000.0, 750.0),
    (1_000.0, 500.0),
    (500.0, 250.0),
    (200.0, 100.0),
    (0.0, 50.0),
];

const GENERIC_ROWS: &[(f64, f64)] = &[
    (1_000.0, 250.0),
    (100.0, 25.0),
    (10.0, 2.5),
    (1.0, 0.25),
    (0.0, 0.05),
];

/// Price-scale class of an asset. Drives the default rounding granularity so
/// that a chart renders roughly 4–8 gridlines whatever the absolute price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AssetClass {
    /// Five-figure prices (BTC).
    Bitcoin,
    /// Four-figure prices (ETH).
    Ether,
    /// Anything else; rounds in small increments.
    #[default]
    Generic,
}

impl AssetClass {
    /// Classify a ticker symbol, case-insensitively.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol.trim().to_ascii_uppercase().as_str() {
            "BTC" | "XBT" | "BITCOIN" => Self::Bitcoin,
            "ETH" | "ETHEREUM" => Self::Ether,
            _ => Self::Generic,
        }
    }

    /// Default range-dependent rounding table for this class.
    #[must_use]
    pub fn granularity_table(self) -> GranularityTable {
        match self {
            Self::Bitcoin => GranularityTable::from_rows(BITCOIN_ROWS),
            Self::Ether => GranularityTable::from_rows(ETHER_ROWS),
            Self::Generic => GranularityTable::from_rows(GENERIC_ROWS),
        }
    }

    /// Fixed rounding increment used by the next-day prediction chart.
    #[must_use]
    pub const fn prediction_granularity(self) -> f64 {
        match self {
            Self::Bitcoin => 1_000.0,
            Self::Ether => 100.0,
            Self::Generic => 1.0,
        }
    }
}
