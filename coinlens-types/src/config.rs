//! Chart configuration shared by the transformation layer and its callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{AssetClass, CoinlensError, GranularityTable, Tier};

/// Maximum number of points kept per timeframe tier. `None` means "show all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCaps {
    /// Cap for [`Tier::Short`].
    pub short: Option<usize>,
    /// Cap for [`Tier::Medium`].
    pub medium: Option<usize>,
    /// Cap for [`Tier::Long`].
    pub long: Option<usize>,
    /// Cap for [`Tier::Extended`].
    pub extended: Option<usize>,
}

impl TierCaps {
    /// Target point cap for a tier.
    #[must_use]
    pub const fn cap(&self, tier: Tier) -> Option<usize> {
        match tier {
            Tier::Short => self.short,
            Tier::Medium => self.medium,
            Tier::Long => self.long,
            Tier::Extended => self.extended,
        }
    }
}

impl Default for TierCaps {
    fn default() -> Self {
        Self {
            short: None,
            medium: Some(15),
            long: Some(24),
            extended: Some(30),
        }
    }
}

/// Configuration for building chart-ready series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Number of gridlines (ticks) on the value axis, including both ends.
    pub target_ticks: usize,
    /// Downsampling caps per timeframe tier.
    pub tier_caps: TierCaps,
    /// Per-symbol rounding tables that replace the asset-class default.
    /// Keys are matched case-insensitively.
    pub granularity_overrides: BTreeMap<String, GranularityTable>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            target_ticks: 7,
            tier_caps: TierCaps::default(),
            granularity_overrides: BTreeMap::new(),
        }
    }
}

impl ChartConfig {
    /// Check the configuration for values the transformations cannot honor.
    ///
    /// # Errors
    /// Returns `Err(CoinlensError::InvalidArg)` if `target_ticks < 2` or any
    /// tier cap is zero.
    pub fn validate(&self) -> Result<(), CoinlensError> {
        if self.target_ticks < 2 {
            return Err(CoinlensError::InvalidArg(format!(
                "target_ticks must be at least 2, got {}",
                self.target_ticks
            )));
        }
        for tier in Tier::ALL {
            if self.tier_caps.cap(tier) == Some(0) {
                return Err(CoinlensError::InvalidArg(format!(
                    "tier cap for {tier} must be positive"
                )));
            }
        }
        Ok(())
    }

    fn override_for(&self, symbol: &str) -> Option<&GranularityTable> {
        self.granularity_overrides
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(symbol.trim()))
            .map(|(_, v)| v)
    }

    /// Rounding table for a history chart of `symbol`: the configured override
    /// if any, otherwise the asset-class default.
    #[must_use]
    pub fn granularity_for(&self, symbol: &str) -> GranularityTable {
        self.override_for(symbol)
            .cloned()
            .unwrap_or_else(|| AssetClass::from_symbol(symbol).granularity_table())
    }

    /// Rounding table for a prediction chart of `symbol`: the configured
    /// override if any, otherwise the asset class's fixed increment.
    #[must_use]
    pub fn prediction_granularity_for(&self, symbol: &str) -> GranularityTable {
        self.override_for(symbol).cloned().unwrap_or_else(|| {
            let g = AssetClass::from_symbol(symbol).prediction_granularity();
            GranularityTable::from_rows(&[(0.0, g)])
        })
    }
}
