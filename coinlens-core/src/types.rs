//! Re-export of foundational types from `coinlens-types`.
// Consolidated re-exports so downstream crates can depend on `coinlens-core` only

pub use coinlens_types::CoinlensError;

pub use coinlens_types::{AssetClass, ChartConfig, GranularityStep, GranularityTable, Tier, TierCaps};

pub use coinlens_types::{AxisRange, MergedSeries, TimePoint};

pub use coinlens_types::{AggregateSentiment, SentimentReading};

pub use coinlens_types::{PredictionPayload, PriceHistory, SentimentPayload};
