//! Coinlens data transfer objects, chart configuration, and the shared error type.
#![warn(missing_docs)]

mod asset;
mod config;
mod error;
mod granularity;
mod payload;
mod sentiment;
mod series;
mod tier;

pub use asset::AssetClass;
pub use config::{ChartConfig, TierCaps};
pub use error::CoinlensError;
pub use granularity::{GranularityStep, GranularityTable};
pub use payload::{PredictionPayload, PriceHistory, SentimentPayload};
pub use sentiment::{AggregateSentiment, SentimentReading};
pub use series::{AxisRange, MergedSeries, TimePoint};
pub use tier::Tier;
