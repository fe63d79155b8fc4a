//! Multi-source sentiment aggregation.

use std::collections::BTreeMap;

use crate::{AggregateSentiment, SentimentPayload, SentimentReading};


/// Mean of `values` summed in a canonical order, so any permutation of the
/// input yields a bit-identical result.
fn canonical_mean(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let sum: f64 = values.iter().sum();
    #[allow(clippy::cast_precision_loss)]
    Some(sum / values.len() as f64)
}

fn present_scores<K, I>(readings: I) -> Vec<f64>
where
    I: IntoIterator<Item = (K, Option<f64>)>,
{
    readings
        .into_iter()
        .filter_map(|(_, v)| v)
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(-1.0, 1.0))
        .collect()
}

/// Average the present per-source readings.
///
/// Absent entries and non-finite numbers are excluded (not zeroed); values
/// outside `[-1, 1]` are clamped into range and still count as a source.
/// With no usable reading the neutral default `0.0` is
/// returned; use [`aggregate_sentiment`] when "no data" must be told apart
/// from a measured neutral score.
///
/// ```
/// use coinlens_core::aggregate;
///
/// assert_eq!(aggregate(Vec::<(&str, Option<f64>)>::new()), 0.0);
/// assert_eq!(aggregate([("a", Some(0.5)), ("b", None), ("c", Some(-0.5))]), 0.0);
/// assert!((aggregate([("a", Some(0.4)), ("b", Some(-0.2))]) - 0.1).abs() < 1e-12);
/// ```
pub fn aggregate<K, I>(readings: I) -> f64
where
    I: IntoIterator<Item = (K, Option<f64>)>,
{
    canonical_mean(present_scores(readings)).unwrap_or(0.0)
}

/// Average the present per-source readings for `asset`, reporting how many
/// sources contributed.
pub fn aggregate_sentiment<K, I>(asset: impl Into<String>, readings: I) -> AggregateSentiment
where
    I: IntoIterator<Item = (K, Option<f64>)>,
{
    let scores = present_scores(readings);
    let source_count = scores.len();
    let average = canonical_mean(scores).unwrap_or(0.0);
    AggregateSentiment {
        asset: asset.into(),
        average,
        source_count,
    }
}

/// Aggregate the `<source>_sentiment` entries of a provider payload.
pub fn aggregate_payload(asset: impl Into<String>, payload: &SentimentPayload) -> AggregateSentiment {
    aggregate_sentiment(asset, payload.readings())
}

/// Aggregate every asset of a sentiment response independently.
pub fn aggregate_assets(
    payloads: &BTreeMap<String, SentimentPayload>,
) -> BTreeMap<String, AggregateSentiment> {
    payloads
        .iter()
        .map(|(asset, p)| (asset.clone(), aggregate_payload(asset.as_str(), p)))
        .collect()
}

/// Average per-headline polarity scores into one source reading.
///
/// Non-finite scores are ignored and the mean is clamped to `[-1, 1]`; a
/// source with no scores reads `0.0`.
pub fn reading_from_scores(source: impl Into<String>, scores: &[f64]) -> SentimentReading {
    let finite: Vec<f64> = scores.iter().copied().filter(|s| s.is_finite()).collect();
    let average = canonical_mean(finite).map_or(0.0, |m| m.clamp(-1.0, 1.0));
    SentimentReading {
        source: source.into(),
        average,
    }
}

/// Map a score in `[-1, 1]` to a bar width in percent (`-1 → 0`, `0 → 50`,
/// `1 → 100`). Out-of-range scores are clamped; NaN maps to 50.
#[must_use]
pub fn score_to_percent(score: f64) -> u8 {
    let score = if score.is_nan() {
        0.0
    } else {
        score.clamp(-1.0, 1.0)
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (((score + 1.0) / 2.0) * 100.0).round() as u8;
    pct.min(100)
}
