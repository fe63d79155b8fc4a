//! Rounding granularity tables used to pick "nice" axis bounds.

use serde::{Deserialize, Serialize};

use crate::CoinlensError;

/// One row of a [`GranularityTable`]: when the value range strictly exceeds
/// `threshold`, bounds are rounded to multiples of `granularity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GranularityStep {
    /// Range threshold (exclusive lower bound).
    pub threshold: f64,
    /// Rounding increment selected above the threshold.
    pub granularity: f64,
}

impl From<(f64, f64)> for GranularityStep {
    fn from((threshold, granularity): (f64, f64)) -> Self {
        Self {
            threshold,
            granularity,
        }
    }
}

/// Ordered `(threshold, granularity)` lookup, scanned from the largest
/// threshold down.
///
/// Construction validates the rows and sorts them by descending threshold, so
/// the lookup never depends on the order rows were supplied in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GranularityStep>", into = "Vec<GranularityStep>")]
pub struct GranularityTable {
    steps: Vec<GranularityStep>,
}

impl GranularityTable {
    /// Build a table from `(threshold, granularity)` rows.
    ///
    /// # Errors
    /// Returns `Err(CoinlensError::InvalidArg)` if the table is empty, a
    /// threshold is negative or non-finite, a granularity is not a finite
    /// positive number, or two rows share a threshold.
    pub fn new<I, S>(steps: I) -> Result<Self, CoinlensError>
    where
        I: IntoIterator<Item = S>,
        S: Into<GranularityStep>,
    {
        let mut steps: Vec<GranularityStep> = steps.into_iter().map(Into::into).collect();
        if steps.is_empty() {
            return Err(CoinlensError::InvalidArg(
                "granularity table must have at least one row".into(),
            ));
        }
        for s in &steps {
            if !s.threshold.is_finite() || s.threshold < 0.0 {
                return Err(CoinlensError::InvalidArg(format!(
                    "granularity threshold must be finite and non-negative, got {}",
                    s.threshold
                )));
            }
            if !s.granularity.is_finite() || s.granularity <= 0.0 {
                return Err(CoinlensError::InvalidArg(format!(
                    "granularity must be finite and positive, got {}",
                    s.granularity
                )));
            }
        }
        steps.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));
        if steps.windows(2).any(|w| w[0].threshold == w[1].threshold) {
            return Err(CoinlensError::InvalidArg(
                "granularity table has duplicate thresholds".into(),
            ));
        }
        Ok(Self { steps })
    }

    /// Build a table from rows already known to be valid, highest threshold first.
    pub(crate) fn from_rows(rows: &[(f64, f64)]) -> Self {
        Self {
            steps: rows.iter().copied().map(GranularityStep::from).collect(),
        }
    }

    /// A single-row table that always rounds to `granularity`.
    ///
    /// # Errors
    /// Returns `Err(CoinlensError::InvalidArg)` if `granularity` is not a
    /// finite positive number.
    pub fn fixed(granularity: f64) -> Result<Self, CoinlensError> {
        Self::new([(0.0, granularity)])
    }

    /// Select the granularity for a value range.
    ///
    /// The first row (largest threshold first) whose threshold is strictly
    /// exceeded by `range` wins; if none is exceeded the row with the smallest
    /// threshold is used.
    #[must_use]
    pub fn select(&self, range: f64) -> f64 {
        self.steps
            .iter()
            .find(|s| range > s.threshold)
            .or_else(|| self.steps.last())
            .map_or(1.0, |s| s.granularity)
    }

    /// Rows in descending threshold order.
    #[must_use]
    pub fn steps(&self) -> &[GranularityStep] {
        &self.steps
    }
}

impl TryFrom<Vec<GranularityStep>> for GranularityTable {
    type Error = CoinlensError;

    fn try_from(steps: Vec<GranularityStep>) -> Result<Self, Self::Error> {
        Self::new(steps)
    }
}

impl From<GranularityTable> for Vec<GranularityStep> {
    fn from(table: GranularityTable) -> Self {
        table.steps
    }
}
