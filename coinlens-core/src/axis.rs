//! "Nice" value-axis bounds and tick steps.

use crate::{AxisRange, ChartConfig, CoinlensError, GranularityTable};

/// Gridline count used when the caller has no preference.
pub const DEFAULT_TARGET_TICKS: usize = 7;

/// Relative padding added on both sides of the data before rounding.
const BUFFER_RATIO: f64 = 0.1;

/// Padding used for a flat series, where the relative buffer would be zero.
const FLAT_BUFFER: f64 = 1.0;

/// Compute rounded axis bounds and an even tick step for `values`.
///
/// 1. `raw_min`/`raw_max` over the finite values.
/// 2. `buffer = 0.1 * (raw_max - raw_min)`, or `1` for a flat series.
/// 3. `granularity = table.select(raw_max - raw_min)`.
/// 4. `min = floor((raw_min - buffer) / g) * g`, `max = ceil((raw_max + buffer) / g) * g`.
/// 5. If `min == max`, `max = min + g * (target_ticks - 1)`.
/// 6. `step_size = (max - min) / (target_ticks - 1)`.
///
/// The result always satisfies `min <= raw_min`, `max >= raw_max`,
/// `step_size > 0`, and spans exactly `target_ticks - 1` steps.
///
/// ```
/// use coinlens_core::{compute_axis_range, AssetClass};
///
/// let table = AssetClass::Bitcoin.granularity_table();
/// let range = compute_axis_range(&[42_000.0, 61_000.0], 7, &table).unwrap();
/// assert_eq!(range.min, 40_000.0);
/// assert_eq!(range.max, 65_000.0);
/// assert!(range.step_size > 0.0);
///
/// // Flat series still produce a usable range.
/// let flat = compute_axis_range(&[100.0, 100.0, 100.0], 7, &table).unwrap();
/// assert!(flat.min < flat.max);
/// ```
///
/// # Errors
/// - `Err(CoinlensError::InsufficientData)` if `values` holds no finite number;
///   callers should check for data before asking for an axis.
/// - `Err(CoinlensError::InvalidArg)` if `target_ticks < 2`, or no finite
///   positive step exists. This happens when the spread overflows `f64` (for
///   example `[f64::MAX, -f64::MAX]`) or the values dwarf the granularity.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(target = "coinlens::axis", skip(values, table), fields(n = values.len()), err)
)]
pub fn compute_axis_range(
    values: &[f64],
    target_ticks: usize,
    table: &GranularityTable,
) -> Result<AxisRange, CoinlensError> {
    if target_ticks < 2 {
        return Err(CoinlensError::InvalidArg(format!(
            "target_ticks must be at least 2, got {target_ticks}"
        )));
    }
    let (raw_min, raw_max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })
        .ok_or_else(|| CoinlensError::insufficient_data("axis range over no finite values"))?;

    let spread = raw_max - raw_min;
    let buffer = if spread == 0.0 {
        FLAT_BUFFER
    } else {
        spread * BUFFER_RATIO
    };
    let g = table.select(spread);

    let mut nice_min = ((raw_min - buffer) / g).floor() * g;
    let mut nice_max = ((raw_max + buffer) / g).ceil() * g;
    // Float error near huge magnitudes can leave a bound just inside the data.
    if nice_min > raw_min {
        nice_min = (nice_min - g).min(raw_min);
    }
    if nice_max < raw_max {
        nice_max = (nice_max + g).max(raw_max);
    }

    #[allow(clippy::cast_precision_loss)]
    let intervals = (target_ticks - 1) as f64;
    if nice_min == nice_max {
        nice_max = nice_min + g * intervals;
    }
    let step_size = (nice_max - nice_min) / intervals;
    if !(step_size.is_finite() && step_size > 0.0) {
        return Err(CoinlensError::InvalidArg(format!(
            "cannot build a positive tick step for values in [{raw_min}, {raw_max}] at granularity {g}"
        )));
    }

    Ok(AxisRange {
        min: nice_min,
        max: nice_max,
        step_size,
    })
}

/// [`compute_axis_range`] with the tick count and rounding table `config`
/// resolves for a history chart of `symbol`.
///
/// # Errors
/// See [`compute_axis_range`].
pub fn axis_range_for_symbol(
    values: &[f64],
    symbol: &str,
    config: &ChartConfig,
) -> Result<AxisRange, CoinlensError> {
    compute_axis_range(values, config.target_ticks, &config.granularity_for(symbol))
}
