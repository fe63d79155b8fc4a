use crate::{Tier, TierCaps};

/// Indices selected when thinning a series of `len` points to about `cap`.
///
/// - `cap == None` or `len <= cap`: every index (identity).
/// - Otherwise walk `0, stride, 2*stride, ...` with
///   `stride = max(1, ceil(len / cap))`, then append `len - 1` if the walk did
///   not land on it.
///
/// The result is strictly ascending, starts at `0`, ends at `len - 1`, and has
/// at most `cap + 1` entries. It depends only on `len` and `cap`.
#[must_use]
pub fn sample_indices(len: usize, cap: Option<usize>) -> Vec<usize> {
    let Some(cap) = cap else {
        return (0..len).collect();
    };
    let cap = cap.max(1);
    if len <= cap {
        return (0..len).collect();
    }
    let stride = len.div_ceil(cap).max(1);
    let mut out: Vec<usize> = (0..len).step_by(stride).collect();
    if out.last() != Some(&(len - 1)) {
        out.push(len - 1);
    }
    out
}

/// Thin `series` to about `cap` points, always keeping the first and last.
///
/// Points are selected, never reordered or interpolated. An empty input
/// yields an empty output.
#[must_use]
pub fn downsample_with_cap<T: Clone>(series: &[T], cap: Option<usize>) -> Vec<T> {
    if cap.is_none_or(|c| series.len() <= c) {
        return series.to_vec();
    }
    let picked: Vec<T> = sample_indices(series.len(), cap)
        .into_iter()
        .map(|i| series[i].clone())
        .collect();
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "coinlens::timeseries",
        input = series.len(),
        output = picked.len(),
        "downsampled series"
    );
    picked
}

/// Thin `series` for display in `tier` using the default caps
/// (`7d`: all, `30d`: 15, `6m`: 24, `1y`: 30).
///
/// The long tiers approximate "one sample per period" by a fixed stride over
/// the point count; samples are not aligned to calendar-month boundaries.
///
/// ```
/// use coinlens_core::{downsample, Tier};
///
/// let prices: Vec<u32> = (0..90).collect();
/// let shown = downsample(&prices, Tier::Long);
/// assert!(shown.len() <= 25);
/// assert_eq!(shown.first(), Some(&0));
/// assert_eq!(shown.last(), Some(&89));
///
/// let week: Vec<u32> = (0..7).collect();
/// assert_eq!(downsample(&week, Tier::Short), week);
/// ```
#[must_use]
pub fn downsample<T: Clone>(series: &[T], tier: Tier) -> Vec<T> {
    downsample_with_caps(series, tier, &TierCaps::default())
}

/// Thin `series` for display in `tier` using caller-supplied caps.
#[must_use]
pub fn downsample_with_caps<T: Clone>(series: &[T], tier: Tier, caps: &TierCaps) -> Vec<T> {
    downsample_with_cap(series, caps.cap(tier))
}
