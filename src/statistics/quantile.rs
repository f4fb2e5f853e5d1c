//! Quantile computation with linear interpolation (the R-7 definition).

/// Compute the `p`-quantile of a sample.
///
/// Sorts a copy of the input, so the result is independent of input
/// order. Uses the R-7 definition: with `i = (n - 1) * p`, the result
/// interpolates linearly between the order statistics at `floor(i)` and
/// `ceil(i)`. `p = 0` returns the minimum, `p = 1` the maximum.
///
/// Returns `None` for an empty sample; a missing quantile is data here,
/// not an error.
///
/// # Panics
///
/// Panics if `p` is outside `[0, 1]`.
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    quantile_sorted(&sorted, p)
}

/// Compute the `p`-quantile of an already ascending-sorted sample.
///
/// Same contract as [`quantile`], skipping the sort. Callers that hold
/// sorted data (the sample store does) use this to read several quantiles
/// from one ordering.
///
/// # Panics
///
/// Panics if `p` is outside `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    assert!(
        (0.0..=1.0).contains(&p),
        "quantile probability must be in [0, 1]"
    );

    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(sorted[0]);
    }

    let i = (n - 1) as f64 * p;
    let lo = i.floor() as usize;
    let frac = i - i.floor();

    if lo >= n - 1 {
        return Some(sorted[n - 1]);
    }
    if frac == 0.0 {
        return Some(sorted[lo]);
    }

    // Linear interpolation between adjacent order statistics
    Some(sorted[lo] + frac * (sorted[lo + 1] - sorted[lo]))
}
