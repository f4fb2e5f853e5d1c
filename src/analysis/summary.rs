//! Per-group descriptive statistics.

use crate::statistics::quantile_sorted;
use crate::store::Group;

/// Descriptive statistics of one metric within one group.
///
/// Statistic fields are `None` when the group has no finite values for
/// the metric; `n_total` still reports how many replicates were
/// attempted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSummary {
    /// Replicates attempted for the group.
    pub n_total: usize,
    /// Finite values that entered the statistics.
    pub n_numeric: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// 50th percentile.
    pub median: Option<f64>,
    /// 75th percentile.
    pub p75: Option<f64>,
    /// 98th percentile, the far tail at lab sample sizes.
    pub q98: Option<f64>,
}

/// Summarize one metric of one group.
///
/// The group's values are already sorted, so all quantiles read from a
/// single ordering. An empty metric produces a summary of `None`s, never
/// an error.
pub fn summarize(group: &Group, metric: &str) -> MetricSummary {
    let values = group.values(metric);
    let n_numeric = values.len();

    let mean = if n_numeric > 0 {
        Some(values.iter().sum::<f64>() / n_numeric as f64)
    } else {
        None
    };

    MetricSummary {
        n_total: group.n_total(),
        n_numeric,
        mean,
        median: quantile_sorted(values, 0.5),
        p75: quantile_sorted(values, 0.75),
        q98: quantile_sorted(values, 0.98),
    }
}
