//! Configuration for a lab analysis run.

use crate::constants::{BASELINE_VARIANT, DEFAULT_ALPHA, DEFAULT_METRIC};

/// Configuration options for [`Lab`](crate::Lab).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Family-wise significance level for Holm-corrected p-values
    /// (default: 0.05).
    ///
    /// A comparison is reported significant iff `p_holm <= alpha`.
    pub alpha: f64,

    /// Name of the baseline variant within each scenario (default: `"B0"`).
    ///
    /// Matching is exact and case-sensitive. Scenarios with no group under
    /// this name are excluded from comparisons entirely.
    pub baseline: String,

    /// Primary metric compared between variants (default: `"latency_ms"`).
    ///
    /// Aggregate summaries cover every metric in the batch; hypothesis
    /// tests and effect sizes are computed for this metric only.
    pub metric: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            baseline: BASELINE_VARIANT.to_string(),
            metric: DEFAULT_METRIC.to_string(),
        }
    }
}
