//! Typed sample records consumed by the analysis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One replicate of one variant of one scenario, with its measured metrics.
///
/// Records are immutable once constructed. A metric entry of `None` means
/// the replicate produced no usable measurement for that metric; the
/// replicate still counts toward `n_total` in aggregate summaries. Values
/// that are not finite are treated the same as `None` during grouping.
///
/// # Example
///
/// ```ignore
/// let record = SampleRecord::new("checkout", "B0", 1)
///     .with_metric("INP", Some(184.0))
///     .with_metric("LoAFsum", None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Experiment family this record belongs to.
    pub scenario: String,
    /// Treatment condition within the scenario.
    pub variant: String,
    /// 1-based index of the repeated measurement.
    pub replicate: u32,
    metrics: BTreeMap<String, Option<f64>>,
}

impl SampleRecord {
    /// Create a record with no metrics attached yet.
    pub fn new(scenario: impl Into<String>, variant: impl Into<String>, replicate: u32) -> Self {
        Self {
            scenario: scenario.into(),
            variant: variant.into(),
            replicate,
            metrics: BTreeMap::new(),
        }
    }

    /// Attach a named metric value. `None` records an attempted-but-missing
    /// measurement.
    pub fn with_metric(mut self, name: impl Into<String>, value: Option<f64>) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    /// Look up a metric value by name. Returns `None` both when the metric
    /// is absent and when it was recorded as missing.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied().flatten()
    }

    /// Iterate over the record's metric entries in name order.
    pub fn metrics(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.metrics.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
