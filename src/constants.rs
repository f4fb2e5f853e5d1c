//! Shared constants for the analysis pipeline.

/// Default family-wise significance level for the Holm correction.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Conventional name of the baseline variant within each scenario.
pub const BASELINE_VARIANT: &str = "B0";

/// Default primary metric compared between variants.
pub const DEFAULT_METRIC: &str = "latency_ms";

/// |delta| below this is a negligible effect (Romano et al.).
pub const NEGLIGIBLE_DELTA: f64 = 0.147;

/// |delta| below this (and at least [`NEGLIGIBLE_DELTA`]) is a small effect.
pub const SMALL_DELTA: f64 = 0.33;

/// |delta| below this (and at least [`SMALL_DELTA`]) is a medium effect;
/// anything larger is classified as large.
pub const MEDIUM_DELTA: f64 = 0.474;
