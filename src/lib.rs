//! # latency-lab
//!
//! Decide which variants of a latency experiment differ meaningfully from a
//! baseline, with nonparametric statistics and family-wise error control.
//!
//! The crate consumes already-collected sample records, one per
//! `(scenario, variant, replicate)`, and produces:
//! - Per-group aggregate summaries (count, mean, median, p75, q98)
//! - Per-variant Mann-Whitney U tests against the scenario's baseline,
//!   with mid-rank tie handling and a continuity-corrected normal
//!   approximation
//! - Cliff's delta effect sizes with magnitude levels
//! - Holm-Bonferroni corrected p-values, one correction family per scenario
//!
//! Everything is rank-based: no normality assumption, robust to outliers.
//! The analysis is a pure batch computation over an immutable snapshot, so
//! results are deterministic and independent of input record order.
//!
//! ## Quick Start
//!
//! ```ignore
//! use latency_lab::{Lab, SampleRecord};
//!
//! let records: Vec<SampleRecord> = collect_from_somewhere();
//!
//! let report = Lab::new()
//!     .metric("INP")
//!     .alpha(0.05)
//!     .run(&records);
//!
//! for c in report.comparisons.iter().filter(|c| c.significant) {
//!     println!("{}/{}: p={:.4} delta={:.2}", c.scenario, c.variant, c.p_holm, c.cliffs_delta);
//! }
//! ```
//!
//! Measurement collection and report rendering are deliberately out of
//! scope; feed records in via [`parse_records`] or construct them with
//! [`SampleRecord::new`], and hand the [`LabReport`] to whatever exporter
//! you use.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod ingest;
mod lab;
mod result;
mod store;
mod types;

// Functional modules
pub mod analysis;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use config::Config;
pub use constants::{BASELINE_VARIANT, DEFAULT_ALPHA, DEFAULT_METRIC};
pub use ingest::{parse_records, IngestError};
pub use lab::Lab;
pub use result::{AggregateSummary, Comparison, EffectLevel, LabReport};
pub use statistics::{NormalCdf, UnitNormal};
pub use store::{Group, SampleSet};
pub use types::SampleRecord;

/// Convenience function for running an analysis with default configuration.
///
/// Equivalent to `Lab::new().run(records)`: baseline variant `"B0"`,
/// primary metric `"latency_ms"`, alpha 0.05.
///
/// # Example
///
/// ```ignore
/// let report = latency_lab::compare(&records);
/// ```
pub fn compare(records: &[SampleRecord]) -> LabReport {
    Lab::new().run(records)
}
