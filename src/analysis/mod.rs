//! Analysis pipeline for variant-versus-baseline comparisons.
//!
//! This module implements the per-comparison machinery the report
//! assembler orchestrates:
//!
//! 1. **Summaries** ([`summary`]): per-group descriptive statistics
//! 2. **Hypothesis test** ([`mann_whitney`]): tie-corrected Mann-Whitney U
//! 3. **Effect size** ([`effect`]): Cliff's delta with magnitude levels
//! 4. **Correction** ([`holm`]): Holm-Bonferroni step-down per scenario

mod effect;
mod holm;
mod mann_whitney;
mod summary;

pub use effect::{cliffs_delta, CliffsDelta};
pub use holm::holm_adjust;
pub use mann_whitney::{u_test, UTest};
pub use summary::{summarize, MetricSummary};
