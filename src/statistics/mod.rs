//! Statistical primitives for the comparison pipeline.
//!
//! This module provides the order-statistic and rank machinery the
//! analysis layer is built on:
//! - Quantile computation with linear interpolation between order
//!   statistics
//! - Mid-rank assignment with tie bookkeeping for rank-sum tests
//! - The standard normal CDF as an injectable capability

mod normal;
mod quantile;
mod rank;

pub use normal::{NormalCdf, UnitNormal};
pub use quantile::{quantile, quantile_sorted};
pub use rank::{ranks_with_ties, tie_term};
