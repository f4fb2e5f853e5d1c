//! Standard normal CDF as an injectable capability.
//!
//! The hypothesis test only needs `Phi(|z|)` to turn a z-score into a
//! two-sided p-value. The concrete approximation is deliberately not part
//! of the test's contract: any implementation accurate to about 1e-6
//! absolute error produces identical significance decisions at standard
//! alpha thresholds. The default uses the error-function-based CDF from
//! `statrs`, which is accurate to machine precision.

use statrs::distribution::{ContinuousCDF, Normal};

/// The standard normal cumulative distribution function.
///
/// Implementations must be deterministic and accurate to at least ~1e-6
/// absolute error over the real line.
pub trait NormalCdf: Send + Sync {
    /// `Phi(z)`, the probability that a standard normal variate is <= `z`.
    fn cdf(&self, z: f64) -> f64;
}

/// Default [`NormalCdf`] backed by `statrs`.
#[derive(Debug, Clone)]
pub struct UnitNormal {
    dist: Normal,
}

impl UnitNormal {
    /// Create the standard normal distribution.
    pub fn new() -> Self {
        Self {
            dist: Normal::new(0.0, 1.0).expect("unit normal parameters are valid"),
        }
    }
}

impl Default for UnitNormal {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalCdf for UnitNormal {
    fn cdf(&self, z: f64) -> f64 {
        self.dist.cdf(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        let normal = UnitNormal::new();
        assert!((normal.cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((normal.cdf(1.96) - 0.975_002_1).abs() < 1e-6);
        assert!((normal.cdf(-1.96) - 0.024_997_9).abs() < 1e-6);
    }

    #[test]
    fn tails_saturate() {
        let normal = UnitNormal::new();
        assert!(normal.cdf(10.0) > 1.0 - 1e-12);
        assert!(normal.cdf(-10.0) < 1e-12);
    }

    #[test]
    fn monotone() {
        let normal = UnitNormal::new();
        let mut previous = 0.0;
        for step in -40..=40 {
            let value = normal.cdf(step as f64 / 10.0);
            assert!(value >= previous);
            previous = value;
        }
    }
}
