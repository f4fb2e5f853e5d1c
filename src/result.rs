//! Report types produced by a lab analysis.

use serde::{Deserialize, Serialize};

use crate::constants::{MEDIUM_DELTA, NEGLIGIBLE_DELTA, SMALL_DELTA};

/// Complete result of one analysis run.
///
/// The report is an in-memory structure handed to exporters; it carries
/// no rendering. Summaries cover every (scenario, variant, metric) triple
/// present in the batch; comparisons cover every non-baseline variant of
/// every scenario that has a baseline group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabReport {
    /// Per-group descriptive statistics, one row per metric.
    pub summaries: Vec<AggregateSummary>,

    /// Variant-versus-baseline test results, Holm-corrected per scenario.
    pub comparisons: Vec<Comparison>,

    /// Human-readable notes about skipped comparisons (empty-arm cases).
    pub warnings: Vec<String>,
}

impl LabReport {
    /// Comparisons that stayed significant after Holm correction.
    pub fn significant(&self) -> impl Iterator<Item = &Comparison> {
        self.comparisons.iter().filter(|c| c.significant)
    }
}

/// Descriptive statistics for one (scenario, variant, metric) triple.
///
/// Statistic fields are `None` when no finite value was observed;
/// `n_total` still counts the replicates attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Experiment family.
    pub scenario: String,
    /// Treatment condition.
    pub variant: String,
    /// Metric the statistics describe.
    pub metric: String,
    /// Replicates attempted.
    pub n_total: usize,
    /// Finite values used in the statistics.
    pub n_numeric: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// 50th percentile.
    pub median: Option<f64>,
    /// 75th percentile.
    pub p75: Option<f64>,
    /// 98th percentile.
    pub q98: Option<f64>,
}

/// One variant tested against its scenario's baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Experiment family.
    pub scenario: String,
    /// The non-baseline variant under test.
    pub variant: String,
    /// Finite baseline values that entered the test.
    pub n_base: usize,
    /// Finite variant values that entered the test.
    pub n_variant: usize,
    /// Mann-Whitney statistic, `min(U1, U2)`.
    pub u: f64,
    /// Two-sided p-value before correction.
    pub p_raw: f64,
    /// Holm-corrected p-value; always >= `p_raw`.
    pub p_holm: f64,
    /// Whether `p_holm <= alpha` for the configured alpha.
    pub significant: bool,
    /// Cliff's delta of variant versus baseline; positive means the
    /// variant tends to be larger (slower).
    pub cliffs_delta: f64,
    /// Magnitude classification of the delta.
    pub effect: EffectLevel,
}

/// Magnitude of a Cliff's delta, per the Romano et al. thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EffectLevel {
    /// |delta| < 0.147: no practically relevant difference.
    Negligible,
    /// |delta| in [0.147, 0.33).
    Small,
    /// |delta| in [0.33, 0.474).
    Medium,
    /// |delta| >= 0.474.
    Large,
}

impl EffectLevel {
    /// Classify a delta by absolute magnitude.
    pub fn from_delta(delta: f64) -> Self {
        let magnitude = delta.abs();
        if magnitude < NEGLIGIBLE_DELTA {
            EffectLevel::Negligible
        } else if magnitude < SMALL_DELTA {
            EffectLevel::Small
        } else if magnitude < MEDIUM_DELTA {
            EffectLevel::Medium
        } else {
            EffectLevel::Large
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_level_serializes_lowercase() {
        let json = serde_json::to_string(&EffectLevel::Negligible).unwrap();
        assert_eq!(json, "\"negligible\"");
        let back: EffectLevel = serde_json::from_str("\"large\"").unwrap();
        assert_eq!(back, EffectLevel::Large);
    }

    #[test]
    fn significant_filter() {
        let comparison = |significant| Comparison {
            scenario: "s".into(),
            variant: "v".into(),
            n_base: 5,
            n_variant: 5,
            u: 0.0,
            p_raw: 0.01,
            p_holm: if significant { 0.03 } else { 0.2 },
            significant,
            cliffs_delta: 1.0,
            effect: EffectLevel::Large,
        };
        let report = LabReport {
            summaries: vec![],
            comparisons: vec![comparison(true), comparison(false)],
            warnings: vec![],
        };
        assert_eq!(report.significant().count(), 1);
    }
}
