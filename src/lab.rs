//! Main `Lab` entry point and report assembly.

use std::fmt;
use std::sync::Arc;

use crate::analysis::{cliffs_delta, holm_adjust, summarize, u_test, CliffsDelta};
use crate::config::Config;
use crate::result::{AggregateSummary, Comparison, LabReport};
use crate::statistics::{NormalCdf, UnitNormal};
use crate::store::SampleSet;
use crate::types::SampleRecord;

/// Main entry point for a comparison run.
///
/// Configure with the builder methods, then call [`run`](Lab::run) with
/// the full record batch. The run is a pure function of its input: one
/// immutable snapshot in, one immutable report out, no state kept
/// between runs.
///
/// # Example
///
/// ```ignore
/// use latency_lab::Lab;
///
/// let report = Lab::new()
///     .metric("INP")
///     .baseline("B0")
///     .alpha(0.05)
///     .run(&records);
/// ```
#[derive(Clone)]
pub struct Lab {
    config: Config,
    cdf: Arc<dyn NormalCdf>,
}

impl Default for Lab {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lab")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Lab {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            cdf: Arc::new(UnitNormal::new()),
        }
    }

    /// Set the family-wise significance level.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Set the baseline variant name.
    pub fn baseline(mut self, name: impl Into<String>) -> Self {
        self.config.baseline = name.into();
        self
    }

    /// Set the primary metric compared between variants.
    pub fn metric(mut self, name: impl Into<String>) -> Self {
        self.config.metric = name.into();
        self
    }

    /// Inject an alternative standard normal CDF.
    ///
    /// Any implementation accurate to ~1e-6 absolute error yields the
    /// same significance decisions as the default.
    pub fn normal_cdf(mut self, cdf: impl NormalCdf + 'static) -> Self {
        self.cdf = Arc::new(cdf);
        self
    }

    /// Run the analysis over one batch of records.
    ///
    /// Produces aggregate summaries for every group and metric in the
    /// batch, and comparisons for every non-baseline variant in every
    /// scenario that has a baseline group. Scenarios without a baseline
    /// are omitted from comparisons; comparisons with an empty arm are
    /// skipped and noted in the report's warnings.
    pub fn run(&self, records: &[SampleRecord]) -> LabReport {
        let set = SampleSet::from_records(records);

        let summaries = self.summarize_groups(&set);

        let scenarios: Vec<&str> = set.scenarios().collect();
        let families = self.map_scenarios(&set, &scenarios);

        let mut comparisons = Vec::new();
        let mut warnings = Vec::new();
        for (family, family_warnings) in families {
            comparisons.extend(family);
            warnings.extend(family_warnings);
        }

        for warning in &warnings {
            eprintln!("[latency-lab] {warning}");
        }

        LabReport {
            summaries,
            comparisons,
            warnings,
        }
    }

    fn summarize_groups(&self, set: &SampleSet) -> Vec<AggregateSummary> {
        let metrics: Vec<&str> = set.metric_names().collect();
        let mut summaries = Vec::with_capacity(set.len() * metrics.len());

        for (scenario, variant, group) in set.iter() {
            for metric in &metrics {
                let stats = summarize(group, metric);
                summaries.push(AggregateSummary {
                    scenario: scenario.to_string(),
                    variant: variant.to_string(),
                    metric: metric.to_string(),
                    n_total: stats.n_total,
                    n_numeric: stats.n_numeric,
                    mean: stats.mean,
                    median: stats.median,
                    p75: stats.p75,
                    q98: stats.q98,
                });
            }
        }
        summaries
    }

    /// Compute one scenario's comparison family.
    ///
    /// Returns nothing when the scenario has no baseline group; that is
    /// expected input, not an error.
    fn scenario_family(&self, set: &SampleSet, scenario: &str) -> (Vec<Comparison>, Vec<String>) {
        let mut warnings = Vec::new();

        let Some(base_group) = set.group(scenario, &self.config.baseline) else {
            return (Vec::new(), warnings);
        };
        let base_values = base_group.values(&self.config.metric);

        struct Tested {
            variant: String,
            n_variant: usize,
            u: f64,
            p_raw: f64,
            delta: CliffsDelta,
        }

        let mut tested = Vec::new();
        for (variant, group) in set.variants_of(scenario) {
            if variant == self.config.baseline {
                continue;
            }
            let values = group.values(&self.config.metric);
            if base_values.is_empty() || values.is_empty() {
                warnings.push(format!(
                    "skipping {scenario}/{variant}: empty arm for metric `{}`",
                    self.config.metric
                ));
                continue;
            }

            // Variant first: positive delta means the variant is slower
            let Some(test) = u_test(values, base_values, self.cdf.as_ref()) else {
                continue;
            };
            let delta = cliffs_delta(values, base_values);

            tested.push(Tested {
                variant: variant.to_string(),
                n_variant: values.len(),
                u: test.u,
                p_raw: test.p,
                delta,
            });
        }

        let p_raw: Vec<f64> = tested.iter().map(|t| t.p_raw).collect();
        let p_holm = holm_adjust(&p_raw);

        let comparisons = tested
            .into_iter()
            .zip(p_holm)
            .map(|(t, p_holm)| Comparison {
                scenario: scenario.to_string(),
                variant: t.variant,
                n_base: base_values.len(),
                n_variant: t.n_variant,
                u: t.u,
                p_raw: t.p_raw,
                p_holm,
                significant: p_holm <= self.config.alpha,
                cliffs_delta: t.delta.delta,
                effect: t.delta.level,
            })
            .collect();

        (comparisons, warnings)
    }

    /// Scenario families are independent, so they can fan out across
    /// threads; collection preserves scenario order either way.
    #[cfg(feature = "parallel")]
    fn map_scenarios(
        &self,
        set: &SampleSet,
        scenarios: &[&str],
    ) -> Vec<(Vec<Comparison>, Vec<String>)> {
        use rayon::prelude::*;

        scenarios
            .par_iter()
            .map(|scenario| self.scenario_family(set, scenario))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn map_scenarios(
        &self,
        set: &SampleSet,
        scenarios: &[&str],
    ) -> Vec<(Vec<Comparison>, Vec<String>)> {
        scenarios
            .iter()
            .map(|scenario| self.scenario_family(set, scenario))
            .collect()
    }
}
