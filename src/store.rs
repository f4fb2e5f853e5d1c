//! Sample store: immutable grouping of records by (scenario, variant).

use std::collections::{BTreeMap, BTreeSet};

use crate::types::SampleRecord;

/// The finite measurements of one (scenario, variant) group.
///
/// `n_total` counts every replicate attempted for the group; each metric's
/// value vector holds only the finite measurements, sorted ascending so
/// order statistics can be read without re-sorting.
#[derive(Debug, Clone, Default)]
pub struct Group {
    n_total: usize,
    values: BTreeMap<String, Vec<f64>>,
}

impl Group {
    /// Number of replicates attempted for this group, usable or not.
    pub fn n_total(&self) -> usize {
        self.n_total
    }

    /// The group's finite values for a metric, sorted ascending.
    ///
    /// Returns an empty slice when the metric was never measured here.
    pub fn values(&self, metric: &str) -> &[f64] {
        self.values.get(metric).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of finite values for a metric.
    pub fn n_numeric(&self, metric: &str) -> usize {
        self.values(metric).len()
    }
}

/// All groups of a batch, built once from the full record collection.
///
/// Grouping keys are exact, case-sensitive string matches. Groups are kept
/// in lexicographic (scenario, variant) order, which makes every
/// downstream iteration independent of the input record order.
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    groups: BTreeMap<(String, String), Group>,
    metrics: BTreeSet<String>,
}

impl SampleSet {
    /// Partition records into groups, discarding non-finite values.
    ///
    /// A record whose metric value is missing or non-finite still counts
    /// toward the group's `n_total`, and the metric name still enters the
    /// batch-wide metric set.
    pub fn from_records(records: &[SampleRecord]) -> Self {
        let mut groups: BTreeMap<(String, String), Group> = BTreeMap::new();
        let mut metrics = BTreeSet::new();

        for record in records {
            let key = (record.scenario.clone(), record.variant.clone());
            let group = groups.entry(key).or_default();
            group.n_total += 1;

            for (name, value) in record.metrics() {
                if !metrics.contains(name) {
                    metrics.insert(name.to_string());
                }
                if let Some(v) = value {
                    if v.is_finite() {
                        group.values.entry(name.to_string()).or_default().push(v);
                    }
                }
            }
        }

        for group in groups.values_mut() {
            for values in group.values.values_mut() {
                values.sort_unstable_by(|a, b| a.total_cmp(b));
            }
        }

        Self { groups, metrics }
    }

    /// Number of groups present in the batch.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when the batch contained no records.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look up one group by exact key.
    pub fn group(&self, scenario: &str, variant: &str) -> Option<&Group> {
        self.groups
            .get(&(scenario.to_string(), variant.to_string()))
    }

    /// Iterate over all groups in (scenario, variant) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Group)> {
        self.groups
            .iter()
            .map(|((scenario, variant), group)| (scenario.as_str(), variant.as_str(), group))
    }

    /// Distinct scenario names, in order.
    pub fn scenarios(&self) -> impl Iterator<Item = &str> {
        let mut last: Option<&str> = None;
        self.groups.keys().filter_map(move |(scenario, _)| {
            if last == Some(scenario.as_str()) {
                None
            } else {
                last = Some(scenario.as_str());
                Some(scenario.as_str())
            }
        })
    }

    /// The variants of one scenario with their groups, in variant order.
    pub fn variants_of<'a>(
        &'a self,
        scenario: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Group)> {
        self.groups
            .iter()
            .filter(move |((s, _), _)| s == scenario)
            .map(|((_, variant), group)| (variant.as_str(), group))
    }

    /// Union of metric names observed anywhere in the batch, sorted.
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(scenario: &str, variant: &str, rep: u32, inp: Option<f64>) -> SampleRecord {
        SampleRecord::new(scenario, variant, rep).with_metric("INP", inp)
    }

    #[test]
    fn groups_by_exact_key() {
        let records = vec![
            record("form", "B0", 1, Some(100.0)),
            record("form", "B0", 2, Some(90.0)),
            record("form", "I2", 1, Some(80.0)),
            record("Form", "B0", 1, Some(70.0)),
        ];
        let set = SampleSet::from_records(&records);

        assert_eq!(set.len(), 3);
        assert_eq!(set.group("form", "B0").unwrap().n_total(), 2);
        // Case-sensitive: "Form" is its own scenario.
        assert_eq!(set.group("Form", "B0").unwrap().n_total(), 1);
        assert!(set.group("form", "I9").is_none());
    }

    #[test]
    fn values_are_sorted_and_finite_only() {
        let records = vec![
            record("s", "v", 1, Some(30.0)),
            record("s", "v", 2, Some(10.0)),
            record("s", "v", 3, Some(f64::NAN)),
            record("s", "v", 4, None),
            record("s", "v", 5, Some(20.0)),
        ];
        let set = SampleSet::from_records(&records);
        let group = set.group("s", "v").unwrap();

        assert_eq!(group.n_total(), 5);
        assert_eq!(group.values("INP"), &[10.0, 20.0, 30.0]);
        assert_eq!(group.n_numeric("INP"), 3);
        assert_eq!(group.values("other"), &[] as &[f64]);
    }

    #[test]
    fn metric_union_includes_missing_only_metrics() {
        let records = vec![
            record("s", "v", 1, Some(1.0)),
            SampleRecord::new("s", "w", 1).with_metric("LoAFsum", None),
        ];
        let set = SampleSet::from_records(&records);
        let names: Vec<&str> = set.metric_names().collect();
        assert_eq!(names, vec!["INP", "LoAFsum"]);
    }

    #[test]
    fn iteration_order_is_input_independent() {
        let forward = vec![
            record("a", "x", 1, Some(1.0)),
            record("b", "y", 1, Some(2.0)),
            record("a", "y", 1, Some(3.0)),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let keys = |set: &SampleSet| -> Vec<(String, String)> {
            set.iter()
                .map(|(s, v, _)| (s.to_string(), v.to_string()))
                .collect()
        };

        assert_eq!(
            keys(&SampleSet::from_records(&forward)),
            keys(&SampleSet::from_records(&reversed))
        );
    }

    #[test]
    fn scenarios_are_deduplicated() {
        let records = vec![
            record("a", "x", 1, Some(1.0)),
            record("a", "y", 1, Some(2.0)),
            record("b", "x", 1, Some(3.0)),
        ];
        let set = SampleSet::from_records(&records);
        let scenarios: Vec<&str> = set.scenarios().collect();
        assert_eq!(scenarios, vec!["a", "b"]);

        let variants: Vec<&str> = set.variants_of("a").map(|(v, _)| v).collect();
        assert_eq!(variants, vec!["x", "y"]);
    }
}
