//! Holm-Bonferroni step-down correction for one family of tests.

/// Adjust a family of raw p-values with the Holm-Bonferroni step-down
/// procedure.
///
/// The returned vector is positional: `adjusted[i]` corresponds to
/// `p_raw[i]`. In ascending raw order, test `i` of `m` is multiplied by
/// `m - i`, clipped to 1, then monotonized with a running maximum so the
/// adjusted sequence is non-decreasing. Every adjusted value is at least
/// its raw value.
///
/// Families must never span scenarios; the caller builds one family per
/// scenario.
pub fn holm_adjust(p_raw: &[f64]) -> Vec<f64> {
    let m = p_raw.len();
    let mut order: Vec<usize> = (0..m).collect();
    order.sort_unstable_by(|&a, &b| p_raw[a].total_cmp(&p_raw[b]));

    let mut adjusted = vec![0.0; m];
    let mut running_max = 0.0f64;
    for (i, &idx) in order.iter().enumerate() {
        let step = (p_raw[idx] * (m - i) as f64).min(1.0);
        running_max = running_max.max(step);
        adjusted[idx] = running_max;
    }
    adjusted
}
