//! Mid-rank assignment and tie bookkeeping for rank-sum tests.

/// Assign 1-based ranks to a pooled sample, averaging over ties.
///
/// Tied values receive the mean of the ranks they would jointly occupy
/// (standard mid-rank handling). The returned vector is positional: entry
/// `i` is the rank of `values[i]`.
pub fn ranks_with_ties(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && values[order[j]] == values[order[i]] {
            j += 1;
        }
        // Ranks i+1..=j (1-based) collapse to their average
        let mid_rank = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = mid_rank;
        }
        i = j;
    }
    ranks
}

/// Tie-correction term `sum(t^3 - t)` over groups of tied values.
///
/// Feeds the variance correction of the normal approximation to the
/// rank-sum distribution. Zero when all values are distinct.
pub fn tie_term(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let mut term = 0.0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        let t = (j - i) as f64;
        term += t * t * t - t;
        i = j;
    }
    term
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_values_get_consecutive_ranks() {
        let ranks = ranks_with_ties(&[30.0, 10.0, 20.0]);
        assert_eq!(ranks, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn ties_get_average_rank() {
        // 10 and 10 occupy ranks 1 and 2, both get 1.5
        let ranks = ranks_with_ties(&[10.0, 10.0, 20.0]);
        assert_eq!(ranks, vec![1.5, 1.5, 3.0]);
    }

    #[test]
    fn all_tied_values_share_the_middle_rank() {
        let ranks = ranks_with_ties(&[7.0, 7.0, 7.0, 7.0]);
        assert_eq!(ranks, vec![2.5, 2.5, 2.5, 2.5]);
    }

    #[test]
    fn rank_sum_is_invariant() {
        // Ranks always sum to n(n+1)/2, ties or not
        let values = vec![5.0, 3.0, 5.0, 1.0, 3.0, 5.0];
        let total: f64 = ranks_with_ties(&values).iter().sum();
        assert_eq!(total, 21.0);
    }

    #[test]
    fn tie_term_zero_without_ties() {
        assert_eq!(tie_term(&[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn tie_term_counts_each_group() {
        // One pair (2^3-2 = 6) and one triple (3^3-3 = 24)
        let values = vec![1.0, 1.0, 2.0, 2.0, 2.0, 3.0];
        assert_eq!(tie_term(&values), 30.0);
    }

    #[test]
    fn empty_input_is_harmless() {
        assert!(ranks_with_ties(&[]).is_empty());
        assert_eq!(tie_term(&[]), 0.0);
    }
}
