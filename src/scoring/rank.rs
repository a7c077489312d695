/// Shares ranking points between tied positions.
///
/// `ordered_counts` are final centre counts sorted largest first, so ties
/// are adjacent. `rank_points[i]` is the raw award for finishing in
/// position i; positions past the end of the list are worth nothing. Each
/// maximal run of equal counts receives the sum of the points its
/// positions would have earned, split evenly.
///
/// The result always has one entry per count, and within every tied run it
/// sums to exactly what those positions would have received untied.
pub fn share_rank_points(ordered_counts: &[u8], rank_points: &[f64]) -> Vec<f64> {
    let mut shared = Vec::with_capacity(ordered_counts.len());
    let mut start = 0;
    while start < ordered_counts.len() {
        let mut end = start + 1;
        while end < ordered_counts.len() && ordered_counts[end] == ordered_counts[start] {
            end += 1;
        }
        let pool: f64 = (start..end)
            .map(|i| rank_points.get(i).copied().unwrap_or(0.0))
            .sum();
        let share = pool / (end - start) as f64;
        for _ in start..end {
            shared.push(share);
        }
        start = end;
    }
    shared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_ties_leaves_points_unchanged() {
        let shared = share_rank_points(&[12, 9, 6, 4, 2, 1, 0], &[38.0, 14.0, 7.0]);
        assert_eq!(shared, vec![38.0, 14.0, 7.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn tied_top_two_split_their_points() {
        let shared = share_rank_points(&[10, 10, 5], &[38.0, 14.0, 7.0]);
        assert_eq!(shared, vec![26.0, 26.0, 7.0]);
    }

    #[test]
    fn tie_spanning_the_end_of_the_points_list() {
        // Positions 3 and 4 tie; only position 3 carries points
        let shared = share_rank_points(&[10, 8, 4, 4], &[38.0, 14.0, 7.0]);
        assert_eq!(shared, vec![38.0, 14.0, 3.5, 3.5]);
    }

    #[test]
    fn all_tied_shares_everything() {
        let shared = share_rank_points(&[5, 5, 5, 5], &[38.0, 14.0, 7.0]);
        let expected = (38.0 + 14.0 + 7.0) / 4.0;
        assert_eq!(shared, vec![expected; 4]);
    }

    #[test]
    fn empty_points_list_yields_zeros() {
        let shared = share_rank_points(&[6, 5, 4], &[]);
        assert_eq!(shared, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_counts_yield_empty_result() {
        assert!(share_rank_points(&[], &[38.0]).is_empty());
    }

    #[test]
    fn groups_sum_to_their_untied_points() {
        // Seven positions, carnage-style points, several tie groups
        let points = [7000.0, 6000.0, 5000.0, 4000.0, 3000.0, 2000.0, 1000.0];
        let counts = [9, 9, 9, 4, 2, 0, 0];
        let shared = share_rank_points(&counts, &points);
        let total: f64 = shared.iter().sum();
        assert_eq!(total, points.iter().sum::<f64>());
        assert_eq!(shared[0], (7000.0 + 6000.0 + 5000.0) / 3.0);
        assert_eq!(shared[3], 4000.0);
        assert_eq!(shared[4], 3000.0);
        assert_eq!(shared[5], 1500.0);
        assert_eq!(shared[6], 1500.0);
    }
}
