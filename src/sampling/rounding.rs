//! Largest-remainder apportionment of integer counts from fractions.
//!
//! Converts target fractions into integer counts summing exactly to the
//! requested total. Each fraction is floored after scaling, then the
//! leftover units go to the entries with the largest fractional remainders.
//! Remainder ties resolve by declaration index, which keeps the procedure
//! fully deterministic.

use std::cmp::Ordering;

/// Apportion `total` across `fractions` by the largest-remainder method.
///
/// The caller is responsible for fractions being non-negative and summing
/// to 1.0 within tolerance; under that precondition the result always sums
/// to exactly `total`.
pub fn largest_remainder(total: usize, fractions: &[f64]) -> Vec<usize> {
    if fractions.is_empty() {
        return Vec::new();
    }

    let scaled: Vec<f64> = fractions.iter().map(|f| f * total as f64).collect();
    let mut counts: Vec<usize> = scaled.iter().map(|s| s.floor() as usize).collect();
    let assigned: usize = counts.iter().sum();

    // Hand out the leftover units in decreasing remainder order, ties by
    // declaration index.
    let mut order: Vec<usize> = (0..fractions.len()).collect();
    order.sort_by(|&a, &b| {
        let remainder_a = scaled[a] - counts[a] as f64;
        let remainder_b = scaled[b] - counts[b] as f64;
        remainder_b
            .partial_cmp(&remainder_a)
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    let leftover = total.saturating_sub(assigned);
    for i in 0..leftover {
        counts[order[i % order.len()]] += 1;
    }

    counts
}
