//! Optimality policy: fewest darts, then lowest difficulty.
//!
//! The policy only ranks; legality is already guaranteed by the search.

use crate::dart::Checkout;

/// Select the optimal subset of `checkouts`, preserving input order.
///
/// A checkout is optimal when no other uses fewer darts, and none of the
/// same length has a lower total difficulty.
pub fn select_optimal(checkouts: &[Checkout]) -> Vec<Checkout> {
    let Some(min_darts) = min_length(checkouts) else {
        return Vec::new();
    };
    let min_difficulty = checkouts
        .iter()
        .filter(|c| c.len() == min_darts)
        .map(Checkout::difficulty)
        .min()
        .unwrap_or(0);

    checkouts
        .iter()
        .filter(|c| c.len() == min_darts && c.difficulty() == min_difficulty)
        .cloned()
        .collect()
}

/// Length of the shortest checkout, `None` when there are none.
pub fn min_length(checkouts: &[Checkout]) -> Option<usize> {
    checkouts.iter().map(Checkout::len).min()
}
