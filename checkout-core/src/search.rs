//! Combination search: every legal finish for a score, in preference order.
//!
//! ## Algorithm
//! Bounded depth-first search, run once per dart count (1, then 2, then 3)
//! so shorter finishes are produced before longer ones.
//!
//! ```text
//! setup dart  : value leaves >= 2, not a double/triple worth <= 20,
//!               at most one bull-family dart per sequence
//! final dart  : double or BULL whose value == remaining
//! ```
//!
//! Setup darts are tried T20 first, then triples high to low, singles
//! high to low, doubles high to low, 25, BULL. Results are stably sorted
//! by length, then by the rank of their first dart.
//!
//! Each branch owns its prefix; completed sequences are appended to the
//! output list and never touched again.

use std::cmp::Reverse;
use std::sync::OnceLock;

use crate::constants::{MAX_DARTS, MAX_SEGMENT, MIN_CHECKOUT};
use crate::dart::{Checkout, Dart};
use crate::feasibility::check_score;

/// Caller configuration for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Longest sequence to consider (clamped to 3).
    pub max_darts: usize,
    /// Cap on the number of checkouts returned, applied after ordering.
    pub limit: Option<usize>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_darts: MAX_DARTS,
            limit: None,
        }
    }
}

/// All checkouts for `score` with up to three darts.
///
/// # Contract
///
/// - **Deterministic**: identical `score` always produces identical output.
/// - **Sound**: every returned checkout satisfies [`Checkout::finishes`].
/// - **Empty** for scores outside [2, 170] and for the bogey scores.
pub fn enumerate(score: u32) -> Vec<Checkout> {
    enumerate_with(score, &SearchLimits::default())
}

/// [`enumerate`] with explicit limits.
pub fn enumerate_with(score: u32, limits: &SearchLimits) -> Vec<Checkout> {
    if check_score(score).is_err() {
        return Vec::new();
    }

    let max_darts = limits.max_darts.min(MAX_DARTS);
    let mut found = Vec::new();
    for darts in 1..=max_darts {
        extend(score, &[], darts, &mut found);
    }

    found.sort_by_key(|c| (c.len(), c.darts().first().map(|&d| rank(d))));
    if let Some(limit) = limits.limit {
        found.truncate(limit);
    }

    tracing::trace!(score, max_darts, count = found.len(), "enumerated checkouts");
    found
}

fn extend(remaining: u32, prefix: &[Dart], darts_left: usize, found: &mut Vec<Checkout>) {
    if darts_left == 1 {
        let holds_bull = prefix.iter().any(|d| d.is_bull());
        let finishers = Dart::all()
            .filter(|d| d.is_finishing() && d.value() == remaining)
            .filter(|d| !(holds_bull && d.is_bull()));
        for dart in finishers {
            let mut darts = prefix.to_vec();
            darts.push(dart);
            found.push(Checkout::new(darts));
        }
        return;
    }

    for &dart in setup_order() {
        if !is_setup_candidate(dart, remaining, prefix) {
            continue;
        }
        let mut next = prefix.to_vec();
        next.push(dart);
        extend(remaining - dart.value(), &next, darts_left - 1, found);
    }
}

fn is_setup_candidate(dart: Dart, remaining: u32, prefix: &[Dart]) -> bool {
    if dart.value() + MIN_CHECKOUT > remaining {
        return false;
    }
    // A single of the same value always exists.
    if matches!(dart, Dart::Double(_) | Dart::Triple(_)) && dart.value() <= u32::from(MAX_SEGMENT)
    {
        return false;
    }
    !(dart.is_bull() && prefix.iter().any(|d| d.is_bull()))
}

/// Sort key: T20, other triples, singles, doubles (each high to low),
/// then 25, then BULL.
fn rank(dart: Dart) -> (u8, Reverse<u8>) {
    match dart {
        Dart::Triple(n) => (0, Reverse(n)),
        Dart::Single(n) => (1, Reverse(n)),
        Dart::Double(n) => (2, Reverse(n)),
        Dart::OuterBull => (3, Reverse(0)),
        Dart::Bull => (4, Reverse(0)),
    }
}

fn setup_order() -> &'static [Dart] {
    static ORDER: OnceLock<Vec<Dart>> = OnceLock::new();
    ORDER.get_or_init(|| {
        let mut order: Vec<Dart> = Dart::all().collect();
        order.sort_by_key(|&d| rank(d));
        order
    })
}
