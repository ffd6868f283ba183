//! Checkout table: the search result for every score, computed once.
//!
//! The table is a cache of [`search::enumerate`], never an independent
//! source of truth: it is populated from the search on first use and
//! never invalidated (inputs are integers in a fixed window).
//! `tests/checkout_contracts.rs` re-runs the uncached search for every
//! score and compares.
//!
//! [`search::enumerate`]: crate::search::enumerate

use std::sync::OnceLock;

use crate::constants::{MAX_CHECKOUT, MIN_CHECKOUT};
use crate::dart::Checkout;
use crate::feasibility::is_feasible;
use crate::policy::optimality::select_optimal;
use crate::search::enumerate;

/// Precomputed search results for one feasible score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub score: u32,
    /// Every checkout, in search order.
    pub checkouts: Vec<Checkout>,
    /// Optimal subset, in search order. Never empty.
    pub optimal: Vec<Checkout>,
    /// Length of the optimal checkouts.
    pub min_darts: usize,
}

/// Score-indexed search results for [2, 170].
#[derive(Debug, Clone)]
pub struct CheckoutTable {
    entries: Vec<Option<ScoreEntry>>,
}

impl CheckoutTable {
    /// Run the search for every score in the window.
    pub fn build() -> Self {
        let entries = (0..=MAX_CHECKOUT)
            .map(|score| {
                if !is_feasible(score) {
                    return None;
                }
                let checkouts = enumerate(score);
                let optimal = select_optimal(&checkouts);
                let min_darts = optimal.first()?.len();
                Some(ScoreEntry {
                    score,
                    checkouts,
                    optimal,
                    min_darts,
                })
            })
            .collect();
        Self { entries }
    }

    /// Entry for `score`, `None` when it cannot be checked out.
    pub fn entry(&self, score: u32) -> Option<&ScoreEntry> {
        let index = usize::try_from(score).ok()?;
        self.entries.get(index)?.as_ref()
    }

    /// All entries, ascending by score.
    pub fn entries(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter().flatten()
    }

    /// Number of scores with at least one checkout.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-wide table, built on first access.
pub fn global() -> &'static CheckoutTable {
    static TABLE: OnceLock<CheckoutTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = CheckoutTable::build();
        tracing::debug!(
            scores = table.len(),
            min = MIN_CHECKOUT,
            max = MAX_CHECKOUT,
            "checkout table populated"
        );
        table
    })
}
