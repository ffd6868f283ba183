//! Deterministic checkout chart generator (test use only).
//!
//! Emits the search results for every feasible score as JSON so the
//! browser trainer can ship a static chart that is provably a copy of
//! the search. Requires the `vectors` feature.

use serde::Serialize;

use crate::constants::{INFEASIBLE_SCORES, MAX_CHECKOUT, MIN_CHECKOUT};
use crate::table::{self, ScoreEntry};

/// Chart schema version. Bump on any field change.
pub const CHART_VERSION: u32 = 1;

#[derive(Serialize)]
struct ChartFile {
    #[serde(rename = "_WARNING")]
    warning: &'static str,
    version: u32,
    min_checkout: u32,
    max_checkout: u32,
    infeasible: Vec<u32>,
    entries: Vec<ChartEntry>,
}

#[derive(Serialize)]
struct ChartEntry {
    score: u32,
    min_darts: usize,
    preferred: Vec<String>,
    optimal: Vec<Vec<String>>,
    checkout_count: usize,
}

impl From<&ScoreEntry> for ChartEntry {
    fn from(entry: &ScoreEntry) -> Self {
        Self {
            score: entry.score,
            min_darts: entry.min_darts,
            preferred: entry
                .optimal
                .first()
                .map(|c| c.tokens())
                .unwrap_or_default(),
            optimal: entry.optimal.iter().map(|c| c.tokens()).collect(),
            checkout_count: entry.checkouts.len(),
        }
    }
}

/// Generate the full checkout chart as pretty-printed JSON.
///
/// # Errors
/// Propagates the `serde_json` serialization error.
pub fn generate_chart_json() -> Result<String, serde_json::Error> {
    let file = ChartFile {
        warning: "GENERATED - do not edit. Regenerate from checkout-core.",
        version: CHART_VERSION,
        min_checkout: MIN_CHECKOUT,
        max_checkout: MAX_CHECKOUT,
        infeasible: INFEASIBLE_SCORES.to_vec(),
        entries: table::global().entries().map(ChartEntry::from).collect(),
    };
    serde_json::to_string_pretty(&file)
}
