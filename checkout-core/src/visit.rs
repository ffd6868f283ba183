//! Visit planner: what is left after some darts of a visit are thrown.
//!
//! The trainer's adaptive mode replays the first darts of a visit and then
//! asks for the finish from wherever the player landed. This module walks
//! those darts, detects a checkout or a bust, and recommends the optimal
//! finish for the darts still in hand.
//!
//! Bust rules are single-visit only: going below zero, leaving 1, or
//! reaching zero on anything but a double or the bull.

use crate::constants::{MAX_DARTS, MIN_CHECKOUT, PREFERRED_LEAVES};
use crate::dart::{Checkout, Dart};
use crate::errors::CheckoutError;
use crate::policy::optimality::select_optimal;
use crate::search::{enumerate_with, SearchLimits};

/// Where a visit stands after the darts thrown so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    /// Score reduced to exactly zero on a double or the bull.
    Checked,
    /// Visit is void: overshot, left 1, or zeroed without a double.
    Bust,
    /// A finish exists with the darts left; `route` is the preferred one.
    OnFinish {
        remaining: u32,
        darts_left: usize,
        route: Checkout,
    },
    /// Darts remain but none of them can finish `remaining`.
    NoFinish { remaining: u32, darts_left: usize },
    /// All three darts thrown without checking out.
    Exhausted { remaining: u32 },
}

/// Walk `thrown` against `score` and plan the rest of the visit.
///
/// # Errors
/// - `CheckoutError::TooManyDarts` if more than three darts were thrown.
/// - `CheckoutError::InvalidToken` for a dart with a segment outside 1..=20.
/// - `CheckoutError::OutOfRangeScore` if `score` is below 2.
pub fn plan(score: u32, thrown: &[Dart]) -> Result<VisitOutcome, CheckoutError> {
    if thrown.len() > MAX_DARTS {
        return Err(CheckoutError::TooManyDarts(thrown.len()));
    }
    if let Some(dart) = thrown.iter().find(|d| !d.is_on_board()) {
        return Err(CheckoutError::InvalidToken(dart.to_string()));
    }
    if score < MIN_CHECKOUT {
        return Err(CheckoutError::OutOfRangeScore(score));
    }

    let mut remaining = score;
    for &dart in thrown {
        let Some(left) = remaining.checked_sub(dart.value()) else {
            return Ok(VisitOutcome::Bust);
        };
        remaining = left;
        match remaining {
            0 if dart.is_finishing() => return Ok(VisitOutcome::Checked),
            0 | 1 => return Ok(VisitOutcome::Bust),
            _ => {}
        }
    }

    let darts_left = MAX_DARTS - thrown.len();
    if darts_left == 0 {
        return Ok(VisitOutcome::Exhausted { remaining });
    }

    let limits = SearchLimits {
        max_darts: darts_left,
        limit: None,
    };
    let outcome = match select_optimal(&enumerate_with(remaining, &limits))
        .into_iter()
        .next()
    {
        Some(route) => VisitOutcome::OnFinish {
            remaining,
            darts_left,
            route,
        },
        None => VisitOutcome::NoFinish {
            remaining,
            darts_left,
        },
    };
    Ok(outcome)
}

/// Whether `remaining` is one of the doubles players aim to leave.
pub fn is_preferred_leave(remaining: u32) -> bool {
    PREFERRED_LEAVES.contains(&remaining)
}
