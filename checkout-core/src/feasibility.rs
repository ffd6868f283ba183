//! Checkout feasibility oracle.
//!
//! Answers "can this score be finished in one visit?" from a fixed
//! exclusion set instead of running the search. The set is small and
//! stable; `tests/checkout_contracts.rs` proves it agrees with the
//! search for every score in the window.

use crate::constants::{INFEASIBLE_SCORES, MAX_CHECKOUT, MIN_CHECKOUT};
use crate::errors::CheckoutError;

/// Returns `true` if some legal checkout of at most three darts exists.
pub fn is_feasible(score: u32) -> bool {
    check_score(score).is_ok()
}

/// Typed form of [`is_feasible`].
///
/// # Errors
/// - `CheckoutError::OutOfRangeScore` outside [2, 170].
/// - `CheckoutError::InfeasibleScore` for the seven bogey scores.
pub fn check_score(score: u32) -> Result<(), CheckoutError> {
    if !(MIN_CHECKOUT..=MAX_CHECKOUT).contains(&score) {
        return Err(CheckoutError::OutOfRangeScore(score));
    }
    if INFEASIBLE_SCORES.contains(&score) {
        return Err(CheckoutError::InfeasibleScore(score));
    }
    Ok(())
}
