//! Conformance Harness: Checkout Rule Invariants
//!
//! Enforces the player-visible rules the browser trainer depends on:
//! rejection codes it switches on, error display formats it logs, and
//! golden validation verdicts.
//!
//! Invariant coverage:
//! - Rejection code registry (exact list and order)
//! - Rejection → code mapping and CheckoutError display stability
//! - Golden verdicts for hand-checked attempts (`vectors` feature)
//!
//! UI-owned behaviour (NOT tested here):
//! - Target draw and game-mode scoring
//! - Board hit geometry

#[cfg(feature = "vectors")]
mod validation_vectors;

mod error_code_mapping;
mod rejection_code_registry;
