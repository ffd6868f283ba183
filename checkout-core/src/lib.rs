//! Checkout Core: darts checkout engine.
//!
//! This crate is the single source of truth for checkout rules used by
//! the browser trainer: which scores can be finished, every legal route
//! of up to three darts, which of those routes are optimal, and whether
//! a player's attempt is legal and optimal. The WASM adapter
//! (`checkout-wasm`) exposes the same functions to the UI and adds no
//! rules of its own.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`constants`] | Score window, bogey set, values, weights |
//! | [`errors`] | `CheckoutError` and rejection code registry |
//! | [`dart`] | Dart tokens and checkout sequences |
//! | [`feasibility`] | "Can this score be finished?" |
//! | [`search`] | Combination search |
//! | [`policy`] | Optimality and attempt validation |
//! | [`table`] | Populate-once cache of search results |
//! | [`visit`] | Mid-visit planning |
//! | [`vectors`] | Checkout chart generator (test-only) |
//!
//! # Example
//!
//! ```
//! use checkout_core::{is_feasible, validate};
//!
//! assert!(!is_feasible(169));
//! let verdict = validate(100, &["T20", "D20"]);
//! assert!(verdict.legal && verdict.optimal);
//! ```

/// Checkout rule constants.
pub mod constants;

/// Error types for checkout-core operations.
pub mod errors;

/// Dart value model.
pub mod dart;

/// Checkout feasibility oracle.
pub mod feasibility;

/// Combination search over the dart alphabet.
pub mod search;

/// Optimality policy and attempt validator.
pub mod policy;

/// Score-keyed cache of search results.
pub mod table;

/// Mid-visit planning and bust detection.
pub mod visit;

/// Deterministic checkout chart generator (test use only).
/// Requires the `vectors` feature: `cargo test --features vectors`.
#[cfg(feature = "vectors")]
pub mod vectors;

pub use dart::{parse_throws, Checkout, Dart};
pub use errors::CheckoutError;
pub use feasibility::is_feasible;
pub use policy::{min_darts, optimal, suggest, validate, validate_darts, Rejection, Verdict};
pub use search::{enumerate, enumerate_with, SearchLimits};
