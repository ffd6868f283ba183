//! Optimality policy and attempt validation.
//!
//! Pure, deterministic judgement over the cached search results. No IO,
//! no clocks, no state beyond the populate-once [`table`].
//!
//! [`table`]: crate::table

pub mod optimality;
pub mod types;
pub mod validator;

// Re-export the canonical entrypoints and core types.
pub use optimality::{min_length, select_optimal};
pub use types::{Rejection, Verdict};
pub use validator::{min_darts, optimal, suggest, validate, validate_darts};
