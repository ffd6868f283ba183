//! Error types for checkout-core.
//!
//! All of these are expected conditions: a player clicking the wrong
//! segment or asking about 169 is normal input, not a bug. They are
//! returned through `Result` or folded into a [`Verdict`], never raised
//! as panics.
//!
//! [`Verdict`]: crate::policy::Verdict

/// Unified error type for checkout-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    /// Token outside the 62-symbol dart alphabet.
    #[error("Invalid token: {0:?}")]
    InvalidToken(String),

    /// Score outside the checkout window [2, 170].
    #[error("Score out of range: {0}")]
    OutOfRangeScore(u32),

    /// Score inside the window with no three-dart finish.
    #[error("No checkout possible: {0}")]
    InfeasibleScore(u32),

    /// More darts than a single visit allows.
    #[error("Too many darts: {0}")]
    TooManyDarts(usize),
}

// ── Rejection Code Registry ──────────────────────────────────────────

/// Canonical rejection codes attached to illegal attempts, 5 codes.
///
/// The browser trainer switches on these strings to pick feedback, so the
/// list and its order are stable. Each [`Rejection`] variant maps to
/// exactly one entry.
///
/// [`Rejection`]: crate::policy::Rejection
pub const REJECTION_CODES: [&str; 5] = [
    "NO_CHECKOUT",
    "DART_COUNT",
    "UNRECOGNIZED_THROW",
    "WRONG_TOTAL",
    "BAD_FINISH",
];

/// Returns `true` if the given string is a canonical rejection code.
pub fn is_valid_rejection_code(code: &str) -> bool {
    REJECTION_CODES.contains(&code)
}
