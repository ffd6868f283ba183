//! Validation result types.
//!
//! These types are designed to cross the WASM boundary cheaply: owned
//! strings, no lifetimes, simple enums. `checkout-wasm` mirrors them
//! field for field.

use crate::dart::Checkout;
use crate::errors::REJECTION_CODES;

/// Why an attempt was not a legal checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Target score has no checkout at all (out of range or bogey).
    NoCheckout,
    /// Attempt had zero or more than three darts.
    DartCount(usize),
    /// Attempt contained a token outside the dart alphabet.
    UnrecognizedThrow(String),
    /// Darts did not add up to the target.
    WrongTotal { total: u32 },
    /// Last dart was not a double or the bull.
    BadFinish,
}

impl Rejection {
    /// Stable code from [`REJECTION_CODES`].
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::NoCheckout => REJECTION_CODES[0],
            Rejection::DartCount(_) => REJECTION_CODES[1],
            Rejection::UnrecognizedThrow(_) => REJECTION_CODES[2],
            Rejection::WrongTotal { .. } => REJECTION_CODES[3],
            Rejection::BadFinish => REJECTION_CODES[4],
        }
    }
}

/// Outcome of validating one attempt against a target score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Attempt is a legal checkout of the target.
    pub legal: bool,
    /// Attempt is legal and uses the minimum number of darts.
    pub optimal: bool,
    /// Player-facing explanation.
    pub message: String,
    /// Set when `legal` is false.
    pub rejection: Option<Rejection>,
    /// Fewest darts that finish the target, when it can be finished.
    pub min_darts: Option<usize>,
    /// A preferred optimal checkout, when the attempt was not optimal
    /// and the target can be finished.
    pub example: Option<Checkout>,
}

impl Verdict {
    pub(crate) fn rejected(rejection: Rejection, message: String) -> Self {
        Self {
            legal: false,
            optimal: false,
            message,
            rejection: Some(rejection),
            min_darts: None,
            example: None,
        }
    }

    /// Stable rejection code, `None` for legal attempts.
    pub fn code(&self) -> Option<&'static str> {
        self.rejection.as_ref().map(Rejection::code)
    }
}
