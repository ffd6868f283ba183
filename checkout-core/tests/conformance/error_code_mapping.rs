//! Conformance: Error Code Mapping
//!
//! Tests that Rust-exposed error and rejection types are stable and map
//! onto the registry:
//! - Rejection::NoCheckout        -> NO_CHECKOUT (OutOfRangeScore, InfeasibleScore)
//! - Rejection::DartCount         -> DART_COUNT
//! - Rejection::UnrecognizedThrow -> UNRECOGNIZED_THROW (InvalidToken)
//! - Rejection::WrongTotal        -> WRONG_TOTAL
//! - Rejection::BadFinish         -> BAD_FINISH

use checkout_core::errors::{is_valid_rejection_code, CheckoutError};
use checkout_core::{validate, Rejection};

// ── Conformance: CheckoutError Variant Stability ────────────────

/// All CheckoutError variants produce the expected display format.
#[test]
fn conformance_checkout_error_display_format_stable() {
    let cases: Vec<(CheckoutError, &str)> = vec![
        (
            CheckoutError::InvalidToken("D21".into()),
            "Invalid token: \"D21\"",
        ),
        (
            CheckoutError::OutOfRangeScore(180),
            "Score out of range: 180",
        ),
        (
            CheckoutError::InfeasibleScore(159),
            "No checkout possible: 159",
        ),
        (CheckoutError::TooManyDarts(4), "Too many darts: 4"),
    ];

    for (error, expected) in &cases {
        assert_eq!(
            error.to_string(),
            *expected,
            "CheckoutError display drift detected"
        );
    }
}

/// CheckoutError MUST implement Send + Sync for safe cross-thread use.
#[test]
fn conformance_checkout_error_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CheckoutError>();
}

/// CheckoutError MUST implement std::error::Error.
#[test]
fn conformance_checkout_error_is_std_error() {
    let err = CheckoutError::InvalidToken("?".into());
    let _: &dyn std::error::Error = &err;
}

// ── Conformance: Rejection → Code ───────────────────────────────

/// Every rejection variant maps to its registry code.
#[test]
fn conformance_rejection_codes_stable() {
    let cases: Vec<(Rejection, &str)> = vec![
        (Rejection::NoCheckout, "NO_CHECKOUT"),
        (Rejection::DartCount(4), "DART_COUNT"),
        (
            Rejection::UnrecognizedThrow("Q".into()),
            "UNRECOGNIZED_THROW",
        ),
        (Rejection::WrongTotal { total: 12 }, "WRONG_TOTAL"),
        (Rejection::BadFinish, "BAD_FINISH"),
    ];

    for (rejection, expected) in &cases {
        assert_eq!(rejection.code(), *expected);
        assert!(is_valid_rejection_code(rejection.code()));
    }
}

/// Out-of-range and bogey scores surface as the same code.
#[test]
fn conformance_range_and_bogey_share_code() {
    assert_eq!(validate(171, &["D20"]).code(), Some("NO_CHECKOUT"));
    assert_eq!(validate(1, &["D1"]).code(), Some("NO_CHECKOUT"));
    assert_eq!(validate(162, &["T20", "T20", "D21"]).code(), Some("NO_CHECKOUT"));
}

/// Legal verdicts carry no code.
#[test]
fn conformance_legal_verdict_has_no_code() {
    let v = validate(32, &["D16"]);
    assert!(v.legal);
    assert_eq!(v.code(), None);
}

/// Invalid tokens never degrade into a legal verdict.
#[test]
fn conformance_invalid_token_never_legal() {
    for token in ["", "D0", "D21", "S25", "d20", "BULLSEYE", "50", "T 20"] {
        let v = validate(40, &[token, "D20"]);
        assert!(!v.legal, "{token:?} produced a legal verdict");
        assert_eq!(v.code(), Some("UNRECOGNIZED_THROW"), "{token:?}");
    }
}
