//! Conformance: Rejection Code Registry
//!
//! Asserts the canonical 5-code registry and its exact order. The
//! trainer maps these strings to feedback panels, so reordering is a
//! breaking change.

use checkout_core::errors::{is_valid_rejection_code, REJECTION_CODES};

/// Exact list and order.
#[test]
fn conformance_rejection_registry_exact_list() {
    let expected: [&str; 5] = [
        "NO_CHECKOUT",
        "DART_COUNT",
        "UNRECOGNIZED_THROW",
        "WRONG_TOTAL",
        "BAD_FINISH",
    ];

    assert_eq!(
        REJECTION_CODES, expected,
        "REJECTION_CODES drift from published list"
    );
}

/// All codes must be unique.
#[test]
fn conformance_rejection_registry_unique() {
    let mut seen = std::collections::HashSet::new();
    for code in &REJECTION_CODES {
        assert!(seen.insert(code), "duplicate rejection code: {code}");
    }
}

/// is_valid_rejection_code accepts every canonical code.
#[test]
fn conformance_rejection_validator_accepts_all() {
    for code in &REJECTION_CODES {
        assert!(
            is_valid_rejection_code(code),
            "validator rejected canonical code: {code}"
        );
    }
}

/// is_valid_rejection_code rejects unknown codes.
#[test]
fn conformance_rejection_validator_rejects_unknown() {
    assert!(!is_valid_rejection_code("NOT_A_REAL_CODE"));
    assert!(!is_valid_rejection_code(""));
    assert!(!is_valid_rejection_code("wrong_total")); // case-sensitive
}
