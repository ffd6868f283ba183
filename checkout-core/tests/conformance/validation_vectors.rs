//! Conformance: Golden Validation Verdicts
//!
//! Invariants under test:
//! - Each hand-checked attempt produces the expected legal/optimal pair
//! - Rejections carry the expected registry code
//! - Verdicts are deterministic (identical inputs → identical output)
//!
//! Uses golden vectors from tests/vectors/validation.vectors.json.

use serde::Deserialize;
use std::path::PathBuf;

use checkout_core::validate;

// ── Vector schema ───────────────────────────────────────────────

#[derive(Deserialize)]
struct ValidationVectors {
    version: u32,
    cases: Vec<ValidationCase>,
}

#[derive(Deserialize)]
struct ValidationCase {
    name: String,
    score: u32,
    attempt: Vec<String>,
    legal: bool,
    optimal: bool,
    code: Option<String>,
    min_darts: Option<usize>,
}

// ── Helpers ─────────────────────────────────────────────────────

fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vectors")
}

fn load_validation_vectors() -> ValidationVectors {
    let path = vectors_dir().join("validation.vectors.json");
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&data).expect("validation vectors parse failed")
}

// ── Conformance: Golden Vector Match ────────────────────────────

#[test]
fn conformance_validation_golden_vectors_match() {
    let vecs = load_validation_vectors();

    assert_eq!(vecs.version, 1, "unexpected validation vector schema version");
    assert!(
        vecs.cases.len() >= 6,
        "expected at least 6 validation cases, got {}",
        vecs.cases.len()
    );

    for case in &vecs.cases {
        let verdict = validate(case.score, case.attempt.as_slice());
        assert_eq!(verdict.legal, case.legal, "{}: legal", case.name);
        assert_eq!(verdict.optimal, case.optimal, "{}: optimal", case.name);
        assert_eq!(verdict.code(), case.code.as_deref(), "{}: code", case.name);
        assert_eq!(verdict.min_darts, case.min_darts, "{}: min_darts", case.name);
    }
}

/// Optimal implies legal in every committed case.
#[test]
fn conformance_validation_vectors_consistent() {
    for case in &load_validation_vectors().cases {
        assert!(!case.optimal || case.legal, "{}: optimal but illegal", case.name);
        assert_eq!(case.legal, case.code.is_none(), "{}: code vs legal", case.name);
    }
}

#[test]
fn conformance_validation_deterministic() {
    for case in &load_validation_vectors().cases {
        let a = validate(case.score, case.attempt.as_slice());
        let b = validate(case.score, case.attempt.as_slice());
        assert_eq!(a, b, "{}: non-deterministic verdict", case.name);
    }
}
