//! Attempt validator: judges a player's darts against a target score.
//!
//! The validator is pure: identical `(score, attempt)` pairs produce
//! identical verdicts. Checks run in a fixed order and the first failure
//! wins:
//!
//! ```text
//! 1. score can be checked out        NO_CHECKOUT
//! 2. 1..=3 darts                     DART_COUNT
//! 3. every token in the alphabet     UNRECOGNIZED_THROW
//! 4. darts add up to the score       WRONG_TOTAL
//! 5. last dart is a double or BULL   BAD_FINISH
//! ```
//!
//! A legal attempt is optimal iff it uses the minimum dart count for the
//! score. Difficulty only decides which optimal checkout is shown as the
//! example.

use super::types::{Rejection, Verdict};
use crate::constants::MAX_DARTS;
use crate::dart::{Checkout, Dart};
use crate::feasibility::check_score;
use crate::table::{self, ScoreEntry};

/// Validate an attempt given as wire tokens.
pub fn validate<S: AsRef<str>>(score: u32, attempt: &[S]) -> Verdict {
    let verdict = match parse_attempt(score, attempt) {
        Ok((entry, checkout)) => judge(entry, &checkout),
        Err(verdict) => verdict,
    };
    log_verdict(score, attempt.len(), &verdict);
    verdict
}

/// Validate an attempt given as already-built darts. A dart with a
/// segment outside 1..=20 is rejected as an unrecognized throw.
pub fn validate_darts(score: u32, attempt: &[Dart]) -> Verdict {
    let verdict = match precheck(score, attempt.len()) {
        Ok(entry) => match attempt.iter().find(|d| !d.is_on_board()) {
            Some(dart) => unrecognized(&dart.to_string(), entry),
            None => judge(entry, &Checkout::new(attempt.to_vec())),
        },
        Err(verdict) => verdict,
    };
    log_verdict(score, attempt.len(), &verdict);
    verdict
}

/// Optimal checkouts for `score`, in preference order. Empty when the
/// score cannot be checked out.
pub fn optimal(score: u32) -> Vec<Checkout> {
    table::global()
        .entry(score)
        .map(|e| e.optimal.clone())
        .unwrap_or_default()
}

/// Fewest darts that check out `score`.
pub fn min_darts(score: u32) -> Option<usize> {
    table::global().entry(score).map(|e| e.min_darts)
}

/// The preferred checkout for `score`: the first optimal one.
pub fn suggest(score: u32) -> Option<Checkout> {
    table::global()
        .entry(score)
        .and_then(|e| e.optimal.first().cloned())
}

fn parse_attempt<S: AsRef<str>>(
    score: u32,
    attempt: &[S],
) -> Result<(&'static ScoreEntry, Checkout), Verdict> {
    let entry = precheck(score, attempt.len())?;
    let mut darts = Vec::with_capacity(attempt.len());
    for token in attempt {
        let token = token.as_ref();
        match token.parse::<Dart>() {
            Ok(dart) => darts.push(dart),
            Err(_) => return Err(unrecognized(token, entry)),
        }
    }
    Ok((entry, Checkout::new(darts)))
}

fn unrecognized(token: &str, entry: &ScoreEntry) -> Verdict {
    let verdict = Verdict::rejected(
        Rejection::UnrecognizedThrow(token.to_string()),
        format!("Unrecognized throw: {token:?}"),
    );
    with_entry(verdict, entry)
}

fn precheck(score: u32, darts: usize) -> Result<&'static ScoreEntry, Verdict> {
    let entry = check_score(score)
        .ok()
        .and_then(|()| table::global().entry(score))
        .ok_or_else(|| {
            Verdict::rejected(
                Rejection::NoCheckout,
                format!("No checkout possible for {score}"),
            )
        })?;

    if !(1..=MAX_DARTS).contains(&darts) {
        let verdict = Verdict::rejected(
            Rejection::DartCount(darts),
            format!("Invalid number of throws: {darts} (1 to {MAX_DARTS} allowed)"),
        );
        return Err(with_entry(verdict, entry));
    }
    Ok(entry)
}

fn judge(entry: &ScoreEntry, checkout: &Checkout) -> Verdict {
    let score = entry.score;
    let total = checkout.total();
    if total != score {
        let verdict = Verdict::rejected(
            Rejection::WrongTotal { total },
            format!("Score does not match target: threw {total}, needed {score}"),
        );
        return with_entry(verdict, entry);
    }
    if !checkout.last().is_some_and(Dart::is_finishing) {
        let verdict = Verdict::rejected(
            Rejection::BadFinish,
            "Last throw must be a double or the bull".to_string(),
        );
        return with_entry(verdict, entry);
    }

    let optimal = checkout.len() == entry.min_darts;
    if optimal {
        return Verdict {
            legal: true,
            optimal: true,
            message: "Optimal checkout!".to_string(),
            rejection: None,
            min_darts: Some(entry.min_darts),
            example: None,
        };
    }

    let example = entry.optimal.first().cloned();
    let message = match &example {
        Some(best) => format!(
            "Valid checkout, but {score} can be finished in {} ({best})",
            darts_phrase(entry.min_darts)
        ),
        None => "Valid checkout".to_string(),
    };
    Verdict {
        legal: true,
        optimal: false,
        message,
        rejection: None,
        min_darts: Some(entry.min_darts),
        example,
    }
}

fn with_entry(mut verdict: Verdict, entry: &ScoreEntry) -> Verdict {
    verdict.min_darts = Some(entry.min_darts);
    verdict.example = entry.optimal.first().cloned();
    verdict
}

fn darts_phrase(n: usize) -> String {
    if n == 1 {
        "1 dart".to_string()
    } else {
        format!("{n} darts")
    }
}

fn log_verdict(score: u32, darts: usize, verdict: &Verdict) {
    tracing::trace!(
        score,
        darts,
        legal = verdict.legal,
        optimal = verdict.optimal,
        code = verdict.code().unwrap_or("-"),
        "validated attempt"
    );
}
