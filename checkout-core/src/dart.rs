//! Dart value model: tokens, point values and difficulty weights.
//!
//! The board has a closed alphabet of 62 landing spots:
//!
//! ```text
//! S1..S20   single   value n       difficulty 1
//! D1..D20   double   value 2n      difficulty 2
//! T1..T20   triple   value 3n      difficulty 3
//! 25        outer    value 25      difficulty 4
//! BULL      inner    value 50      difficulty 5
//! ```
//!
//! Wire tokens are case-sensitive. Parsing is the only way untrusted
//! strings enter the engine, and it rejects anything outside the
//! alphabet instead of mapping it to zero.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    BULL_DIFFICULTY, BULL_TOKEN, BULL_VALUE, DOUBLE_DIFFICULTY, MAX_DARTS, MAX_SEGMENT,
    OUTER_BULL_DIFFICULTY, OUTER_BULL_TOKEN, OUTER_BULL_VALUE, SINGLE_DIFFICULTY,
    TRIPLE_DIFFICULTY,
};
use crate::errors::CheckoutError;

/// A single dart landing spot.
///
/// Segment numbers are 1..=20. Values produced by [`FromStr`] and
/// [`Dart::all`] always satisfy that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dart {
    Single(u8),
    Double(u8),
    Triple(u8),
    /// Outer bull, wire token `"25"`.
    OuterBull,
    /// Inner bull, wire token `"BULL"`.
    Bull,
}

impl Dart {
    /// All 62 tokens in alphabet order: singles, doubles, triples
    /// (each ascending), then outer bull and bull.
    pub fn all() -> impl Iterator<Item = Dart> {
        let segments = 1..=MAX_SEGMENT;
        segments
            .clone()
            .map(Dart::Single)
            .chain(segments.clone().map(Dart::Double))
            .chain(segments.map(Dart::Triple))
            .chain([Dart::OuterBull, Dart::Bull])
    }

    /// Point value of the dart.
    pub fn value(self) -> u32 {
        match self {
            Dart::Single(n) => u32::from(n),
            Dart::Double(n) => 2 * u32::from(n),
            Dart::Triple(n) => 3 * u32::from(n),
            Dart::OuterBull => OUTER_BULL_VALUE,
            Dart::Bull => BULL_VALUE,
        }
    }

    /// Difficulty weight used to break ties between equal-length checkouts.
    pub fn difficulty(self) -> u32 {
        match self {
            Dart::Single(_) => SINGLE_DIFFICULTY,
            Dart::Double(_) => DOUBLE_DIFFICULTY,
            Dart::Triple(_) => TRIPLE_DIFFICULTY,
            Dart::OuterBull => OUTER_BULL_DIFFICULTY,
            Dart::Bull => BULL_DIFFICULTY,
        }
    }

    /// Whether this dart may end a checkout: any double or the inner bull.
    /// The outer bull never finishes.
    pub fn is_finishing(self) -> bool {
        matches!(self, Dart::Double(_) | Dart::Bull)
    }

    /// Whether this dart is in the bull family (outer or inner).
    pub fn is_bull(self) -> bool {
        matches!(self, Dart::OuterBull | Dart::Bull)
    }

    /// Segment number, `None` for the bulls.
    pub fn segment(self) -> Option<u8> {
        match self {
            Dart::Single(n) | Dart::Double(n) | Dart::Triple(n) => Some(n),
            Dart::OuterBull | Dart::Bull => None,
        }
    }

    /// Whether the dart names a real landing spot. Variants can be built
    /// with any segment number; only 1..=20 exist on the board.
    pub fn is_on_board(self) -> bool {
        self.segment().map_or(true, |n| (1..=MAX_SEGMENT).contains(&n))
    }
}

impl fmt::Display for Dart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dart::Single(n) => write!(f, "S{n}"),
            Dart::Double(n) => write!(f, "D{n}"),
            Dart::Triple(n) => write!(f, "T{n}"),
            Dart::OuterBull => f.write_str(OUTER_BULL_TOKEN),
            Dart::Bull => f.write_str(BULL_TOKEN),
        }
    }
}

impl FromStr for Dart {
    type Err = CheckoutError;

    /// Parse a wire token: `S|D|T` followed by 1..=20 without leading
    /// zeros, or the literals `"25"` and `"BULL"`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token == OUTER_BULL_TOKEN {
            return Ok(Dart::OuterBull);
        }
        if token == BULL_TOKEN {
            return Ok(Dart::Bull);
        }

        let invalid = || CheckoutError::InvalidToken(token.to_string());

        let mut chars = token.chars();
        let ring = chars.next().ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty()
            || digits.len() > 2
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let number: u8 = digits.parse().map_err(|_| invalid())?;
        if number > MAX_SEGMENT {
            return Err(invalid());
        }

        match ring {
            'S' => Ok(Dart::Single(number)),
            'D' => Ok(Dart::Double(number)),
            'T' => Ok(Dart::Triple(number)),
            _ => Err(invalid()),
        }
    }
}

/// Parse a list of wire tokens.
///
/// # Errors
/// Returns `CheckoutError::InvalidToken` for the first token outside the
/// alphabet.
pub fn parse_throws<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Dart>, CheckoutError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// An ordered sequence of darts proposed as a finish.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checkout {
    darts: Vec<Dart>,
}

impl Checkout {
    pub fn new(darts: Vec<Dart>) -> Self {
        Self { darts }
    }

    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }

    pub fn len(&self) -> usize {
        self.darts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.darts.is_empty()
    }

    /// Sum of dart values.
    pub fn total(&self) -> u32 {
        self.darts.iter().map(|d| d.value()).sum()
    }

    /// Sum of dart difficulty weights.
    pub fn difficulty(&self) -> u32 {
        self.darts.iter().map(|d| d.difficulty()).sum()
    }

    pub fn last(&self) -> Option<Dart> {
        self.darts.last().copied()
    }

    /// Whether this sequence legally checks out `score`: 1..=3 darts,
    /// exact total, last dart a double or the bull.
    pub fn finishes(&self, score: u32) -> bool {
        (1..=MAX_DARTS).contains(&self.len())
            && self.total() == score
            && self.last().is_some_and(Dart::is_finishing)
    }

    /// Wire tokens for each dart, in order.
    pub fn tokens(&self) -> Vec<String> {
        self.darts.iter().map(|d| d.to_string()).collect()
    }
}

impl fmt::Display for Checkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dart) in self.darts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{dart}")?;
        }
        Ok(())
    }
}

impl FromStr for Checkout {
    type Err = CheckoutError;

    /// Parse whitespace-separated wire tokens, e.g. `"T20 T20 BULL"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        parse_throws(tokens.as_slice()).map(Checkout::new)
    }
}
