//! Checkout rule constants: the fixed numbers the engine is built on.
//!
//! Every value here is part of the observable contract: the browser
//! trainer relies on the same score window and exclusion set when it
//! draws targets, so changing one is a rules change, not a tweak.

/// Lowest score that can be checked out (a single `D1`).
pub const MIN_CHECKOUT: u32 = 2;

/// Highest score that can be checked out (`T20 T20 BULL`).
pub const MAX_CHECKOUT: u32 = 170;

/// Maximum darts in a single visit.
pub const MAX_DARTS: usize = 3;

/// Scores inside the window for which no three-dart finish exists.
pub const INFEASIBLE_SCORES: [u32; 7] = [159, 162, 163, 165, 166, 168, 169];

/// Highest segment number on the board.
pub const MAX_SEGMENT: u8 = 20;

/// Number of distinct dart tokens (60 segment tokens + outer bull + bull).
pub const DART_ALPHABET_SIZE: usize = 62;

/// Outer bull value (wire token `"25"`).
pub const OUTER_BULL_VALUE: u32 = 25;

/// Inner bull value (wire token `"BULL"`).
pub const BULL_VALUE: u32 = 50;

/// Wire token for the outer bull.
pub const OUTER_BULL_TOKEN: &str = "25";

/// Wire token for the inner bull.
pub const BULL_TOKEN: &str = "BULL";

/// Difficulty weight of a single.
pub const SINGLE_DIFFICULTY: u32 = 1;

/// Difficulty weight of a double.
pub const DOUBLE_DIFFICULTY: u32 = 2;

/// Difficulty weight of a triple.
pub const TRIPLE_DIFFICULTY: u32 = 3;

/// Difficulty weight of the outer bull.
pub const OUTER_BULL_DIFFICULTY: u32 = 4;

/// Difficulty weight of the inner bull.
pub const BULL_DIFFICULTY: u32 = 5;

/// Remaining scores players aim to leave for the finishing double.
pub const PREFERRED_LEAVES: [u32; 11] = [40, 36, 32, 24, 20, 18, 16, 12, 8, 4, 2];
