//! Shared types used across the library.

use crate::constants::ROUND_CONSTANTS;

// =============================================================================
// ROUND SELECTION
// =============================================================================

/// Number of permutation rounds applied at every sponge step.
///
/// The standard Ascon-CXOF128 setting is twelve rounds; the six- and
/// eight-round variants share every construction rule and differ only in
/// permutation strength. Outputs for different round counts are unrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounds {
    /// Six rounds (reduced, non-standard).
    P6,
    /// Eight rounds (reduced, non-standard).
    P8,
    /// Twelve rounds (the standard Ascon-CXOF128 setting).
    #[default]
    P12,
}

impl Rounds {
    /// Map a runtime round count to a variant.
    ///
    /// Counts other than 6 and 8 select twelve rounds. An unrecognized count
    /// must not silently become an unrelated permutation, so the full-strength
    /// schedule is the fallback.
    #[must_use]
    pub const fn from_count(count: u32) -> Self {
        match count {
            6 => Self::P6,
            8 => Self::P8,
            _ => Self::P12,
        }
    }

    /// Number of rounds applied per permutation call.
    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            Self::P6 => 6,
            Self::P8 => 8,
            Self::P12 => 12,
        }
    }

    /// Round-constant schedule for this variant.
    ///
    /// Always a tail of the twelve-round table: the reduced permutations run
    /// the last `n` constants, never the first `n`.
    pub(crate) fn schedule(self) -> &'static [u64] {
        match self {
            Self::P6 => &ROUND_CONSTANTS[6..],
            Self::P8 => &ROUND_CONSTANTS[4..],
            Self::P12 => &ROUND_CONSTANTS[..],
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
