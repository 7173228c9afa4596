//! Ascon-CXOF128 Constants
//!
//! Everything here is fixed by the Ascon specification: the initial value
//! identifies the CXOF128 mode, and the round constants are the canonical
//! twelve-round schedule of the Ascon permutation. None of these values may
//! change without breaking test-vector compatibility.

// =============================================================================
// SPONGE GEOMETRY
// =============================================================================

/// Rate of the sponge in bytes: one 64-bit lane is exposed per step.
pub const RATE: usize = 8;

/// Digest size of the fixed-length hash wrapper in bytes (256-bit digest).
pub const DIGEST_SIZE: usize = 32;

// =============================================================================
// INITIAL VALUE
// =============================================================================

/// Initial value of lane 0 for Ascon-CXOF128.
///
/// Encodes the algorithm parameters (rate, rounds, mode tag) as defined by
/// the Ascon specification; lanes 1..4 start at zero.
pub const CXOF_IV: u64 = 0x0000_0800_00cc_0004;

// =============================================================================
// ROUND CONSTANTS
// =============================================================================

/// The twelve-round constant schedule, XORed into lane 2, one per round.
///
/// The shorter permutations run the LAST six or eight entries of this table
/// in the same order. Taking the first entries instead would be a different
/// (and wrong) permutation.
pub const ROUND_CONSTANTS: [u64; 12] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];
