//! The CXOF128 sponge construction.
//!
//! One-shot drive of the permutation: initialize with the mode IV, absorb
//! the label length, the label, and the message, then squeeze the requested
//! number of output bytes. Every absorb step permutes, including the padded
//! final block of each input: even an empty label or message contributes a
//! padding-only block. Lanes use little-endian byte order for all I/O.

use crate::constants::{CXOF_IV, RATE};
use crate::permutation::AsconState;
use crate::types::Rounds;

// =============================================================================
// LANE I/O
// =============================================================================

/// Load up to eight bytes into the low-addressed end of a lane, zero-filling
/// the rest.
fn load_lane(bytes: &[u8]) -> u64 {
    let mut block = [0u8; RATE];
    block[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(block)
}

/// Padding lane: byte 0x80 at byte offset `len`, zero elsewhere.
///
/// `len` is the number of input bytes in the final block and must be < 8.
const fn pad(len: usize) -> u64 {
    0x80u64 << (8 * len)
}

// =============================================================================
// SPONGE PHASES
// =============================================================================

/// Absorb `input` in rate-sized blocks, then the padded final block.
///
/// The final block is absorbed unconditionally: when `input` is a multiple
/// of the rate (including empty), a padding-only block still goes in.
fn absorb(state: &mut AsconState, input: &[u8], rounds: Rounds) {
    let mut blocks = input.chunks_exact(RATE);
    for block in blocks.by_ref() {
        state.xor_rate(load_lane(block));
        state.permute(rounds);
    }
    let tail = blocks.remainder();
    state.xor_rate(load_lane(tail) ^ pad(tail.len()));
    state.permute(rounds);
}

/// Fill `out` from the rate lane, permuting between blocks.
///
/// No permutation follows the final write, whether it is partial or a full
/// eight bytes.
fn squeeze(state: &mut AsconState, out: &mut [u8], rounds: Rounds) {
    let mut offset = 0;
    while out.len() - offset > RATE {
        out[offset..offset + RATE].copy_from_slice(&state.rate().to_le_bytes());
        state.permute(rounds);
        offset += RATE;
    }
    let tail = &mut out[offset..];
    let len = tail.len();
    tail.copy_from_slice(&state.rate().to_le_bytes()[..len]);
}

// =============================================================================
// ONE-SHOT ENTRY POINT
// =============================================================================

/// Compute Ascon-CXOF128 over `msg` customized by `label`, filling `out`.
///
/// Pure function of `(msg, label, out.len(), rounds)`; no state survives the
/// call. The label length is absorbed in bits and wraps modulo 2^64 for
/// labels at or beyond 2^61 bytes, matching the construction's definition.
pub(crate) fn cxof_into(out: &mut [u8], msg: &[u8], label: &[u8], rounds: Rounds) {
    let mut state = AsconState::new(CXOF_IV);
    state.permute(rounds);

    // Absorb the label length in bits before the label itself, so labels of
    // different lengths separate even when their padded blocks coincide.
    state.xor_rate((label.len() as u64).wrapping_mul(8));
    state.permute(rounds);

    absorb(&mut state, label, rounds);
    absorb(&mut state, msg, rounds);
    squeeze(&mut state, out, rounds);
}

// =============================================================================
// TESTS
// =============================================================================
