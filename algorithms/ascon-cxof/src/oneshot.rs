//! Public API Layer
//!
use crate::constants::DIGEST_SIZE;
use crate::sponge;
use crate::types::Rounds;
use subtle::ConstantTimeEq;

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// BYTE-LEVEL XOF
// =============================================================================

/// Fill `out` with Ascon-CXOF128 output for `msg` under customization `label`.
///
/// The whole slice is written; its length is the requested output length.
/// Deterministic: the same `(msg, label, out.len(), rounds)` always produces
/// the same bytes, and shorter outputs are prefixes of longer ones.
///
/// # Example
/// ```rust
/// use ascon_cxof::Rounds;
///
/// let mut out = [0u8; 32];
/// ascon_cxof::xof_into(&mut out, b"message", b"context", Rounds::P12);
/// ```
pub fn xof_into(out: &mut [u8], msg: &[u8], label: &[u8], rounds: Rounds) {
    sponge::cxof_into(out, msg, label, rounds);
}

/// Compute `outlen` bytes of XOF output with the standard twelve rounds.
///
/// # Example
/// ```rust
/// let tag = ascon_cxof::xof(b"message", b"context", 64);
/// assert_eq!(tag.len(), 64);
/// ```
#[must_use]
pub fn xof(msg: &[u8], label: &[u8], outlen: usize) -> Vec<u8> {
    xof_with_rounds(msg, label, outlen, Rounds::P12)
}

/// Compute `outlen` bytes of XOF output with an explicit round count.
#[must_use]
pub fn xof_with_rounds(msg: &[u8], label: &[u8], outlen: usize, rounds: Rounds) -> Vec<u8> {
    let mut out = vec![0u8; outlen];
    xof_into(&mut out, msg, label, rounds);
    out
}

// =============================================================================
// BIT-LEVEL XOF
// =============================================================================

/// Fill `out` with `outlen_bits` bits of XOF output, packed MSB-first.
///
/// When `outlen_bits` is not a multiple of 8, the final byte keeps only its
/// top `outlen_bits % 8` bits; the low bits are cleared. The output is a
/// bit-stream prefix: truncating a longer request to `outlen_bits` bits gives
/// the same bytes.
///
/// `outlen_bits == 0` writes nothing and `out` may be empty.
///
/// # Panics
/// Panics if `out.len()` is not `outlen_bits.div_ceil(8)`.
pub fn xof_bits_into(out: &mut [u8], outlen_bits: usize, msg: &[u8], label: &[u8], rounds: Rounds) {
    if outlen_bits == 0 {
        return;
    }
    assert_eq!(
        out.len(),
        outlen_bits.div_ceil(8),
        "output buffer must hold exactly ceil(outlen_bits / 8) bytes"
    );
    xof_into(out, msg, label, rounds);

    let rem = outlen_bits % 8;
    if rem != 0 {
        // Keep the top `rem` bits of the final byte, clear the rest.
        let mask = 0xFFu8 << (8 - rem);
        if let Some(last) = out.last_mut() {
            *last &= mask;
        }
    }
}

/// Compute `outlen_bits` bits of XOF output with the standard twelve rounds.
///
/// # Example
/// ```rust
/// let out = ascon_cxof::xof_bits(b"message", b"", 17);
/// assert_eq!(out.len(), 3);
/// assert_eq!(out[2] & 0x7F, 0); // only the top bit of the last byte survives
/// ```
#[must_use]
pub fn xof_bits(msg: &[u8], label: &[u8], outlen_bits: usize) -> Vec<u8> {
    xof_bits_with_rounds(msg, label, outlen_bits, Rounds::P12)
}

/// Compute `outlen_bits` bits of XOF output with an explicit round count.
#[must_use]
pub fn xof_bits_with_rounds(
    msg: &[u8],
    label: &[u8],
    outlen_bits: usize,
    rounds: Rounds,
) -> Vec<u8> {
    let mut out = vec![0u8; outlen_bits.div_ceil(8)];
    xof_bits_into(&mut out, outlen_bits, msg, label, rounds);
    out
}

// =============================================================================
// FIXED-LENGTH HASH
// =============================================================================

/// Compute the 256-bit digest: XOF output of [`DIGEST_SIZE`] bytes with an
/// empty label and twelve rounds.
///
/// # Example
/// ```rust
/// let digest = ascon_cxof::hash(b"abc");
/// assert_eq!(digest.to_vec(), ascon_cxof::xof(b"abc", b"", 32));
/// ```
#[must_use]
pub fn hash(msg: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut out = [0u8; DIGEST_SIZE];
    xof_into(&mut out, msg, b"", Rounds::P12);
    out
}

/// Verify a digest in constant time (timing attack resistant).
///
/// # Example
/// ```rust
/// let data = b"Secure Data";
/// let digest = ascon_cxof::hash(data);
/// assert!(ascon_cxof::verify(data, &digest));
/// ```
#[must_use]
pub fn verify(msg: &[u8], expected: &[u8; DIGEST_SIZE]) -> bool {
    let computed = hash(msg);
    computed.ct_eq(expected).into()
}
