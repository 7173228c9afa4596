#![cfg_attr(not(feature = "std"), no_std)]

//! # Ascon-CXOF128
//!
//! Customizable extendable-output function built on the 320-bit Ascon
//! permutation.

//! # Usage
//! ```rust
//! // 1. Fixed-size digest
//! let digest = ascon_cxof::hash(b"hello world");
//! assert_eq!(digest.len(), 32);
//!
//! // 2. Arbitrary-length output, bound to a customization label
//! let tag = ascon_cxof::xof(b"hello world", b"my-protocol-v1", 64);
//! assert_eq!(tag.len(), 64);
//!
//! // 3. Bit-granular output (top bits of the final byte are kept)
//! let bits = ascon_cxof::xof_bits(b"hello world", b"", 17);
//! assert_eq!(bits.len(), 3);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod constants;
#[cfg(feature = "std")]
mod ffi;
mod oneshot;
// Re-export the raw permutation for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod permutation; // Public for bench/example use only
mod sponge;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use constants::DIGEST_SIZE;
pub use oneshot::{
    hash, verify, xof, xof_bits, xof_bits_into, xof_bits_with_rounds, xof_into, xof_with_rounds,
};
pub use types::Rounds;
