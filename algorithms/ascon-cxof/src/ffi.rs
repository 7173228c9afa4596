//! C-API Bindings
//!
//! Exposes Ascon-CXOF128 to C/C++ via FFI with pointer safety and panic
//! boundaries. Signatures mirror the classic `crypto_hash` convention:
//! output buffer first, inputs as pointer/length pairs, `int` status.

#![allow(unsafe_code)]

use crate::constants::DIGEST_SIZE;
use crate::types::Rounds;
use crate::{hash, xof_bits_into, xof_into};

use std::slice;

// =============================================================================
// HELPERS
// =============================================================================

/// Status: success.
const OK: i32 = 0;
/// Status: a required pointer was null.
const ERR_NULL: i32 = -1;
/// Status: a panic was caught at the FFI boundary.
const ERR_PANIC: i32 = -2;

/// Build an input slice from a pointer/length pair.
///
/// A null pointer is accepted for zero-length inputs (the classic C API
/// passes `NULL, 0` for an empty message or label).
unsafe fn input_slice<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        Some(&[])
    } else if ptr.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(ptr, len))
    }
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute Ascon-CXOF128 output with a runtime-selected round count.
///
/// Round counts other than 6, 8 and 12 fall back to 12.
///
/// # Safety
/// - `msg_ptr` must be valid for `msg_len` bytes (may be null if `msg_len == 0`)
/// - `label_ptr` must be valid for `label_len` bytes (may be null if `label_len == 0`)
/// - `out_ptr` must be valid for `out_len` writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn ascon_cxof_rounds(
    out_ptr: *mut u8,
    out_len: usize,
    msg_ptr: *const u8,
    msg_len: usize,
    label_ptr: *const u8,
    label_len: usize,
    rounds: u32,
) -> i32 {
    if out_len == 0 {
        return OK;
    }
    if out_ptr.is_null() {
        return ERR_NULL;
    }
    let (Some(msg), Some(label)) = (input_slice(msg_ptr, msg_len), input_slice(label_ptr, label_len))
    else {
        return ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let out = slice::from_raw_parts_mut(out_ptr, out_len);
        xof_into(out, msg, label, Rounds::from_count(rounds));
    });

    match result {
        Ok(()) => OK,
        Err(_) => ERR_PANIC,
    }
}

/// Compute Ascon-CXOF128 output with the standard twelve rounds.
///
/// # Safety
/// Same contract as [`ascon_cxof_rounds`].
#[no_mangle]
pub unsafe extern "C" fn ascon_cxof(
    out_ptr: *mut u8,
    out_len: usize,
    msg_ptr: *const u8,
    msg_len: usize,
    label_ptr: *const u8,
    label_len: usize,
) -> i32 {
    ascon_cxof_rounds(out_ptr, out_len, msg_ptr, msg_len, label_ptr, label_len, 12)
}

// =============================================================================
// BIT-GRANULAR API
// =============================================================================

/// Compute `out_bits` bits of output (MSB-first packing), runtime rounds.
///
/// # Safety
/// - `out_ptr` must be valid for `ceil(out_bits / 8)` writable bytes
/// - input pointers follow the contract of [`ascon_cxof_rounds`]
///
/// # Returns
/// - `0`: Success (including `out_bits == 0`, which writes nothing)
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn ascon_cxof_bits_rounds(
    out_ptr: *mut u8,
    out_bits: usize,
    msg_ptr: *const u8,
    msg_len: usize,
    label_ptr: *const u8,
    label_len: usize,
    rounds: u32,
) -> i32 {
    if out_bits == 0 {
        return OK;
    }
    if out_ptr.is_null() {
        return ERR_NULL;
    }
    let (Some(msg), Some(label)) = (input_slice(msg_ptr, msg_len), input_slice(label_ptr, label_len))
    else {
        return ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let out = slice::from_raw_parts_mut(out_ptr, out_bits.div_ceil(8));
        xof_bits_into(out, out_bits, msg, label, Rounds::from_count(rounds));
    });

    match result {
        Ok(()) => OK,
        Err(_) => ERR_PANIC,
    }
}

/// Compute `out_bits` bits of output with the standard twelve rounds.
///
/// # Safety
/// Same contract as [`ascon_cxof_bits_rounds`].
#[no_mangle]
pub unsafe extern "C" fn ascon_cxof_bits(
    out_ptr: *mut u8,
    out_bits: usize,
    msg_ptr: *const u8,
    msg_len: usize,
    label_ptr: *const u8,
    label_len: usize,
) -> i32 {
    ascon_cxof_bits_rounds(out_ptr, out_bits, msg_ptr, msg_len, label_ptr, label_len, 12)
}

// =============================================================================
// FIXED-LENGTH HASH
// =============================================================================

/// Compute the 256-bit digest of `msg` into a 32-byte buffer.
///
/// # Safety
/// - `msg_ptr` must be valid for `msg_len` bytes (may be null if `msg_len == 0`)
/// - `out_ptr` must be valid for 32 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn ascon_hash(out_ptr: *mut u8, msg_ptr: *const u8, msg_len: usize) -> i32 {
    if out_ptr.is_null() {
        return ERR_NULL;
    }
    let Some(msg) = input_slice(msg_ptr, msg_len) else {
        return ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let digest = hash(msg);
        std::ptr::copy_nonoverlapping(digest.as_ptr(), out_ptr, DIGEST_SIZE);
    });

    match result {
        Ok(()) => OK,
        Err(_) => ERR_PANIC,
    }
}
