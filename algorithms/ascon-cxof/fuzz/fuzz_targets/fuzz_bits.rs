#![no_main]

use ascon_cxof::{xof_bits_with_rounds, xof_with_rounds, Rounds};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First two bytes choose the bit count (0..=2047), the rest is message
    let bits = usize::from(u16::from_le_bytes([data[0], data[1]]) & 0x07FF);
    let msg = &data[2..];

    let out = xof_bits_with_rounds(msg, b"fuzz", bits, Rounds::P12);

    // =============================================================================
    // SIZE & MASK DISCIPLINE
    // =============================================================================

    assert_eq!(out.len(), bits.div_ceil(8), "wrong output byte count");

    if bits == 0 {
        return;
    }

    let by_bytes = xof_with_rounds(msg, b"fuzz", out.len(), Rounds::P12);
    let rem = bits % 8;
    if rem == 0 {
        assert_eq!(out, by_bytes, "whole-byte request must match byte mode");
    } else {
        let mask = 0xFFu8 << (8 - rem);
        assert_eq!(out[..out.len() - 1], by_bytes[..out.len() - 1]);
        assert_eq!(out[out.len() - 1], by_bytes[out.len() - 1] & mask);
        assert_eq!(out[out.len() - 1] & !mask, 0, "tail bits not cleared");
    }
});
