//! Generator for Ascon-CXOF test vectors
//!
//! Prints canonical JSON vectors covering the empty inputs, short messages,
//! multi-block labels, long outputs, and all three round counts. Useful for
//! pinning regressions and for cross-checking other implementations.
#![allow(clippy::unwrap_used)]
use ascon_cxof::{xof_bits_with_rounds, xof_with_rounds, Rounds};
use serde_json::json;

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. BASIC VECTORS
    // =========================================================================

    // Validates the empty-inputs path (padding-only blocks on both sides)
    vectors.push(json!({
        "name": "empty_empty",
        "msg": "",
        "label": "",
        "rounds": 12,
        "out_bits": 256,
        "out": hex::encode(xof_with_rounds(b"", b"", 32, Rounds::P12)),
    }));

    // Validates standard ASCII input
    vectors.push(json!({
        "name": "abc",
        "msg": "abc",
        "label": "",
        "rounds": 12,
        "out_bits": 256,
        "out": hex::encode(xof_with_rounds(b"abc", b"", 32, Rounds::P12)),
    }));

    // Customized variant of the same message
    vectors.push(json!({
        "name": "abc_customized",
        "msg": "abc",
        "label": "context",
        "rounds": 12,
        "out_bits": 256,
        "out": hex::encode(xof_with_rounds(b"abc", b"context", 32, Rounds::P12)),
    }));

    // =========================================================================
    // 2. BOUNDARY CONDITIONS
    // =========================================================================

    // Label of exactly one rate block (full absorb + padding-only block)
    vectors.push(json!({
        "name": "label_exact_block",
        "msg": "abc",
        "label": "01234567",
        "rounds": 12,
        "out_bits": 256,
        "out": hex::encode(xof_with_rounds(b"abc", b"01234567", 32, Rounds::P12)),
    }));

    // Long squeeze (first 32 bytes must equal the "abc" vector above)
    vectors.push(json!({
        "name": "abc_long_output",
        "msg": "abc",
        "label": "",
        "rounds": 12,
        "out_bits": 512,
        "out": hex::encode(xof_with_rounds(b"abc", b"", 64, Rounds::P12)),
    }));

    // Fractional byte: 17 bits, MSB-first packing with a masked tail
    vectors.push(json!({
        "name": "abc_17_bits",
        "msg": "abc",
        "label": "",
        "rounds": 12,
        "out_bits": 17,
        "out": hex::encode(xof_bits_with_rounds(b"abc", b"", 17, Rounds::P12)),
    }));

    // =========================================================================
    // 3. REDUCED-ROUND VARIANTS
    // =========================================================================

    for (rounds, count) in [(Rounds::P6, 6), (Rounds::P8, 8)] {
        vectors.push(json!({
            "name": format!("abc_rounds_{count}"),
            "msg": "abc",
            "label": "",
            "rounds": count,
            "out_bits": 256,
            "out": hex::encode(xof_with_rounds(b"abc", b"", 32, rounds)),
        }));
    }

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
