//! # `PractRand` Stream Generator
//!
//! High-performance stream generator for `PractRand` testing.
//!
//! This binary generates a continuous stream of binary data by feeding an
//! incrementing 64-bit counter through the XOF. The `squeeze` mode keeps the
//! message fixed and requests ever-longer outputs instead, exercising the
//! squeeze phase rather than the absorb phase.

use ascon_cxof::{xof_into, Rounds};
use std::io::{self, Write};

/// Entry point for the `PractRand` stream generator.
fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Default to 64 output bytes per counter value if no argument is provided
    let mode = args.get(1).map_or("64", String::as_str);

    let mut counter: u64 = 0;
    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());

    // One long squeeze instead of many short ones
    if mode == "squeeze" {
        let mut block = [0u8; 1 << 16];
        loop {
            xof_into(&mut block, &counter.to_le_bytes(), b"stream", Rounds::P12);
            if handle.write_all(&block).is_err() {
                break;
            }
            counter = counter.wrapping_add(1);
        }
        return;
    }

    let size = mode.parse::<usize>().unwrap_or(64);
    let mut out = vec![0u8; size];

    loop {
        xof_into(&mut out, &counter.to_le_bytes(), b"", Rounds::P12);

        if handle.write_all(&out).is_err() {
            break;
        }

        counter = counter.wrapping_add(1);
    }
}
