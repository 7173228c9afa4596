//! Rounds Command
//!
//! Computes the 6/8/12-round outputs for one message and reports whether any
//! pair coincides. The three variants share every construction rule, so any
//! equality here would indicate a broken round schedule.

use ascon_cxof::{xof_with_rounds, Rounds};

/// Bytes requested from each variant.
const OUT_LEN: usize = 32;

fn print_hex_block(bytes: &[u8]) {
    for (i, byte) in bytes.iter().enumerate() {
        print!("{byte:02x}");
        if (i + 1) % 16 == 0 {
            println!();
        } else if i + 1 != bytes.len() {
            print!(" ");
        }
    }
    if bytes.len() % 16 != 0 {
        println!();
    }
}

/// Compare the three round counts on `message`.
pub fn compare_rounds(message: &[u8]) {
    let out6 = xof_with_rounds(message, b"", OUT_LEN, Rounds::P6);
    let out8 = xof_with_rounds(message, b"", OUT_LEN, Rounds::P8);
    let out12 = xof_with_rounds(message, b"", OUT_LEN, Rounds::P12);

    println!("Output ({OUT_LEN} bytes) for rounds=6:");
    print_hex_block(&out6);
    println!("Output ({OUT_LEN} bytes) for rounds=8:");
    print_hex_block(&out8);
    println!("Output ({OUT_LEN} bytes) for rounds=12:");
    print_hex_block(&out12);

    println!("Comparisons:");
    println!(" rounds 6 == 8 ?  {}", if out6 == out8 { "YES" } else { "NO" });
    println!(" rounds 8 == 12 ? {}", if out8 == out12 { "YES" } else { "NO" });
    println!(" rounds 6 == 12 ? {}", if out6 == out12 { "YES" } else { "NO" });
}
