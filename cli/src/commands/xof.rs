//! XOF Command
//!
//! Hex-string driver: decodes the message and label from hex, requests a
//! bit-granular output length, and prints one uppercase hex line for easy
//! comparison against test vectors.

use anyhow::{bail, Result};
use ascon_cxof::Rounds;

/// Labels above this length get an advisory warning. Processing is never
/// refused; the construction itself accepts any length.
const LABEL_WARN_BYTES: usize = 256;

/// Decode a hex string permissively: empty input, `0x` prefix, embedded
/// whitespace, and odd length (treated as a leading zero nibble) are all
/// accepted.
fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let stripped: String = input
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let padded = if stripped.len() % 2 == 1 {
        format!("0{stripped}")
    } else {
        stripped
    };

    match hex::decode(&padded) {
        Ok(bytes) => Ok(bytes),
        Err(e) => bail!("Invalid hex input {input:?}: {e}"),
    }
}

/// Run the XOF over hex-encoded inputs and print the output as hex.
pub fn xof_mode(msg_hex: &str, label_hex: &str, out_bits: usize, rounds: u32) -> Result<()> {
    let msg = decode_hex(msg_hex)?;
    let label = decode_hex(label_hex)?;

    if label.len() > LABEL_WARN_BYTES {
        eprintln!(
            "warning: customization label length {} > {} bytes; this is a recommendation only",
            label.len(),
            LABEL_WARN_BYTES
        );
    }

    if out_bits == 0 {
        println!();
        return Ok(());
    }

    let out = ascon_cxof::xof_bits_with_rounds(&msg, &label, out_bits, Rounds::from_count(rounds));

    // Single-line uppercase hex to match published vector formatting
    println!("{}", hex::encode_upper(&out));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::decode_hex;

    #[test]
    fn permissive_hex_decoding() {
        assert_eq!(decode_hex("").unwrap(), b"");
        assert_eq!(decode_hex("0x").unwrap(), b"");
        assert_eq!(decode_hex("00ff").unwrap(), vec![0x00, 0xff]);
        assert_eq!(decode_hex("0x00 ff").unwrap(), vec![0x00, 0xff]);
        assert_eq!(decode_hex("fff").unwrap(), vec![0x0f, 0xff]);
        assert!(decode_hex("zz").is_err());
    }
}
