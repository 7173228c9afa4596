use ascon_cxof::{xof_bits_with_rounds, xof_with_rounds, Rounds};
use bolero::check;

#[test]
fn fuzz_bit_byte_agreement() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>, u8)>()
        .for_each(|(msg, label, bits)| {
            let bits = usize::from(*bits);
            let out = xof_bits_with_rounds(msg, label, bits, Rounds::P12);

            // =================================================================
            // SIZE & MASK DISCIPLINE
            // =================================================================
            assert_eq!(out.len(), bits.div_ceil(8));

            let rem = bits % 8;
            if bits > 0 {
                let by_bytes = xof_with_rounds(msg, label, out.len(), Rounds::P12);
                if rem == 0 {
                    assert_eq!(out, by_bytes, "whole-byte request must be unmasked");
                } else {
                    let mask = 0xFFu8 << (8 - rem);
                    assert_eq!(out[..out.len() - 1], by_bytes[..out.len() - 1]);
                    assert_eq!(out[out.len() - 1], by_bytes[out.len() - 1] & mask);
                }
            }
        });
}
