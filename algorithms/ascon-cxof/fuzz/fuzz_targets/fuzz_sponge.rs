#![no_main]

use ascon_cxof::{xof_with_rounds, Rounds};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte chooses the label/message split and the round count
    let rounds = Rounds::from_count(u32::from(data[0]));
    let split = (data[0] as usize) % data.len();
    let (label, msg) = data.split_at(split);

    // =============================================================================
    // DETERMINISM
    // =============================================================================

    let a = xof_with_rounds(msg, label, 64, rounds);
    let b = xof_with_rounds(msg, label, 64, rounds);
    assert_eq!(a, b, "one-shot XOF is not deterministic");

    // =============================================================================
    // PREFIX CONSISTENCY
    // =============================================================================

    for outlen in [1, 8, 9, 32, 63] {
        let short = xof_with_rounds(msg, label, outlen, rounds);
        assert_eq!(
            short,
            a[..outlen],
            "shorter output is not a prefix of the longer one"
        );
    }

    // =============================================================================
    // LABEL BINDING
    // =============================================================================

    // Shifting one byte across the label/message boundary must change the
    // output (the length prefix and padding separate the two inputs).
    if !label.is_empty() {
        let shifted_label = &label[..label.len() - 1];
        let mut shifted_msg = vec![label[label.len() - 1]];
        shifted_msg.extend_from_slice(msg);

        let shifted = xof_with_rounds(&shifted_msg, shifted_label, 64, rounds);
        assert_ne!(a, shifted, "label/message boundary is malleable");
    }
});
