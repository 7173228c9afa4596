use ascon_cxof::{xof_with_rounds, Rounds};
use bolero::check;

#[test]
fn fuzz_determinism_and_prefix() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(msg, label)| {
            // =================================================================
            // DETERMINISM
            // =================================================================
            for rounds in [Rounds::P6, Rounds::P8, Rounds::P12] {
                let a = xof_with_rounds(msg, label, 48, rounds);
                let b = xof_with_rounds(msg, label, 48, rounds);
                assert_eq!(a, b, "non-deterministic output ({rounds:?})");

                // =============================================================
                // PREFIX CONSISTENCY
                // =============================================================
                for outlen in [0, 1, 8, 9, 32, 47] {
                    let short = xof_with_rounds(msg, label, outlen, rounds);
                    assert_eq!(short, a[..outlen], "prefix mismatch at {outlen}");
                }
            }
        });
}

#[test]
fn fuzz_round_counts_separate() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(msg, label)| {
            let out6 = xof_with_rounds(msg, label, 32, Rounds::P6);
            let out8 = xof_with_rounds(msg, label, 32, Rounds::P8);
            let out12 = xof_with_rounds(msg, label, 32, Rounds::P12);

            assert_ne!(out6, out8, "6 and 8 round outputs collided");
            assert_ne!(out8, out12, "8 and 12 round outputs collided");
            assert_ne!(out6, out12, "6 and 12 round outputs collided");
        });
}
