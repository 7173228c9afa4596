use ascon_cxof::{hash, verify};
use bolero::check;

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let digest = hash(data);
        assert!(verify(data, &digest), "verify() failed on correct data");

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Data Corruption
        if !data.is_empty() {
            let mut corrupted_data = data.clone();
            corrupted_data[0] ^= 0x01;
            assert!(
                !verify(&corrupted_data, &digest),
                "verify() succeeded on corrupted data"
            );
        }

        // 2. Digest Corruption
        let mut bad_digest = digest;
        bad_digest[0] ^= 0xFF;
        assert!(
            !verify(data, &bad_digest),
            "verify() succeeded on corrupted digest"
        );
    });
}
