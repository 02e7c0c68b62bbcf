//! Mask generation function common to both PSS and OAEP padding

use digest::{Digest, FixedOutputReset};

/// Mask generation function: fills `out` with MGF1(seed, out.len()) as
/// defined in RFC 8017 B.2.1.
///
/// Block `i` is `Hash(seed || I2OSP(i, 4))`; the final block is truncated.
/// The digest state is reset and reused across blocks.
///
/// Panics if out is larger than 2**32. This is in accordance with RFC 8017 - PKCS #1 B.2.1
pub fn mgf1_fill<D>(out: &mut [u8], digest: &mut D, seed: &[u8])
where
    D: Digest + FixedOutputReset,
{
    let mut counter = [0u8; 4];

    const MAX_LEN: u64 = u32::MAX as u64 + 1;
    assert!(out.len() as u64 <= MAX_LEN);

    for block in out.chunks_mut(<D as Digest>::output_size()) {
        Digest::update(digest, seed);
        Digest::update(digest, counter);

        let digest_output = digest.finalize_reset();
        block.copy_from_slice(&digest_output[..block.len()]);

        inc_counter(&mut counter);
    }
}

/// Mask generation function: XORs MGF1(seed, out.len()) into `out` in place.
///
/// Panics if out is larger than 2**32. This is in accordance with RFC 8017 - PKCS #1 B.2.1
pub fn mgf1_xor<D>(out: &mut [u8], digest: &mut D, seed: &[u8])
where
    D: Digest + FixedOutputReset,
{
    let mut counter = [0u8; 4];

    const MAX_LEN: u64 = u32::MAX as u64 + 1;
    assert!(out.len() as u64 <= MAX_LEN);

    for block in out.chunks_mut(<D as Digest>::output_size()) {
        Digest::update(digest, seed);
        Digest::update(digest, counter);

        let digest_output = digest.finalize_reset();
        for (el, mask) in block.iter_mut().zip(digest_output.iter()) {
            *el ^= mask;
        }

        inc_counter(&mut counter);
    }
}

fn inc_counter(counter: &mut [u8; 4]) {
    for i in (0..4).rev() {
        counter[i] = counter[i].wrapping_add(1);
        if counter[i] != 0 {
            // No overflow
            return;
        }
    }
}
