//! Encryption and Decryption using [OAEP padding](https://datatracker.ietf.org/doc/html/rfc8017#section-7.1).

use digest::{Digest, FixedOutputReset};
use rand_core::TryCryptoRng;

use crate::errors::{Error, Result};
use crate::mgf::mgf1_xor;

/// Applies the OAEP padding scheme.
///
/// Writes `EM = 0x00 || maskedSeed || maskedDB` into `em`, with
/// `DB = lHash || PS || 0x01 || M` masked under MGF1 as in RFC 8017 § 7.1.1.
/// The message must be no longer than the length of the modulus minus
/// `2 + 2 * hLen`.
///
/// A caller-supplied `seed` of up to `hLen` bytes is left-justified into the
/// zero-filled seed field; pass `None` (the normal case) to draw a fresh
/// `hLen`-byte seed from `rng`. No flag bits are defined, so `flags` must
/// be 0.
pub fn oaep_pad<R, D>(
    rng: &mut R,
    msg: &[u8],
    label: &[u8],
    seed: Option<&[u8]>,
    flags: u32,
    em: &mut [u8],
) -> Result<()>
where
    R: TryCryptoRng + ?Sized,
    D: Digest + FixedOutputReset,
{
    let k = em.len();
    let h_len = <D as Digest>::output_size();

    if flags != 0 || msg.len() + 2 * h_len + 2 > k {
        return Err(Error::InvalidArgument);
    }
    if let Some(seed) = seed {
        if seed.len() > h_len {
            return Err(Error::InvalidArgument);
        }
    }

    em[0] = 0x00;
    let (seed_buf, db) = em[1..].split_at_mut(h_len);

    // DB = lHash || PS || 0x01 || M
    let mut digest = D::new();
    Digest::update(&mut digest, label);
    let l_hash = digest.finalize_reset();
    db[..h_len].copy_from_slice(&l_hash);

    let db_len = k - h_len - 1;
    db[h_len..db_len - msg.len() - 1].fill(0x00);
    db[db_len - msg.len() - 1] = 0x01;
    db[db_len - msg.len()..].copy_from_slice(msg);

    match seed {
        Some(seed) => {
            seed_buf.fill(0x00);
            seed_buf[..seed.len()].copy_from_slice(seed);
        }
        None => rng.try_fill_bytes(seed_buf).map_err(|_| Error::Rng)?,
    }

    mgf1_xor(db, &mut digest, seed_buf);
    mgf1_xor(seed_buf, &mut digest, db);

    Ok(())
}

/// Removes the OAEP padding scheme, unmasking `em` in place.
///
/// On success returns the plaintext length. With `out` absent only the
/// length is reported; with `out` present the plaintext is copied into its
/// prefix, or [`Error::BufferTooSmall`] is returned if it cannot hold the
/// plaintext. The label must match the one used when padding.
///
/// Note that whether this function returns an error or not discloses secret
/// information, and the label-hash and padding-string checks below are not
/// constant-time. If an attacker can cause this function to run repeatedly
/// and learn whether each instance returned an error, they can mount a
/// Manger attack; protocols must defend against that at a higher layer.
pub fn oaep_unpad<D>(
    em: &mut [u8],
    label: &[u8],
    flags: u32,
    out: Option<&mut [u8]>,
) -> Result<usize>
where
    D: Digest + FixedOutputReset,
{
    let k = em.len();
    let h_len = <D as Digest>::output_size();

    if flags != 0 {
        return Err(Error::InvalidArgument);
    }
    // The shortest well-formed block is 0x00 || seed || lHash || 0x01.
    if k < 2 * h_len + 2 || em[0] != 0x00 {
        return Err(Error::InvalidArgument);
    }

    let (seed, db) = em[1..].split_at_mut(h_len);

    let mut digest = D::new();
    mgf1_xor(seed, &mut digest, db);
    mgf1_xor(db, &mut digest, seed);

    Digest::update(&mut digest, label);
    let l_hash = digest.finalize_reset();
    if db[..h_len] != l_hash[..] {
        return Err(Error::InvalidArgument);
    }

    // PS is zero or more 0x00 bytes terminated by 0x01; anything else is
    // malformed, as is running out of DB without a separator.
    let sep = db[h_len..]
        .iter()
        .position(|&el| el != 0x00)
        .ok_or(Error::InvalidArgument)?;
    if db[h_len + sep] != 0x01 {
        return Err(Error::InvalidArgument);
    }

    let msg_start = h_len + sep + 1;
    let needed = db.len() - msg_start;

    let Some(out) = out else {
        return Ok(needed);
    };
    if out.len() < needed {
        return Err(Error::BufferTooSmall { needed });
    }
    out[..needed].copy_from_slice(&db[msg_start..]);

    Ok(needed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;
    use sha1::Sha1;
    use sha2::Sha256;

    #[test]
    fn test_roundtrip() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let msg = b"arbitrary plaintext";
        let mut em = [0u8; 128];
        oaep_pad::<_, Sha256>(&mut rng, msg, b"", None, 0, &mut em).unwrap();
        assert_eq!(em[0], 0x00);

        let mut plaintext = [0u8; 128];
        let len = oaep_unpad::<Sha256>(&mut em, b"", 0, Some(&mut plaintext)).unwrap();
        assert_eq!(&plaintext[..len], msg);
    }

    #[test]
    fn test_label_mismatch() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let mut em = [0u8; 128];
        oaep_pad::<_, Sha1>(&mut rng, b"payload", b"alpha", None, 0, &mut em).unwrap();
        assert_eq!(
            oaep_unpad::<Sha1>(&mut em, b"beta", 0, None),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn test_short_seed_is_left_justified() {
        // The same message padded with the same short seed is deterministic.
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let mut em1 = [0u8; 96];
        let mut em2 = [0u8; 96];
        oaep_pad::<_, Sha1>(&mut rng, b"msg", b"", Some(&[0xAB; 7]), 0, &mut em1).unwrap();
        oaep_pad::<_, Sha1>(&mut rng, b"msg", b"", Some(&[0xAB; 7]), 0, &mut em2).unwrap();
        assert_eq!(em1, em2);

        let too_long = [0u8; 21];
        assert_eq!(
            oaep_pad::<_, Sha1>(&mut rng, b"msg", b"", Some(&too_long), 0, &mut em1),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn test_message_too_long() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let mut em = [0u8; 64];
        // 64 - 2*32 - 2 leaves no room at all for SHA-256
        assert_eq!(
            oaep_pad::<_, Sha256>(&mut rng, b"x", b"", None, 0, &mut em),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn test_unpad_rejects_nonzero_leading_byte() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let mut em = [0u8; 128];
        oaep_pad::<_, Sha256>(&mut rng, b"payload", b"", None, 0, &mut em).unwrap();
        em[0] = 0x01;
        assert_eq!(
            oaep_unpad::<Sha256>(&mut em, b"", 0, None),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn test_unpad_buffer_too_small() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let mut em = [0u8; 128];
        oaep_pad::<_, Sha256>(&mut rng, b"twelve bytes", b"", None, 0, &mut em).unwrap();

        let mut tiny = [0u8; 4];
        assert_eq!(
            oaep_unpad::<Sha256>(&mut em, b"", 0, Some(&mut tiny)),
            Err(Error::BufferTooSmall { needed: 12 })
        );
    }
}
