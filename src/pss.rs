//! Support for the [Probabilistic Signature Scheme] (PSS) a.k.a. RSASSA-PSS.
//!
//! Designed by Mihir Bellare and Phillip Rogaway. Specified in [RFC8017 § 9.1].
//!
//! [Probabilistic Signature Scheme]: https://en.wikipedia.org/wiki/Probabilistic_signature_scheme
//! [RFC8017 § 9.1]: https://datatracker.ietf.org/doc/html/rfc8017#section-9.1

use digest::{Digest, FixedOutputReset};
use rand_core::TryCryptoRng;
use subtle::ConstantTimeEq;

use crate::errors::{Error, Result};
use crate::mgf::mgf1_xor;

/// Salt input for [`emsa_pss_encode`].
#[derive(Clone, Copy, Debug)]
pub enum Salt<'a> {
    /// Draw this many salt bytes from the random source.
    Random(usize),
    /// Use the given bytes as the salt.
    Fixed(&'a [u8]),
}

impl Salt<'_> {
    fn len(&self) -> usize {
        match self {
            Salt::Random(len) => *len,
            Salt::Fixed(salt) => salt.len(),
        }
    }
}

/// When the modulus bit length is 1 mod 8, `emBits = nBits - 1` is a whole
/// number of bytes and the encoded message is one byte shorter than the
/// modulus; the block carries an extra leading 0x00 byte to make up the
/// difference. Splits that byte off, checking it on the verify path.
fn strip_leading_byte<'a>(
    em: &'a mut [u8],
    n_bits: usize,
    check: bool,
) -> Result<&'a mut [u8]> {
    if n_bits % 8 != 1 {
        return Ok(em);
    }
    if check && em[0] != 0x00 {
        return Err(Error::InvalidArgument);
    }
    em[0] = 0x00;
    Ok(&mut em[1..])
}

/// The number of most-significant bits of the leading encoded-message byte
/// that must be zero, `8 * emLen - emBits`. Anything outside a byte means
/// the block length and the modulus bit length disagree.
fn leading_zero_bits(em_len: usize, n_bits: usize) -> Result<usize> {
    let zero_bits = (8 * em_len + 1)
        .checked_sub(n_bits)
        .ok_or(Error::InvalidArgument)?;
    if zero_bits > 7 {
        return Err(Error::InvalidArgument);
    }
    Ok(zero_bits)
}

/// Applies the PSS encoding operation `EMSA-PSS-ENCODE` of RFC 8017 § 9.1.1.
///
/// Writes `EM = maskedDB || H || 0xBC` into `em`, where
/// `H = Hash(0x00^8 || mHash || salt)` and `DB = PS || 0x01 || salt` is
/// masked under MGF1(H). `em` must be as long as the modulus in bytes and
/// `n_bits` its exact bit length; the leftmost `8 * emLen - (nBits - 1)`
/// bits of the output are zero. The encoding requires
/// `emLen >= hLen + sLen + 2`. No flag bits are defined; `flags` must be 0.
pub fn emsa_pss_encode<R, D>(
    rng: &mut R,
    m_hash: &[u8],
    salt: Salt<'_>,
    n_bits: usize,
    flags: u32,
    em: &mut [u8],
) -> Result<()>
where
    R: TryCryptoRng + ?Sized,
    D: Digest + FixedOutputReset,
{
    if flags != 0 || em.is_empty() {
        return Err(Error::InvalidArgument);
    }

    let em = strip_leading_byte(em, n_bits, false)?;

    let em_len = em.len();
    let h_len = <D as Digest>::output_size();
    let s_len = salt.len();

    if em_len < h_len + s_len + 2 {
        return Err(Error::InvalidArgument);
    }
    let zero_bits = leading_zero_bits(em_len, n_bits)?;

    let db_len = em_len - h_len - 1;
    let ps_len = db_len - s_len - 1;
    let (db, h) = em.split_at_mut(db_len);

    // The salt goes to the tail of DB first so that M' can be hashed
    // straight out of its final position.
    match salt {
        Salt::Fixed(salt) => db[ps_len + 1..].copy_from_slice(salt),
        Salt::Random(_) => rng
            .try_fill_bytes(&mut db[ps_len + 1..])
            .map_err(|_| Error::Rng)?,
    }

    // H = Hash(M') with M' = 0x00^8 || mHash || salt
    let mut digest = D::new();
    Digest::update(&mut digest, [0u8; 8]);
    Digest::update(&mut digest, m_hash);
    Digest::update(&mut digest, &db[ps_len + 1..]);
    let hashed = digest.finalize_reset();
    h[..h_len].copy_from_slice(&hashed);

    // DB = PS || 0x01 || salt
    db[..ps_len].fill(0x00);
    db[ps_len] = 0x01;

    // maskedDB = DB xor MGF1(H, emLen - hLen - 1)
    mgf1_xor(db, &mut digest, &h[..h_len]);

    db[0] &= 0xff >> zero_bits;
    h[h_len] = 0xBC;

    Ok(())
}

/// Applies the PSS verification operation `EMSA-PSS-VERIFY` of
/// RFC 8017 § 9.1.2, unmasking `em` in place.
///
/// `s_len` is the expected salt length and `n_bits` the exact modulus bit
/// length. The trailer byte, the leading zero bits, the padding string and
/// the recomputed hash are all checked; the final hash comparison is
/// constant-time. Any mismatch is [`Error::InvalidArgument`].
pub fn emsa_pss_verify<D>(
    m_hash: &[u8],
    em: &mut [u8],
    s_len: usize,
    n_bits: usize,
    flags: u32,
) -> Result<()>
where
    D: Digest + FixedOutputReset,
{
    if flags != 0 || em.is_empty() {
        return Err(Error::InvalidArgument);
    }

    let em = strip_leading_byte(em, n_bits, true)?;

    let em_len = em.len();
    let h_len = <D as Digest>::output_size();
    let zero_bits = leading_zero_bits(em_len, n_bits)?;

    if em_len < h_len + s_len + 2
        || em[0] & 0xff_u8.checked_shl(8 - zero_bits as u32).unwrap_or(0) != 0
        || em[em_len - 1] != 0xBC
    {
        return Err(Error::InvalidArgument);
    }

    let db_len = em_len - h_len - 1;
    let ps_len = db_len - s_len - 1;
    let (db, h) = em.split_at_mut(db_len);
    let h = &h[..h_len];

    // DB = maskedDB xor MGF1(H, emLen - hLen - 1)
    let mut digest = D::new();
    mgf1_xor(db, &mut digest, h);
    db[0] &= 0xff >> zero_bits;

    // DB must open with emLen - sLen - hLen - 2 zero bytes and a 0x01.
    if db[..ps_len].iter().any(|&el| el != 0x00) || db[ps_len] != 0x01 {
        return Err(Error::InvalidArgument);
    }

    // H' = Hash(0x00^8 || mHash || salt)
    Digest::update(&mut digest, [0u8; 8]);
    Digest::update(&mut digest, m_hash);
    Digest::update(&mut digest, &db[ps_len + 1..]);
    let hashed = digest.finalize_reset();

    if bool::from(hashed.ct_eq(h)) {
        Ok(())
    } else {
        Err(Error::InvalidArgument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;
    use sha2::Sha256;

    #[test]
    fn test_roundtrip_random_salt() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let m_hash = [0x42u8; 32];
        let mut em = [0u8; 256];
        emsa_pss_encode::<_, Sha256>(&mut rng, &m_hash, Salt::Random(32), 2048, 0, &mut em)
            .unwrap();

        assert_eq!(em[255], 0xBC);
        assert_eq!(em[0] & 0x80, 0);
        emsa_pss_verify::<Sha256>(&m_hash, &mut em, 32, 2048, 0).unwrap();
    }

    #[test]
    fn test_empty_salt() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let m_hash = [0x17u8; 32];
        let mut em = [0u8; 128];
        emsa_pss_encode::<_, Sha256>(&mut rng, &m_hash, Salt::Fixed(&[]), 1024, 0, &mut em)
            .unwrap();
        emsa_pss_verify::<Sha256>(&m_hash, &mut em, 0, 1024, 0).unwrap();
    }

    #[test]
    fn test_wrong_trailer_rejected() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let m_hash = [0xABu8; 32];
        let mut em = [0u8; 256];
        emsa_pss_encode::<_, Sha256>(&mut rng, &m_hash, Salt::Random(32), 2048, 0, &mut em)
            .unwrap();
        em[255] = 0xBD;
        assert_eq!(
            emsa_pss_verify::<Sha256>(&m_hash, &mut em, 32, 2048, 0),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn test_salt_too_long() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let mut em = [0u8; 64];
        // emLen = 64 < 32 + 31 + 2
        assert_eq!(
            emsa_pss_encode::<_, Sha256>(
                &mut rng,
                &[0u8; 32],
                Salt::Random(31),
                512,
                0,
                &mut em
            ),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn test_modulus_one_mod_eight() {
        // 1025-bit modulus: the block is 129 bytes and the first byte is a
        // plain zero on both sides.
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let m_hash = [0x33u8; 32];
        let mut em = [0xFFu8; 129];
        emsa_pss_encode::<_, Sha256>(&mut rng, &m_hash, Salt::Random(32), 1025, 0, &mut em)
            .unwrap();
        assert_eq!(em[0], 0x00);
        assert_eq!(em[128], 0xBC);
        emsa_pss_verify::<Sha256>(&m_hash, &mut em, 32, 1025, 0).unwrap();

        em[0] = 0x01;
        assert_eq!(
            emsa_pss_verify::<Sha256>(&m_hash, &mut em, 32, 1025, 0),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn test_inconsistent_bit_length() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let mut em = [0u8; 256];
        assert_eq!(
            emsa_pss_encode::<_, Sha256>(&mut rng, &[0u8; 32], Salt::Random(32), 1024, 0, &mut em),
            Err(Error::InvalidArgument)
        );
    }
}
