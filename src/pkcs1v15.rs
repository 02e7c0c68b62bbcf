//! PKCS#1 v1.5 encryption and signature padding as described in
//! [RFC8017 § 7.2 and § 9.2].
//!
//! [RFC8017 § 7.2 and § 9.2]: https://datatracker.ietf.org/doc/html/rfc8017

use rand_core::TryCryptoRng;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::errors::{Error, Result};

/// Omit the DigestInfo wrapping when applying signature padding; the digest
/// bytes are embedded directly after the `0x00` separator.
pub const PKCS1_NO_ASN1: u32 = 1;

/// Verification only: if no OID matches (or none was supplied), accept a
/// block padded without the DigestInfo wrapping as a last resort.
pub const PKCS1_OPTIONAL_HASH_OID: u32 = 2;

const BLOCKTYPE_SIGN: u8 = 0x01;
const BLOCKTYPE_ENCRYPT: u8 = 0x02;

const ASN1_SEQUENCE: u8 = 0x30;
const ASN1_OCTET_STRING: u8 = 0x04;

// Embedded DER lengths must fit in one byte with the high bit clear.
const MAX_DIGEST_INFO_LEN: usize = 0x80;

/// Fills the provided slice with random values, which are guaranteed
/// to not be zero.
#[inline]
fn non_zero_random_bytes<R: TryCryptoRng + ?Sized>(rng: &mut R, data: &mut [u8]) -> Result<()> {
    rng.try_fill_bytes(data).map_err(|_| Error::Rng)?;

    for el in data {
        while *el == 0u8 {
            rng.try_fill_bytes(core::slice::from_mut(el))
                .map_err(|_| Error::Rng)?;
        }
    }

    Ok(())
}

/// Applies the padding scheme from PKCS#1 v1.5 for encryption.
///
/// Writes `EM = 0x00 || 0x02 || PS || 0x00 || M` into `em`, where `PS` is
/// `em.len() - msg.len() - 3` uniformly random nonzero bytes. The message
/// must be no longer than the length of the modulus minus 11 bytes. No flag
/// bits are defined; `flags` must be 0.
pub fn pkcs1v15_encrypt_pad<R>(rng: &mut R, msg: &[u8], flags: u32, em: &mut [u8]) -> Result<()>
where
    R: TryCryptoRng + ?Sized,
{
    let k = em.len();
    if flags != 0 || msg.len() + 11 > k {
        return Err(Error::InvalidArgument);
    }

    em[0] = 0x00;
    em[1] = BLOCKTYPE_ENCRYPT;
    non_zero_random_bytes(rng, &mut em[2..k - msg.len() - 1])?;
    em[k - msg.len() - 1] = 0x00;
    em[k - msg.len()..].copy_from_slice(msg);

    Ok(())
}

/// Removes the encryption padding scheme from PKCS#1 v1.5.
///
/// On success returns the plaintext length. With `out` absent only the
/// length is reported; with `out` present the plaintext is copied into its
/// prefix, or [`Error::BufferTooSmall`] is returned if it cannot hold the
/// plaintext.
///
/// The format-byte checks are folded into a single validity bit so that a
/// well-formed prefix and a malformed one take the same path; the scan for
/// the zero delimiter stops at the first hit. Note that whether this
/// function returns an error or not still discloses secret information: if
/// an attacker can cause it to run repeatedly and learn whether each
/// instance returned an error, they can mount a Bleichenbacher attack.
/// Protocols must defend against that at a higher layer.
pub fn pkcs1v15_encrypt_unpad(em: &[u8], flags: u32, out: Option<&mut [u8]>) -> Result<usize> {
    let k = em.len();
    if flags != 0 || k < 2 {
        return Err(Error::InvalidArgument);
    }

    let mut valid = em[0].ct_eq(&0x00) & em[1].ct_eq(&BLOCKTYPE_ENCRYPT);

    // The offset of the first zero byte after the nonzero padding string.
    let mut index = k;
    for (i, el) in em.iter().enumerate().skip(2) {
        if *el == 0x00 {
            index = i;
            break;
        }
    }

    valid &= Choice::from((index < k) as u8);
    if !bool::from(valid) {
        return Err(Error::InvalidArgument);
    }

    let needed = k - index - 1;
    let Some(out) = out else {
        return Ok(needed);
    };
    if out.len() < needed {
        return Err(Error::BufferTooSmall { needed });
    }
    out[..needed].copy_from_slice(&em[index + 1..]);

    Ok(needed)
}

/// Applies the padding scheme from PKCS#1 v1.5 for signatures.
///
/// Writes `EM = 0x00 || 0x01 || PS || 0x00 || T` into `em`, where `PS` is
/// all `0xFF` and at least eight bytes long. `T` depends on the arguments:
///
/// * OID supplied and [`PKCS1_NO_ASN1`] clear: the DER DigestInfo
///   `SEQUENCE { SEQUENCE { OID, parameters }, OCTET STRING hash }`. The OID
///   bytes must already carry their tag and length (see [`crate::oid`]).
/// * no OID and [`PKCS1_NO_ASN1`] clear: the bare `0x04 || len || hash`
///   octet string, historically used for MD5.
/// * [`PKCS1_NO_ASN1`] set: the digest bytes alone.
///
/// The embedded lengths must each fit in one byte, so the DigestInfo is
/// limited to 0x80 bytes. [`PKCS1_NO_ASN1`] is the only recognized flag bit.
pub fn pkcs1v15_sign_pad(
    hashed: &[u8],
    hash_oid: Option<&[u8]>,
    flags: u32,
    em: &mut [u8],
) -> Result<()> {
    if flags & !PKCS1_NO_ASN1 != 0 {
        return Err(Error::InvalidArgument);
    }

    let k = em.len();
    let insert_asn1 = flags & PKCS1_NO_ASN1 == 0;
    let oid = match hash_oid {
        Some(oid) if !oid.is_empty() => Some(oid),
        _ => None,
    };

    let t_len = match (insert_asn1, oid) {
        // two SEQUENCE headers, one OCTET STRING header, then the digest
        (true, Some(oid)) => 6 + oid.len() + hashed.len(),
        (true, None) => 2 + hashed.len(),
        (false, _) => hashed.len(),
    };

    if t_len > MAX_DIGEST_INFO_LEN {
        return Err(Error::InvalidArgument);
    }

    // Small keys cannot sign the larger SHA digests: insist on the eight
    // 0xFF bytes the format requires.
    if 3 + 8 + t_len > k {
        return Err(Error::InvalidArgument);
    }

    let ps_len = k - 3 - t_len;

    em[0] = 0x00;
    em[1] = BLOCKTYPE_SIGN;
    em[2..2 + ps_len].fill(0xff);
    em[2 + ps_len] = 0x00;

    let t = &mut em[3 + ps_len..];
    if insert_asn1 {
        let digest_start = t_len - hashed.len();
        if let Some(oid) = oid {
            t[0] = ASN1_SEQUENCE;
            t[1] = (t_len - 2) as u8;
            t[2] = ASN1_SEQUENCE;
            t[3] = oid.len() as u8;
            t[4..4 + oid.len()].copy_from_slice(oid);
        }
        t[digest_start - 2] = ASN1_OCTET_STRING;
        t[digest_start - 1] = hashed.len() as u8;
        t[digest_start..].copy_from_slice(hashed);
    } else {
        t.copy_from_slice(hashed);
    }

    Ok(())
}

/// Checks a PKCS#1 v1.5 signature block against a single candidate OID.
///
/// Re-applies the padding with the candidate OID into `scratch` (wiped
/// first) and compares the result against `em` in constant time. `scratch`
/// must be at least `em.len()` bytes. A mismatch is
/// [`Error::Verification`].
pub fn pkcs1v15_sign_check(
    hashed: &[u8],
    hash_oid: Option<&[u8]>,
    em: &[u8],
    flags: u32,
    scratch: &mut [u8],
) -> Result<()> {
    let expected = scratch
        .get_mut(..em.len())
        .ok_or(Error::InvalidArgument)?;
    expected.zeroize();

    pkcs1v15_sign_pad(hashed, hash_oid, flags, expected)?;

    if bool::from(expected.ct_eq(em)) {
        Ok(())
    } else {
        Err(Error::Verification)
    }
}

/// Verifies a PKCS#1 v1.5 signature block against a set of candidate OIDs.
///
/// Each entry of `hash_oids` is tried in order with [`pkcs1v15_sign_check`]
/// until one matches. If the set is empty, or every entry failed and
/// [`PKCS1_OPTIONAL_HASH_OID`] is set, one further check is made without the
/// DigestInfo wrapping. The result of the last attempt is returned.
/// [`PKCS1_OPTIONAL_HASH_OID`] is the only recognized flag bit.
pub fn pkcs1v15_sign_verify(
    hashed: &[u8],
    hash_oids: &[&[u8]],
    em: &[u8],
    flags: u32,
    scratch: &mut [u8],
) -> Result<()> {
    if flags & !PKCS1_OPTIONAL_HASH_OID != 0 {
        return Err(Error::InvalidArgument);
    }

    let mut last = Err(Error::Verification);
    for &oid in hash_oids {
        last = pkcs1v15_sign_check(hashed, Some(oid), em, 0, scratch);
        if last.is_ok() {
            return last;
        }
    }

    if hash_oids.is_empty() || flags & PKCS1_OPTIONAL_HASH_OID != 0 {
        return pkcs1v15_sign_check(hashed, None, em, PKCS1_NO_ASN1, scratch);
    }

    last
}
