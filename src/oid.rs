//! DigestInfo `AlgorithmIdentifier` encodings recognized by PKCS#1 v1.5
//! signature verification.
//!
//! Each entry is the DER bytes of the digest OID (tag, length and value),
//! optionally followed by the explicit NULL parameters. Both encodings occur
//! in the wild, so every digest gets a "long" form (with `05 00`) and a
//! "short" form (parameters omitted), and the per-digest sets list the long
//! form first. [`crate::pkcs1v15_sign_verify`] accepts a signature matching
//! either.

/// MD5 OID (1.2.840.113549.2.5) with explicit NULL parameters.
pub const MD5_OID_LONG: &[u8] = &[
    0x06, 0x08, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x02, 0x05, 0x05, 0x00,
];
/// MD5 OID (1.2.840.113549.2.5) with parameters omitted.
pub const MD5_OID_SHORT: &[u8] = &[0x06, 0x08, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x02, 0x05];

/// SHA-1 OID (1.3.14.3.2.26) with explicit NULL parameters.
pub const SHA1_OID_LONG: &[u8] = &[0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a, 0x05, 0x00];
/// SHA-1 OID (1.3.14.3.2.26) with parameters omitted.
pub const SHA1_OID_SHORT: &[u8] = &[0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a];

/// SHA-256 OID (2.16.840.1.101.3.4.2.1) with explicit NULL parameters.
pub const SHA256_OID_LONG: &[u8] = &[
    0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01, 0x05, 0x00,
];
/// SHA-256 OID (2.16.840.1.101.3.4.2.1) with parameters omitted.
pub const SHA256_OID_SHORT: &[u8] = &[
    0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01,
];

/// SHA-384 OID (2.16.840.1.101.3.4.2.2) with explicit NULL parameters.
pub const SHA384_OID_LONG: &[u8] = &[
    0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x02, 0x05, 0x00,
];
/// SHA-384 OID (2.16.840.1.101.3.4.2.2) with parameters omitted.
pub const SHA384_OID_SHORT: &[u8] = &[
    0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x02,
];

/// SHA-512 OID (2.16.840.1.101.3.4.2.3) with explicit NULL parameters.
pub const SHA512_OID_LONG: &[u8] = &[
    0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03, 0x05, 0x00,
];
/// SHA-512 OID (2.16.840.1.101.3.4.2.3) with parameters omitted.
pub const SHA512_OID_SHORT: &[u8] = &[
    0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03,
];

/// Both accepted MD5 encodings, long form first.
pub const MD5_OIDS: &[&[u8]] = &[MD5_OID_LONG, MD5_OID_SHORT];
/// Both accepted SHA-1 encodings, long form first.
pub const SHA1_OIDS: &[&[u8]] = &[SHA1_OID_LONG, SHA1_OID_SHORT];
/// Both accepted SHA-256 encodings, long form first.
pub const SHA256_OIDS: &[&[u8]] = &[SHA256_OID_LONG, SHA256_OID_SHORT];
/// Both accepted SHA-384 encodings, long form first.
pub const SHA384_OIDS: &[&[u8]] = &[SHA384_OID_LONG, SHA384_OID_SHORT];
/// Both accepted SHA-512 encodings, long form first.
pub const SHA512_OIDS: &[&[u8]] = &[SHA512_OID_LONG, SHA512_OID_SHORT];
