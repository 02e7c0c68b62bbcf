//! RSA message-encoding schemes operating on caller-provided buffers.
//!
//! This crate implements the four standard RSA paddings (PKCS#1 v1.5
//! encryption and signature padding, RSAES-OAEP and RSASSA-PSS) together
//! with the MGF1 mask generation function they share. It covers only the
//! conversion between application payloads (plaintexts, message digests) and
//! the fixed-width encoded block that is fed to, or produced by, the RSA
//! modular-exponentiation primitive. The exponentiation itself, key
//! management and hashing of application messages are the caller's business.
//!
//! Every function works in caller-provided byte slices and performs no heap
//! allocation. The encoded-block buffer must be exactly as long as the RSA
//! modulus in bytes; PSS additionally accounts for the one-byte adjustment
//! when the modulus bit length is 1 mod 8. Hashes are supplied as
//! [`digest::Digest`] implementations and randomness as a
//! [`rand_core::TryCryptoRng`].
//!
//! # Example
//!
//! ```
//! use rsa_padding::{pkcs1v15_encrypt_pad, pkcs1v15_encrypt_unpad};
//! use rand_chacha::ChaCha8Rng;
//! use rand_core::SeedableRng;
//!
//! let mut rng = ChaCha8Rng::from_seed([42; 32]);
//! let mut em = [0u8; 64];
//! pkcs1v15_encrypt_pad(&mut rng, b"attack at dawn", 0, &mut em).unwrap();
//!
//! let mut plaintext = [0u8; 64];
//! let len = pkcs1v15_encrypt_unpad(&em, 0, Some(&mut plaintext)).unwrap();
//! assert_eq!(&plaintext[..len], b"attack at dawn");
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod errors;
pub mod mgf;
pub mod oaep;
pub mod oid;
pub mod pkcs1v15;
pub mod pss;

pub use crate::errors::{Error, Result};
pub use crate::mgf::{mgf1_fill, mgf1_xor};
pub use crate::oaep::{oaep_pad, oaep_unpad};
pub use crate::pkcs1v15::{
    pkcs1v15_encrypt_pad, pkcs1v15_encrypt_unpad, pkcs1v15_sign_check, pkcs1v15_sign_pad,
    pkcs1v15_sign_verify, PKCS1_NO_ASN1, PKCS1_OPTIONAL_HASH_OID,
};
pub use crate::pss::{emsa_pss_encode, emsa_pss_verify, Salt};
