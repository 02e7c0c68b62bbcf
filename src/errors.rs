//! Error types.

/// Alias for [`core::result::Result`] with the `rsa-padding` error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A length precondition was violated, an unrecognized flag bit was set,
    /// or a remove/verify path found the encoded block malformed.
    InvalidArgument,

    /// The caller's output buffer is shorter than the recovered plaintext;
    /// `needed` is the length a successful call would have returned.
    BufferTooSmall {
        /// Required output buffer length in bytes.
        needed: usize,
    },

    /// The PKCS#1 v1.5 signature comparison failed.
    Verification,

    /// The random source returned an error.
    Rng,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Error::InvalidArgument => write!(f, "invalid argument"),
            Error::BufferTooSmall { needed } => {
                write!(f, "output buffer too small, {} bytes required", needed)
            }
            Error::Verification => write!(f, "verification error"),
            Error::Rng => write!(f, "rng error"),
        }
    }
}
