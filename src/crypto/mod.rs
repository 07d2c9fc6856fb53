//! `forthecity-hawk` makes no assumptions about which crypto library signs its requests. By
//! default the `use_ring` feature provides a [`ring`]-backed implementation; `use_openssl`
//! switches to OpenSSL. With neither feature, install your own [`Cryptographer`] using
//! [`set_cryptographer`] before signing anything.

use crate::DigestAlgorithm;
use failure::Fail;

mod holder;
pub(crate) use holder::get_cryptographer;
pub use holder::{set_boxed_cryptographer, set_cryptographer, SetCryptographerError};

#[cfg(feature = "use_ring")]
mod ring;

#[cfg(feature = "use_openssl")]
mod openssl;

#[cfg(all(feature = "use_ring", feature = "use_openssl"))]
compile_error!("The `use_ring` and `use_openssl` features are mutually exclusive");

#[derive(Fail, Debug)]
pub enum CryptoError {
    /// The configured cryptographer does not support the digest algorithm.
    #[fail(display = "Digest algorithm {:?} is unsupported by this Cryptographer", _0)]
    UnsupportedDigest(DigestAlgorithm),

    /// The backend failed; the message comes from the underlying library.
    #[fail(display = "{}", _0)]
    Other(String),
}

/// A keyed MAC, ready to sign canonical strings.
pub trait HmacKey: Send + Sync {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// An incremental message digest. `finish` may only be called once.
pub trait Hasher: Send + Sync {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;
    fn finish(&mut self) -> Result<Vec<u8>, CryptoError>;
}

/// The set of primitives the signer needs from a crypto library.
pub trait Cryptographer: Send + Sync + 'static {
    fn new_key(
        &self,
        algorithm: DigestAlgorithm,
        key: &[u8],
    ) -> Result<Box<dyn HmacKey>, CryptoError>;
    fn new_hasher(&self, algorithm: DigestAlgorithm) -> Result<Box<dyn Hasher>, CryptoError>;
}

pub(crate) fn new_key(
    algorithm: DigestAlgorithm,
    key: &[u8],
) -> Result<Box<dyn HmacKey>, CryptoError> {
    get_cryptographer().new_key(algorithm, key)
}

pub(crate) fn new_hasher(algorithm: DigestAlgorithm) -> Result<Box<dyn Hasher>, CryptoError> {
    get_cryptographer().new_hasher(algorithm)
}
