use super::Cryptographer;
use failure::Fail;
use once_cell::sync::OnceCell;

static CRYPTOGRAPHER: OnceCell<&'static dyn Cryptographer> = OnceCell::new();

/// Returned when a backend is installed after one is already in place.
#[derive(Debug, Fail)]
#[fail(display = "Cryptographer already initialized")]
pub struct SetCryptographerError(());

/// Install a boxed backend; it is leaked to live for the rest of the process.
pub fn set_boxed_cryptographer(c: Box<dyn Cryptographer>) -> Result<(), SetCryptographerError> {
    set_cryptographer(Box::leak(c))
}

/// Install the backend that computes request MACs and payload hashes.
///
/// Only needed when the crate is built with `default-features = false` and neither
/// `use_ring` nor `use_openssl`, e.g. to sign with an HSM-backed or platform HMAC. Call it
/// once at startup, before the first `generate`, `mac` or `PayloadHasher` call; signing
/// without a backend panics.
///
/// With a backend feature enabled the builtin backend is installed on first use, so a later
/// call returns `SetCryptographerError`.
pub fn set_cryptographer(c: &'static dyn Cryptographer) -> Result<(), SetCryptographerError> {
    CRYPTOGRAPHER.set(c).map_err(|_| SetCryptographerError(()))
}

pub(crate) fn get_cryptographer() -> &'static dyn Cryptographer {
    autoinit_crypto();
    CRYPTOGRAPHER
        .get()
        .copied()
        .expect("`forthecity-hawk` cryptographer not initialized!")
}

#[cfg(feature = "use_ring")]
#[inline]
fn autoinit_crypto() {
    let _ = set_cryptographer(&super::ring::RingCryptographer);
}

#[cfg(feature = "use_openssl")]
#[inline]
fn autoinit_crypto() {
    let _ = set_cryptographer(&super::openssl::OpensslCryptographer);
}

#[cfg(not(any(feature = "use_openssl", feature = "use_ring")))]
#[inline]
fn autoinit_crypto() {}

#[cfg(all(test, any(feature = "use_ring", feature = "use_openssl")))]
mod test {
    use super::*;
    use crate::crypto::{CryptoError, Hasher, HmacKey};
    use crate::DigestAlgorithm;

    struct RefusingCryptographer;

    impl Cryptographer for RefusingCryptographer {
        fn new_key(&self, a: DigestAlgorithm, _: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
            Err(CryptoError::UnsupportedDigest(a))
        }

        fn new_hasher(&self, a: DigestAlgorithm) -> Result<Box<dyn Hasher>, CryptoError> {
            Err(CryptoError::UnsupportedDigest(a))
        }
    }

    #[test]
    fn builtin_backend_cannot_be_replaced() {
        get_cryptographer();
        assert!(set_cryptographer(&RefusingCryptographer).is_err());
        assert!(set_boxed_cryptographer(Box::new(RefusingCryptographer)).is_err());
    }
}
