use super::{CryptoError, Cryptographer, Hasher, HmacKey};
use crate::DigestAlgorithm;
use ::ring::{digest, hmac};
use std::convert::{TryFrom, TryInto};

impl From<::ring::error::Unspecified> for CryptoError {
    // Ring's errors are entirely opaque
    fn from(_: ::ring::error::Unspecified) -> Self {
        CryptoError::Other("Unspecified ring error".to_string())
    }
}

pub struct RingCryptographer;

struct RingHmacKey(hmac::Key);

impl HmacKey for RingHmacKey {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let tag = hmac::sign(&self.0, data);
        Ok(tag.as_ref().to_vec())
    }
}

// This is always `Some` until `finish` is called.
struct RingHasher(Option<digest::Context>);

impl Hasher for RingHasher {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.0
            .as_mut()
            .ok_or_else(|| CryptoError::Other("update called after `finish`".to_string()))?
            .update(data);
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>, CryptoError> {
        let digest = self
            .0
            .take()
            .ok_or_else(|| CryptoError::Other("`finish` called twice".to_string()))?
            .finish();
        Ok(digest.as_ref().to_vec())
    }
}

impl Cryptographer for RingCryptographer {
    fn new_key(
        &self,
        algorithm: DigestAlgorithm,
        key: &[u8],
    ) -> Result<Box<dyn HmacKey>, CryptoError> {
        let k = hmac::Key::new(algorithm.try_into()?, key);
        Ok(Box::new(RingHmacKey(k)))
    }

    fn new_hasher(&self, algorithm: DigestAlgorithm) -> Result<Box<dyn Hasher>, CryptoError> {
        let ctx = digest::Context::new(algorithm.try_into()?);
        Ok(Box::new(RingHasher(Some(ctx))))
    }
}

impl TryFrom<DigestAlgorithm> for &'static digest::Algorithm {
    type Error = CryptoError;
    fn try_from(algorithm: DigestAlgorithm) -> Result<Self, CryptoError> {
        match algorithm {
            DigestAlgorithm::Sha256 => Ok(&digest::SHA256),
            DigestAlgorithm::Sha384 => Ok(&digest::SHA384),
            DigestAlgorithm::Sha512 => Ok(&digest::SHA512),
        }
    }
}

impl TryFrom<DigestAlgorithm> for hmac::Algorithm {
    type Error = CryptoError;
    fn try_from(algorithm: DigestAlgorithm) -> Result<Self, CryptoError> {
        match algorithm {
            DigestAlgorithm::Sha256 => Ok(hmac::HMAC_SHA256),
            DigestAlgorithm::Sha384 => Ok(hmac::HMAC_SHA384),
            DigestAlgorithm::Sha512 => Ok(hmac::HMAC_SHA512),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hmac_output_length_follows_algorithm() {
        let key = RingCryptographer
            .new_key(DigestAlgorithm::Sha384, b"secret-key")
            .unwrap();
        assert_eq!(key.sign(b"data").unwrap().len(), 48);
    }

    #[test]
    fn hasher_refuses_second_finish() {
        let mut hasher = RingCryptographer
            .new_hasher(DigestAlgorithm::Sha256)
            .unwrap();
        hasher.update(b"abc").unwrap();
        assert_eq!(hasher.finish().unwrap().len(), 32);
        assert!(hasher.finish().is_err());
    }
}
