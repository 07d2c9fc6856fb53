use super::{CryptoError, Cryptographer, Hasher, HmacKey};
use crate::DigestAlgorithm;
use ::openssl::error::ErrorStack;
use ::openssl::hash::MessageDigest;
use ::openssl::pkey::{PKey, Private};
use ::openssl::sign::Signer;
use std::convert::{TryFrom, TryInto};

impl From<ErrorStack> for CryptoError {
    fn from(e: ErrorStack) -> Self {
        CryptoError::Other(e.to_string())
    }
}

pub struct OpensslCryptographer;

struct OpensslHmacKey {
    key: PKey<Private>,
    digest: MessageDigest,
}

impl HmacKey for OpensslHmacKey {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut signer = Signer::new(self.digest, &self.key)?;
        signer.update(data)?;
        Ok(signer.sign_to_vec()?)
    }
}

struct OpensslHasher(::openssl::hash::Hasher);

impl Hasher for OpensslHasher {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.0.update(data)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>, CryptoError> {
        Ok(self.0.finish()?.to_vec())
    }
}

impl Cryptographer for OpensslCryptographer {
    fn new_key(
        &self,
        algorithm: DigestAlgorithm,
        key: &[u8],
    ) -> Result<Box<dyn HmacKey>, CryptoError> {
        Ok(Box::new(OpensslHmacKey {
            key: PKey::hmac(key)?,
            digest: algorithm.try_into()?,
        }))
    }

    fn new_hasher(&self, algorithm: DigestAlgorithm) -> Result<Box<dyn Hasher>, CryptoError> {
        let digest: MessageDigest = algorithm.try_into()?;
        Ok(Box::new(OpensslHasher(::openssl::hash::Hasher::new(digest)?)))
    }
}

impl TryFrom<DigestAlgorithm> for MessageDigest {
    type Error = CryptoError;
    fn try_from(algorithm: DigestAlgorithm) -> Result<Self, CryptoError> {
        match algorithm {
            DigestAlgorithm::Sha256 => Ok(MessageDigest::sha256()),
            DigestAlgorithm::Sha384 => Ok(MessageDigest::sha384()),
            DigestAlgorithm::Sha512 => Ok(MessageDigest::sha512()),
        }
    }
}
