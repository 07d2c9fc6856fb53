use crate::crypto::{self, HmacKey};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The hash function underlying the HMAC. Client and server must agree on it.
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Debug)]
#[non_exhaustive]
pub enum DigestAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl FromStr for DigestAlgorithm {
    type Err = Error;
    fn from_str(s: &str) -> Result<DigestAlgorithm> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "sha384" => Ok(DigestAlgorithm::Sha384),
            "sha512" => Ok(DigestAlgorithm::Sha512),
            _ => Err(Error::Configuration(format!(
                "unsupported digest algorithm `{}`",
                s
            ))),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        })
    }
}

/// Hawk key, bound to a digest algorithm and ready to sign.
///
/// While any non-empty sequence of bytes can be specified as a key, note that each digest
/// algorithm has a suggested key length, and that passwords should *not* be used as keys.
pub struct Key(Box<dyn HmacKey>);

impl Key {
    /// Build a key. An empty key is a configuration error: signing with it would produce a
    /// valid-looking but meaningless MAC.
    pub fn new<B>(key: B, algorithm: DigestAlgorithm) -> Result<Key>
    where
        B: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(Error::Configuration("credentials have an empty key".to_string()));
        }
        Ok(Key(crypto::new_key(algorithm, key)?))
    }

    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(self.0.sign(data)?)
    }
}

/// Hawk credentials: an id identifying the caller, the shared secret key, and the digest
/// algorithm. The key is never transmitted.
///
/// Credentials are immutable once built and can be shared freely between threads.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    id: String,
    key: Vec<u8>,
    algorithm: DigestAlgorithm,
}

impl Credentials {
    pub fn new<S, B>(id: S, key: B, algorithm: DigestAlgorithm) -> Credentials
    where
        S: Into<String>,
        B: Into<Vec<u8>>,
    {
        Credentials {
            id: id.into(),
            key: key.into(),
            algorithm,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Check that both the id and the key are present.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::Configuration("credentials have an empty id".to_string()));
        }
        if self.key.is_empty() {
            return Err(Error::Configuration("credentials have an empty key".to_string()));
        }
        Ok(())
    }

    /// Build the signing key for these credentials.
    pub fn signing_key(&self) -> Result<Key> {
        Key::new(&self.key, self.algorithm)
    }
}

// The key stays out of debug output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("key", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
