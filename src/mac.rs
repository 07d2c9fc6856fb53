use crate::artifacts::Artifacts;
use crate::credentials::{Credentials, Key};
use crate::error::Result;
use std::fmt;
use std::ops::Deref;

/// The kind of MAC being calculated; it becomes part of the first line of the canonical string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacType {
    Header,
    Response,
    Bewit,
}

impl MacType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MacType::Header => "header",
            MacType::Response => "response",
            MacType::Bewit => "bewit",
        }
    }
}

impl fmt::Display for MacType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the canonical string that a Hawk MAC covers.
///
/// Each field sits on its own line in a fixed order. `hash` and `ext` are empty lines when
/// absent, and `ext` is escaped so that its content cannot add lines of its own.
pub fn normalize(mac_type: MacType, artifacts: &Artifacts) -> String {
    let mut normalized = String::new();
    normalized.push_str("hawk.1.");
    normalized.push_str(mac_type.as_str());
    normalized.push('\n');
    normalized.push_str(&artifacts.ts.to_string());
    normalized.push('\n');
    normalized.push_str(&artifacts.nonce);
    normalized.push('\n');
    normalized.push_str(&artifacts.method.to_uppercase());
    normalized.push('\n');
    normalized.push_str(&artifacts.resource);
    normalized.push('\n');
    normalized.push_str(&artifacts.host.to_lowercase());
    normalized.push('\n');
    normalized.push_str(&artifacts.port.to_string());
    normalized.push('\n');
    if let Some(ref hash) = artifacts.hash {
        normalized.push_str(hash);
    }
    normalized.push('\n');
    if let Some(ref ext) = artifacts.ext {
        normalized.push_str(&escape_ext(ext));
    }
    normalized.push('\n');
    normalized
}

// backslashes first, or the escapes for newlines would be escaped again
fn escape_ext(ext: &str) -> String {
    ext.replace('\\', "\\\\").replace('\n', "\\n")
}

/// The raw bytes of a calculated MAC. Displays as standard padded base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mac(Vec<u8>);

impl Mac {
    /// Calculate the MAC of `artifacts` under the given key.
    pub fn new(mac_type: MacType, key: &Key, artifacts: &Artifacts) -> Result<Mac> {
        let normalized = normalize(mac_type, artifacts);
        Ok(Mac(key.sign(normalized.as_bytes())?))
    }

    pub fn to_base64(&self) -> String {
        base64::encode(&self.0)
    }
}

impl Deref for Mac {
    type Target = Vec<u8>;
    fn deref(&self) -> &Vec<u8> {
        &self.0
    }
}

impl AsRef<[u8]> for Mac {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl From<Vec<u8>> for Mac {
    fn from(original: Vec<u8>) -> Self {
        Mac(original)
    }
}

impl fmt::Display for Mac {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

/// Calculate the base64-encoded MAC of `artifacts` with the credentials' key and algorithm.
///
/// Fails with a configuration error when the credentials have no key.
pub fn mac(mac_type: MacType, credentials: &Credentials, artifacts: &Artifacts) -> Result<String> {
    let key = credentials.signing_key()?;
    Ok(Mac::new(mac_type, &key, artifacts)?.to_base64())
}
