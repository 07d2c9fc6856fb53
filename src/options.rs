use crate::artifacts::Artifacts;
use crate::credentials::Credentials;

/// Options for a single signing call: the credentials plus optional overrides for each
/// artifact field.
///
/// The structure is created using the builder idiom. Overrides replace the computed value
/// verbatim, which lets callers pin `ts` and `nonce` for deterministic tests or reproduce an
/// earlier signature.
///
/// # Examples
///
/// ```
/// use forthecity_hawk::{Credentials, Options, SHA256};
/// let credentials = Credentials::new("me", "secret", SHA256);
/// let base = Options::new().credentials(&credentials);
/// let pinned = base.clone().ts(1353832234).nonce("j4h3g2");
/// let with_ext = base.clone().ext("some-app-ext-data");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options<'a> {
    pub(crate) credentials: Option<&'a Credentials>,
    pub(crate) ts: Option<u64>,
    pub(crate) nonce: Option<String>,
    pub(crate) method: Option<String>,
    pub(crate) resource: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<u16>,
    pub(crate) hash: Option<String>,
    pub(crate) ext: Option<String>,
}

impl<'a> Options<'a> {
    pub fn new() -> Self {
        Options::default()
    }

    /// Set the credentials used to sign. Required by `generate`.
    pub fn credentials(mut self, credentials: &'a Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Pin the timestamp, in seconds since the unix epoch.
    pub fn ts(mut self, ts: u64) -> Self {
        self.ts = Some(ts);
        self
    }

    pub fn nonce<S: Into<String>>(mut self, nonce: S) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn method<S: Into<String>>(mut self, method: S) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Override the path-and-query that is signed.
    pub fn resource<S: Into<String>>(mut self, resource: S) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the base64-encoded payload hash, as produced by `PayloadHasher`.
    pub fn hash<S: Into<String>>(mut self, hash: S) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Set the `ext` Hawk property.
    pub fn ext<S: Into<String>>(mut self, ext: S) -> Self {
        self.ext = Some(ext.into());
        self
    }

    /// Replace each computed artifact field for which an override was given.
    pub(crate) fn apply(&self, artifacts: &mut Artifacts) {
        if let Some(ts) = self.ts {
            artifacts.ts = ts;
        }
        if let Some(ref nonce) = self.nonce {
            artifacts.nonce = nonce.clone();
        }
        if let Some(ref method) = self.method {
            artifacts.method = method.clone();
        }
        if let Some(ref resource) = self.resource {
            artifacts.resource = resource.clone();
        }
        if let Some(ref host) = self.host {
            artifacts.host = host.clone();
        }
        if let Some(port) = self.port {
            artifacts.port = port;
        }
        if let Some(ref hash) = self.hash {
            artifacts.hash = Some(hash.clone());
        }
        if let Some(ref ext) = self.ext {
            artifacts.ext = Some(ext.clone());
        }
    }
}
