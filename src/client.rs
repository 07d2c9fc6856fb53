use crate::credentials::{Credentials, DigestAlgorithm};
use crate::error::{Error, Result};
use crate::header::SignedHeader;
use crate::options::Options;
use crate::signer::generate;
use std::env;
use url::Url;

pub const DEFAULT_HOST: &str = "https://api.forthecity.org";
pub const DEFAULT_PORT: u16 = 443;
/// The ForTheCity API only accepts SHA-256 MACs.
pub const ALGORITHM: DigestAlgorithm = DigestAlgorithm::Sha256;

/// Connection settings for the ForTheCity API: where it lives and the token/secret pair used
/// to sign requests to it.
///
/// # Examples
///
/// ```
/// use forthecity_hawk::{ClientConfig, Options};
///
/// let config = ClientConfig::new("my-token", "my-secret").port(8443);
/// let signed = config
///     .sign("GET", "/api/opportunities/42", Options::new())
///     .unwrap();
/// assert_eq!(signed.artifacts.port, 8443);
/// assert!(signed.field.starts_with("Hawk id=\"my-token\""));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    credentials: Credentials,
    host: String,
    port: u16,
}

impl ClientConfig {
    pub fn new<S, B>(token: S, secret: B) -> ClientConfig
    where
        S: Into<String>,
        B: Into<Vec<u8>>,
    {
        ClientConfig {
            credentials: Credentials::new(token, secret, ALGORITHM),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Read the configuration from the `TOKEN`, `SECRET`, `HOST` and `PORT` environment
    /// variables. `HOST` and `PORT` are optional.
    pub fn from_env() -> Result<ClientConfig> {
        ClientConfig::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Configuration(format!("{} is not set", name)))
        };
        let mut config = ClientConfig::new(required("TOKEN")?, required("SECRET")?);
        if let Some(host) = lookup("HOST").filter(|v| !v.is_empty()) {
            config = config.host(host);
        }
        if let Some(port) = lookup("PORT").filter(|v| !v.is_empty()) {
            let port = port
                .parse()
                .map_err(|_| Error::Configuration(format!("PORT `{}` is not a port", port)))?;
            config = config.port(port);
        }
        Ok(config)
    }

    /// Set the base URL of the API, e.g. `https://staging.forthecity.org`.
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The absolute URI for `path_and_query` on the configured host and port.
    pub fn uri(&self, path_and_query: &str) -> Result<Url> {
        let mut base = Url::parse(&self.host)?;
        base.set_port(Some(self.port))
            .map_err(|_| Error::InvalidUrl(format!("url {} cannot have a port", self.host)))?;
        Ok(base.join(path_and_query)?)
    }

    /// Sign a request for `path_and_query` with this configuration's credentials. Other
    /// fields of `options` (ext, hash, overrides) are passed through.
    pub fn sign<'a>(
        &'a self,
        method: &str,
        path_and_query: &str,
        options: Options<'a>,
    ) -> Result<SignedHeader> {
        let uri = self.uri(path_and_query)?;
        generate(
            uri.as_str(),
            method,
            &options.credentials(&self.credentials),
        )
    }
}
