use crate::artifacts::compute_artifacts;
use crate::error::{Error, Result};
use crate::header::{Header, SignedHeader};
use crate::mac::{Mac, MacType};
use crate::options::Options;
use log::debug;

/// Sign a request to `uri` with `method`, producing the `Authorization` header value and the
/// artifacts behind it.
///
/// `options` must carry credentials with a non-empty id and key. The timestamp and nonce are
/// taken from the clock and a random source unless pinned in `options`.
pub fn generate(uri: &str, method: &str, options: &Options) -> Result<SignedHeader> {
    let credentials = options
        .credentials
        .ok_or_else(|| Error::Configuration("no credentials supplied".to_string()))?;
    credentials.validate()?;
    let key = credentials.signing_key()?;

    let artifacts = compute_artifacts(uri, method, options)?;
    let mac = Mac::new(MacType::Header, &key, &artifacts)?;

    let header = Header::new(
        credentials.id(),
        artifacts.ts,
        artifacts.nonce.as_str(),
        artifacts.ext.as_ref().map(String::as_str),
        mac,
    )?;
    debug!(
        "signed {} {} for id {} (ts={}, nonce={})",
        artifacts.method,
        artifacts.resource,
        credentials.id(),
        artifacts.ts,
        artifacts.nonce
    );

    Ok(SignedHeader {
        field: format!("Hawk {}", header),
        artifacts,
    })
}
