use crate::error::{Error, Result};
use crate::options::Options;
use log::trace;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

const NONCE_LEN: usize = 6;

/// The values covered by a Hawk MAC.
///
/// Artifacts are built fresh for every request: the timestamp and nonce together keep a
/// server from accepting a replayed signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Seconds since the unix epoch.
    pub ts: u64,
    pub nonce: String,
    pub method: String,
    /// Path, plus `?` and the query when the URI has one.
    pub resource: String,
    pub host: String,
    pub port: u16,
    /// Base64 payload hash.
    pub hash: Option<String>,
    pub ext: Option<String>,
}

/// Decompose `uri` into the artifacts for a request with the given method, then apply the
/// overrides in `options`.
///
/// The timestamp defaults to the current time and the nonce to a fresh random token.
pub fn compute_artifacts(uri: &str, method: &str, options: &Options) -> Result<Artifacts> {
    let url = Url::parse(uri)?;
    let host = url
        .host_str()
        .ok_or_else(|| Error::InvalidUrl(format!("url {} has no host", uri)))?;
    let port = match options.port.or_else(|| url.port_or_known_default()) {
        Some(port) => port,
        None => return Err(Error::InvalidUrl(format!("url {} has no port", uri))),
    };

    // an empty query (a bare trailing `?`) is still part of the signed resource
    let resource = match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    };

    let mut artifacts = Artifacts {
        ts: now_secs(),
        nonce: random_nonce(),
        method: method.to_uppercase(),
        resource,
        host: host.to_lowercase(),
        port,
        hash: None,
        ext: None,
    };
    options.apply(&mut artifacts);

    trace!(
        "artifacts for {}: ts={} nonce={} method={} resource={} host={} port={}",
        uri,
        artifacts.ts,
        artifacts.nonce,
        artifacts.method,
        artifacts.resource,
        artifacts.host,
        artifacts.port
    );
    Ok(artifacts)
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// A short alphanumeric token. It only has to be unique within the server's timestamp window,
/// not unpredictable.
fn random_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn opts() -> Options<'static> {
        Options::new()
    }

    #[test]
    fn test_url_decomposition() {
        let arts = compute_artifacts("https://example.com/foo", "GET", &opts()).unwrap();
        assert_eq!(arts.resource, "/foo");
        assert_eq!(arts.host, "example.com");
        assert_eq!(arts.port, 443); // default for https
        assert_eq!(arts.hash, None);
        assert_eq!(arts.ext, None);
    }

    #[test]
    fn test_explicit_port() {
        let arts = compute_artifacts("http://localhost:8000/resource", "GET", &opts()).unwrap();
        assert_eq!(arts.port, 8000);
        let arts = compute_artifacts("http://localhost/resource", "GET", &opts()).unwrap();
        assert_eq!(arts.port, 80);
    }

    #[test]
    fn test_query_preserved() {
        let arts = compute_artifacts("http://h/api/search?q=a", "GET", &opts()).unwrap();
        assert_eq!(arts.resource, "/api/search?q=a");
    }

    #[test]
    fn test_trailing_question_mark_preserved() {
        let arts = compute_artifacts("http://h/api/search?", "GET", &opts()).unwrap();
        assert_eq!(arts.resource, "/api/search?");
    }

    #[test]
    fn test_empty_path_with_question_mark() {
        let arts = compute_artifacts("http://h?", "GET", &opts()).unwrap();
        assert_eq!(arts.resource, "/?");
    }

    #[test]
    fn test_case_normalization() {
        let arts = compute_artifacts("http://EXAMPLE.com/x", "get", &opts()).unwrap();
        assert_eq!(arts.method, "GET");
        assert_eq!(arts.host, "example.com");
    }

    #[test]
    fn test_overrides_win() {
        let arts = compute_artifacts(
            "http://example.com/x",
            "GET",
            &Options::new().ts(12345).nonce("fixed1"),
        )
        .unwrap();
        assert_eq!(arts.ts, 12345);
        assert_eq!(arts.nonce, "fixed1");
    }

    #[test]
    fn test_defaults() {
        let before = now_secs();
        let arts = compute_artifacts("http://example.com/x", "GET", &opts()).unwrap();
        assert!(arts.ts >= before);
        assert_eq!(arts.nonce.len(), NONCE_LEN);
        assert!(arts.nonce.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_nonces_differ() {
        let a = compute_artifacts("http://example.com/x", "GET", &opts()).unwrap();
        let b = compute_artifacts("http://example.com/x", "GET", &opts()).unwrap();
        // 62^6 possibilities; a collision here is effectively impossible
        assert_ne!(a.nonce, b.nonce);
    }

    #[test]
    fn test_unparseable_url() {
        let err = compute_artifacts("not a url", "GET", &opts()).unwrap_err();
        assert!(err.is_invalid_url());
    }

    #[test]
    fn test_url_without_host() {
        let err = compute_artifacts("mailto:someone@example.com", "GET", &opts()).unwrap_err();
        assert!(err.is_invalid_url());
    }

    #[test]
    fn test_url_without_port() {
        let err = compute_artifacts("foo://example.com/x", "GET", &opts()).unwrap_err();
        assert!(err.is_invalid_url());
        let arts =
            compute_artifacts("foo://example.com/x", "GET", &Options::new().port(9000)).unwrap();
        assert_eq!(arts.port, 9000);
    }
}
