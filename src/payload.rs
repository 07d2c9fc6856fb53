use crate::crypto::{self, Hasher};
use crate::error::Result;
use crate::DigestAlgorithm;

/// A utility for hashing payloads. Feed your entity body to this, then pass the base64 of the
/// `finish` result to `Options::hash`.
pub struct PayloadHasher {
    hasher: Box<dyn Hasher>,
}

impl PayloadHasher {
    /// Create a new PayloadHasher. Parameters such as `; charset=utf-8` are dropped from the
    /// `content_type`, and the rest is lower-cased. The digest should be the one used by the
    /// request's credentials.
    pub fn new(content_type: &str, algorithm: DigestAlgorithm) -> Result<Self> {
        let mut hasher = PayloadHasher {
            hasher: crypto::new_hasher(algorithm)?,
        };
        let content_type = match content_type.find(';') {
            Some(i) => &content_type[..i],
            None => content_type,
        };
        hasher.update("hawk.1.payload\n")?;
        hasher.update(content_type.trim().to_ascii_lowercase())?;
        hasher.update("\n")?;
        Ok(hasher)
    }

    /// Hash a single value and return it
    pub fn hash<B>(content_type: &str, algorithm: DigestAlgorithm, payload: B) -> Result<Vec<u8>>
    where
        B: AsRef<[u8]>,
    {
        let mut hasher = PayloadHasher::new(content_type, algorithm)?;
        hasher.update(payload)?;
        hasher.finish()
    }

    /// Hash a single value and return the base64 form used in the `hash` artifact.
    pub fn hash_base64<B>(
        content_type: &str,
        algorithm: DigestAlgorithm,
        payload: B,
    ) -> Result<String>
    where
        B: AsRef<[u8]>,
    {
        Ok(base64::encode(&PayloadHasher::hash(
            content_type,
            algorithm,
            payload,
        )?))
    }

    /// Update the hash with new data.
    pub fn update<B>(&mut self, data: B) -> Result<()>
    where
        B: AsRef<[u8]>,
    {
        self.hasher.update(data.as_ref())?;
        Ok(())
    }

    /// Finish hashing and return the result
    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.hasher.update(b"\n")?;
        Ok(self.hasher.finish()?)
    }
}

#[cfg(all(test, any(feature = "use_ring", feature = "use_openssl")))]
mod tests {
    use super::PayloadHasher;
    use crate::SHA256;

    #[test]
    fn hash_consistency() {
        let mut hasher1 = PayloadHasher::new("text/plain", SHA256).unwrap();
        hasher1.update("pay").unwrap();
        hasher1.update("load").unwrap();
        let hash1 = hasher1.finish().unwrap();

        let mut hasher2 = PayloadHasher::new("text/plain", SHA256).unwrap();
        hasher2.update("payload").unwrap();
        let hash2 = hasher2.finish().unwrap();

        let hash3 = PayloadHasher::hash("text/plain", SHA256, "payload").unwrap();

        assert_eq!(
            base64::encode(&hash1),
            "XhAS2NNB0dCz3E04dKJH9NYKBwOcfcqu/18qQo5zZmU="
        );
        assert_eq!(hash2, hash1);
        assert_eq!(hash3, hash1);
    }

    #[test]
    fn content_type_normalized() {
        let plain = PayloadHasher::hash("text/plain", SHA256, "payload").unwrap();
        let messy = PayloadHasher::hash("Text/Plain; charset=utf-8", SHA256, "payload").unwrap();
        assert_eq!(messy, plain);
    }

    #[test]
    fn json_body() {
        assert_eq!(
            PayloadHasher::hash_base64("application/json", SHA256, "{\"givenName\":\"Ada\"}")
                .unwrap(),
            "T2dDZ6lBTsSWagtdaCELWKJkfA8JE2oRWBsCx9Ll9+o="
        );
    }
}
