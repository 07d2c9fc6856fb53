use crate::artifacts::Artifacts;
use crate::error::{Error, Result};
use crate::mac::Mac;
use std::fmt;

/// Representation of a Hawk `Authorization` header value.
///
/// Note that this does not include the `"Hawk "` prefix; see `SignedHeader::field` for the
/// complete value.
#[derive(Clone, PartialEq, Debug)]
pub struct Header {
    pub id: String,
    pub ts: u64,
    pub nonce: String,
    pub ext: Option<String>,
    pub mac: Mac,
}

impl Header {
    /// Create a new Header. None of the string components may contain `"`, CR or LF, since the
    /// header format has no way to escape them.
    pub fn new<S>(id: S, ts: u64, nonce: S, ext: Option<S>, mac: Mac) -> Result<Header>
    where
        S: Into<String>,
    {
        Ok(Header {
            id: Header::check_component(id)?,
            ts,
            nonce: Header::check_component(nonce)?,
            ext: match ext {
                Some(ext) => Some(Header::check_component(ext)?),
                None => None,
            },
            mac,
        })
    }

    fn check_component<S>(value: S) -> Result<String>
    where
        S: Into<String>,
    {
        let value = value.into();
        if value.contains('\"') {
            return Err(Error::InvalidHeader(format!(
                "Hawk header components cannot contain `\"`: {}",
                value
            )));
        }
        if value.contains(|c: char| c == '\r' || c == '\n') {
            return Err(Error::InvalidHeader(format!(
                "Hawk header components cannot contain line breaks: {:?}",
                value
            )));
        }
        Ok(value)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id=\"{}\", ts=\"{}\", nonce=\"{}\"",
            self.id, self.ts, self.nonce
        )?;
        if let Some(ref ext) = self.ext {
            if !ext.is_empty() {
                write!(f, ", ext=\"{}\"", ext)?;
            }
        }
        write!(f, ", mac=\"{}\"", self.mac)
    }
}

/// The result of signing a request: the complete `Authorization` header value and the
/// artifacts it was calculated from.
#[derive(Clone, PartialEq, Debug)]
pub struct SignedHeader {
    pub field: String,
    pub artifacts: Artifacts,
}

#[cfg(test)]
mod test {
    use super::*;

    fn mac() -> Mac {
        Mac::from(vec![
            8, 35, 182, 149, 42, 111, 33, 192, 19, 22, 94, 43, 118, 176, 65, 69, 86, 4, 156, 184,
            85, 107, 249, 242, 172, 200, 66, 209, 57, 63, 38, 83,
        ])
    }

    #[test]
    fn illegal_id() {
        assert!(Header::new("abc\"def", 1234, "nonce", None, mac()).is_err());
    }

    #[test]
    fn illegal_nonce() {
        assert!(Header::new("abcdef", 1234, "non\"ce", None, mac()).is_err());
    }

    #[test]
    fn illegal_ext() {
        assert!(Header::new("abcdef", 1234, "nonce", Some("ex\"t"), mac()).is_err());
    }

    #[test]
    fn illegal_line_breaks() {
        assert!(Header::new("abcdef", 1234, "nonce", Some("a\nb"), mac()).is_err());
        assert!(Header::new("abcdef", 1234, "nonce", Some("a\r\nb"), mac()).is_err());
        assert!(Header::new("abc\ndef", 1234, "nonce", None, mac()).is_err());
    }

    #[test]
    fn to_str_minimal() {
        let s = Header::new("dh37fgj492je", 1353832234, "j4h3g2", None, mac()).unwrap();
        assert_eq!(
            format!("{}", s),
            "id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"j4h3g2\", \
             mac=\"CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=\""
        );
    }

    #[test]
    fn to_str_with_ext() {
        let s = Header::new(
            "dh37fgj492je",
            1353832234,
            "j4h3g2",
            Some("my-ext-value"),
            mac(),
        )
        .unwrap();
        assert_eq!(
            format!("{}", s),
            "id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"j4h3g2\", \
             ext=\"my-ext-value\", mac=\"CCO2lSpvIcATFl4rdrBBRVYEnLhVa/nyrMhC0Tk/JlM=\""
        );
    }

    #[test]
    fn to_str_empty_ext_omitted() {
        let s = Header::new("dh37fgj492je", 1353832234, "j4h3g2", Some(""), mac()).unwrap();
        assert!(!format!("{}", s).contains("ext="));
    }
}
