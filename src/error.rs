use crate::crypto::CryptoError;
use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Fail, Debug)]
pub enum Error {
    #[fail(display = "Configuration error: {}", _0)]
    Configuration(String),

    #[fail(display = "Invalid url: {}", _0)]
    InvalidUrl(String),

    #[fail(display = "Invalid Hawk header: {}", _0)]
    InvalidHeader(String),

    #[fail(display = "{}", _0)]
    Crypto(#[fail(cause)] CryptoError),
}

impl Error {
    /// True for missing or unusable credentials and other configuration mistakes.
    pub fn is_configuration(&self) -> bool {
        match self {
            Error::Configuration(_) => true,
            _ => false,
        }
    }

    /// True when the URI could not be decomposed into host, port and path.
    pub fn is_invalid_url(&self) -> bool {
        match self {
            Error::InvalidUrl(_) => true,
            _ => false,
        }
    }
}

impl From<CryptoError> for Error {
    fn from(e: CryptoError) -> Self {
        Error::Crypto(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidUrl(e.to_string())
    }
}
