//! The `forthecity-hawk` crate signs requests to the ForTheCity API with
//! [Hawk](https://github.com/hueniverse/hawk) authentication. It produces the `Authorization`
//! header value; issuing the request and decoding the response are left to the HTTP client of
//! your choice.
//!
//! # Examples
//!
//! ## Signing a request
//!
//! ```
//! use forthecity_hawk::{generate, Credentials, Options, SHA256};
//!
//! // provide the Hawk id and key
//! let credentials = Credentials::new("test-client", "no-secret", SHA256);
//!
//! // sign the request; this draws a random nonce, so the MAC differs on every call
//! let signed = generate(
//!     "https://api.forthecity.org/api/opportunities?page=2",
//!     "GET",
//!     &Options::new().credentials(&credentials).ext("some-app-ext-data"),
//! )
//! .unwrap();
//!
//! // the field is attached to the request as its `Authorization` header
//! assert!(signed.field.starts_with("Hawk id=\"test-client\""));
//! assert!(signed.field.contains("ext=\"some-app-ext-data\""));
//! assert_eq!(signed.artifacts.resource, "/api/opportunities?page=2");
//! ```
//!
//! ## Reproducing a signature
//!
//! Pinning the timestamp and nonce makes the result deterministic, which is how a server (or a
//! test) recomputes a MAC:
//!
//! ```
//! use forthecity_hawk::{compute_artifacts, mac, Credentials, MacType, Options, SHA256};
//!
//! let credentials = Credentials::new(
//!     "dh37fgj492je",
//!     "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn",
//!     SHA256,
//! );
//! let artifacts = compute_artifacts(
//!     "http://example.com:8000/resource/1?b=1&a=2",
//!     "GET",
//!     &Options::new().ts(1353832234).nonce("j4h3g2").ext("some-app-ext-data"),
//! )
//! .unwrap();
//! assert_eq!(
//!     mac(MacType::Header, &credentials, &artifacts).unwrap(),
//!     "6R4rV5iE+NPoym+WwjeHzjAGXUtLNIxmo1vpMofpLAE="
//! );
//! ```
//!
//! ## Features
//!
//! By default, the `use_ring` feature is enabled, which means that this crate will
//! use `ring` for all cryptographic operations.
//!
//! Alternatively, one can configure the crate with the `use_openssl`
//! feature to use the `openssl` crate.
//!
//! If no features are enabled, you must provide a custom implementation of the
//! [`crypto::Cryptographer`] trait to the `set_cryptographer` function, or
//! the cryptographic operations will panic.
//!
//! Attempting to configure both the `use_ring` and `use_openssl` features will
//! result in a build error.

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod artifacts;
pub use crate::artifacts::{compute_artifacts, Artifacts};

mod options;
pub use crate::options::Options;

mod header;
pub use crate::header::{Header, SignedHeader};

mod credentials;
pub use crate::credentials::{Credentials, DigestAlgorithm, Key};

mod signer;
pub use crate::signer::generate;

mod client;
pub use crate::client::ClientConfig;

mod error;
pub use crate::error::*;

mod payload;
pub use crate::payload::PayloadHasher;

pub mod mac;
pub use crate::mac::{mac, normalize, MacType};

pub mod crypto;

pub const SHA256: DigestAlgorithm = DigestAlgorithm::Sha256;
pub const SHA384: DigestAlgorithm = DigestAlgorithm::Sha384;
pub const SHA512: DigestAlgorithm = DigestAlgorithm::Sha512;
