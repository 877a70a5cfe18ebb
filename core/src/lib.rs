//! Core components for signing S3 requests.
//!
//! This crate provides the service-agnostic building blocks shared by the
//! signers in this workspace:
//!
//! - [`Error`] and [`ErrorKind`]: the error type every signing operation returns
//! - [`hash`]: SHA-256 and HMAC-SHA256 primitives
//! - [`time`]: UTC timestamp helpers and the SigV4 time formats
//! - [`utils`]: general utilities including data redaction
//!
//! ## Example
//!
//! ```
//! use s3sign_core::hash::{hex_hmac_sha256, hex_sha256};
//!
//! # fn main() -> s3sign_core::Result<()> {
//! let digest = hex_sha256(b"");
//! assert_eq!(
//!     digest,
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//! );
//!
//! let mac = hex_hmac_sha256(b"key", b"content")?;
//! assert_eq!(mac.len(), 64);
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
