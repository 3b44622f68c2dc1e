//! Core types, credentials, and configuration shared by the awsign signers.
//!
//! This crate provides the building blocks used by both the S3 (`awsign-s3`)
//! and Mechanical Turk (`awsign-mturk`) signers: the [`Credential`] triple,
//! the multi-valued [`Multimap`] used for headers and query parameters, the
//! HMAC-SHA1 primitive both schemes sign with, and environment-driven
//! configuration.

mod config;
mod credentials;
mod digest;
mod error;
mod multimap;
mod time;

pub use config::SignerConfig;
pub use credentials::{Credential, CredentialProvider, StaticCredentialProvider};
pub use digest::hmac_sha1_base64;
pub use error::{Error, Result};
pub use multimap::{Multimap, MultimapExt};
pub use time::{http_date, iso8601_timestamp};
