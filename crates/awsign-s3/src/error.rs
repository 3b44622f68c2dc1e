//! Error types for SigV2 verification.
//!
//! Signing itself cannot fail; only checking an already-signed request does.

/// Errors that can occur while verifying a SigV2-signed request.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The request carries neither an `Authorization` header nor a `Signature` parameter.
    #[error("request is not signed")]
    MissingSignature,

    /// The `Authorization` header is not of the form `AWS <key>:<signature>`.
    #[error("invalid Authorization header format")]
    InvalidAuthHeader,

    /// A query parameter required for query-string authentication is missing.
    #[error("missing required query parameter: {0}")]
    MissingParam(&'static str),

    /// The `Expires` parameter is not a Unix timestamp.
    #[error("invalid Expires value: {0}")]
    InvalidExpires(String),

    /// The request's `Expires` time has passed.
    #[error("request has expired")]
    RequestExpired,

    /// The access key could not be resolved.
    #[error(transparent)]
    Credential(#[from] awsign_core::Error),

    /// The computed signature does not match the provided signature.
    #[error("signature does not match")]
    SignatureDoesNotMatch,
}
