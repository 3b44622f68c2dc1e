//! Error types for awsign core.

/// Core error type for credential and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingEnv(String),

    /// An environment variable holds a value that cannot be interpreted.
    #[error("invalid value for {name}: {value}")]
    InvalidEnv {
        /// The variable name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The access key is not known to the credential provider.
    #[error("access key not found: {0}")]
    UnknownAccessKey(String),
}

/// Convenience result type for awsign core operations.
pub type Result<T> = std::result::Result<T, Error>;
