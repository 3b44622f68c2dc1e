//! Configuration for awsign front ends.
//!
//! All configuration is driven by environment variables.

use crate::error::{Error, Result};

/// Default endpoint used when rendering presigned URLs.
const DEFAULT_ENDPOINT: &str = "https://s3.amazonaws.com";

/// Global configuration for awsign tools.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerConfig {
    /// Base URL that presigned URLs are rendered against.
    pub endpoint: String,
    /// Log level filter.
    pub log_level: String,
    /// Emit the string-to-sign and resulting signature as debug events.
    pub debug_signing: bool,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            log_level: "info".to_owned(),
            debug_signing: false,
        }
    }
}

impl SignerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("AWSIGN_ENDPOINT") {
            config.endpoint = v.trim_end_matches('/').to_owned();
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = lookup("AWSIGN_DEBUG_SIGNING") {
            config.debug_signing = parse_bool("AWSIGN_DEBUG_SIGNING", &v)?;
        }

        Ok(config)
    }

    /// The tracing filter directive implied by this configuration.
    #[must_use]
    pub fn log_filter(&self) -> String {
        if self.debug_signing {
            format!("{},awsign_s3=debug,awsign_mturk=debug", self.log_level)
        } else {
            self.log_level.clone()
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "1" => Ok(true),
        "0" | "" => Ok(false),
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(Error::InvalidEnv {
            name: name.to_owned(),
            value: value.to_owned(),
        }),
    }
}
