//! Selection between header and query-string authentication.

use awsign_core::{Credential, Multimap, MultimapExt};

/// Query parameter whose presence selects query-string authentication.
pub const EXPIRES_PARAM: &str = "Expires";

/// Query parameter carrying the access key in query-string authentication.
pub const ACCESS_KEY_PARAM: &str = "AWSAccessKeyId";

/// Query parameter carrying the signature in query-string authentication.
pub const SIGNATURE_PARAM: &str = "Signature";

/// Header carrying the signature in header authentication.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Where the signature of a request goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureMode {
    /// `Authorization: AWS <access key>:<signature>`.
    Header,
    /// `AWSAccessKeyId` and `Signature` query parameters. `expires` replaces
    /// the date in the string to sign.
    QueryString {
        /// First value of the `Expires` parameter.
        expires: String,
    },
}

impl SignatureMode {
    /// Detect the mode from the request parameters.
    ///
    /// # Panics
    ///
    /// Panics if `Expires` is present with no values.
    #[must_use]
    pub fn detect(params: &Multimap) -> Self {
        match params.get(EXPIRES_PARAM) {
            Some(values) => Self::QueryString {
                expires: values[0].clone(),
            },
            None => Self::Header,
        }
    }

    /// The date slot of the string to sign, given the header-derived date.
    #[must_use]
    pub fn date<'a>(&'a self, header_date: &'a str) -> &'a str {
        match self {
            Self::Header => header_date,
            Self::QueryString { expires } => expires,
        }
    }

    /// Place `signature` into the request.
    pub fn deliver(
        &self,
        credential: &Credential,
        signature: &str,
        params: &mut Multimap,
        headers: &mut Multimap,
    ) {
        match self {
            Self::Header => replace_header(
                headers,
                AUTHORIZATION_HEADER,
                format!("AWS {}:{signature}", credential.access_key),
            ),
            Self::QueryString { .. } => {
                params.insert_single(ACCESS_KEY_PARAM, credential.access_key.as_str());
                params.insert_single(SIGNATURE_PARAM, signature);
            }
        }
    }
}

/// Set a header to a single value, dropping any spelling of it in another case.
pub(crate) fn replace_header(headers: &mut Multimap, name: &str, value: impl Into<String>) {
    headers.retain(|k, _| !k.eq_ignore_ascii_case(name));
    headers.insert_single(name, value);
}
