//! CanonicalizedResource construction.
//!
//! The canonical resource is the request path followed by the sub-resource
//! query parameters that S3 requires to be signed. Values are used exactly as
//! supplied; signing never percent-encodes or decodes them.

use awsign_core::Multimap;

/// Query parameters that take part in the signature.
pub const SIGNED_SUBRESOURCES: &[&str] = &[
    "acl",
    "delete",
    "location",
    "logging",
    "notification",
    "partNumber",
    "policy",
    "requestPayment",
    "response-cache-control",
    "response-content-disposition",
    "response-content-encoding",
    "response-content-language",
    "response-content-type",
    "response-expires",
    "torrent",
    "uploadId",
    "uploads",
    "versionId",
    "versioning",
    "versions",
];

/// Whether `name` is a signed sub-resource parameter. Matching is case-sensitive.
#[must_use]
pub fn is_signed_subresource(name: &str) -> bool {
    SIGNED_SUBRESOURCES.contains(&name)
}

/// Build the CanonicalizedResource string.
///
/// Every value of every signed sub-resource becomes `name=value` (or the bare
/// `name` for an empty value). The entries are sorted as whole strings and
/// appended to `canonical_path` after a `?`.
///
/// # Examples
///
/// ```
/// use awsign_core::{Multimap, MultimapExt};
/// use awsign_s3::canonical_resource;
///
/// let mut params = Multimap::new();
/// params.add("acl", "");
/// params.add("max-keys", "10");
/// assert_eq!(canonical_resource("/johnsmith/", &params), "/johnsmith/?acl");
/// ```
#[must_use]
pub fn canonical_resource(canonical_path: &str, params: &Multimap) -> String {
    let mut signed: Vec<String> = params
        .iter()
        .filter(|(name, _)| is_signed_subresource(name))
        .flat_map(|(name, values)| {
            values.iter().map(move |value| {
                if value.is_empty() {
                    name.clone()
                } else {
                    format!("{name}={value}")
                }
            })
        })
        .collect();

    if signed.is_empty() {
        return canonical_path.to_owned();
    }

    signed.sort_unstable();
    format!("{canonical_path}?{}", signed.join("&"))
}
