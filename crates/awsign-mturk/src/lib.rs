//! Request signing for the Mechanical Turk requester API.
//!
//! Mechanical Turk REST requests carry a signature computed over the plain
//! concatenation of service name, operation and timestamp:
//!
//! ```text
//! Signature = Base64(HMAC-SHA1(SecretKey, Service + Operation + Timestamp))
//! ```
//!
//! No headers or query parameters take part in the signature.

use std::collections::HashMap;

use awsign_core::{Credential, hmac_sha1_base64, iso8601_timestamp};
use chrono::{DateTime, Utc};
use tracing::debug;

/// The request field the signature is written to.
pub const SIGNATURE_FIELD: &str = "Signature";

/// The service name used by requester operations.
pub const REQUESTER_SERVICE: &str = "AWSMechanicalTurkRequester";

/// Sign a request, writing `params["Signature"]`.
///
/// `timestamp` is used as given; callers normally produce it with
/// [`timestamp`]. No other field of `params` is read or written.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use awsign_core::Credential;
///
/// let mut params = HashMap::new();
/// awsign_mturk::sign(
///     &Credential::new("user", "secret"),
///     "AWSMechanicalTurkRequester",
///     "CreateHIT",
///     "2012-02-16T20:30:47Z",
///     &mut params,
/// );
/// assert_eq!(params["Signature"], "b/TnvzrdeD/L/EyzdFrznPXhido=");
/// ```
pub fn sign(
    credential: &Credential,
    service: &str,
    operation: &str,
    timestamp: &str,
    params: &mut HashMap<String, String>,
) {
    let payload = format!("{service}{operation}{timestamp}");
    let signature = hmac_sha1_base64(&credential.secret_key, &payload);

    debug!(service, operation, timestamp, signature = %signature, "Signed MTurk request");

    params.insert(SIGNATURE_FIELD.to_owned(), signature);
}

/// Format `time` the way the `Timestamp` request field expects.
#[must_use]
pub fn timestamp(time: DateTime<Utc>) -> String {
    iso8601_timestamp(time)
}
