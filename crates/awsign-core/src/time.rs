//! Timestamp formatting for signed requests.
//!
//! Signers treat dates as opaque strings; these helpers only produce the
//! formats callers are expected to hand them.

use chrono::{DateTime, Utc};

/// Render an RFC 1123 date as used in the HTTP `Date` header.
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2012, 2, 16, 20, 30, 47).unwrap();
/// assert_eq!(awsign_core::http_date(t), "Thu, 16 Feb 2012 20:30:47 GMT");
/// ```
#[must_use]
pub fn http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Render an ISO 8601 UTC timestamp with a literal `Z` suffix.
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2012, 2, 16, 20, 30, 47).unwrap();
/// assert_eq!(awsign_core::iso8601_timestamp(t), "2012-02-16T20:30:47Z");
/// ```
#[must_use]
pub fn iso8601_timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
