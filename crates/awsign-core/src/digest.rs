//! The HMAC-SHA1 primitive shared by both signing schemes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Compute `Base64(HMAC-SHA1(key, data))` using the standard padded alphabet.
///
/// # Examples
///
/// ```
/// use awsign_core::hmac_sha1_base64;
///
/// let sig = hmac_sha1_base64("secret", "AWSMechanicalTurkRequesterCreateHIT2012-02-16T20:30:47Z");
/// assert_eq!(sig, "b/TnvzrdeD/L/EyzdFrznPXhido=");
/// ```
#[must_use]
pub fn hmac_sha1_base64(key: &str, data: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can accept any key length");
    mac.update(data.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}
