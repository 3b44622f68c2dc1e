//! SigV2 signature verification.
//!
//! The inverse of [`sign`](crate::sign): given a request that claims to be
//! signed, resolve the secret key for the claimed access key, recompute the
//! signature and compare the two in constant time. Neither the
//! `Authorization` header nor the `Signature` parameter participates in the
//! string to sign, so the signature is recomputed over the request as is.
//!
//! A presigned URL cannot carry headers, so `x-amz-*` values such as the
//! session token travel as query parameters. In query-string mode they are
//! folded back into the signed headers before recomputing.

use awsign_core::{CredentialProvider, Multimap, MultimapExt};
use chrono::{DateTime, Utc};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::error::VerifyError;
use crate::amz_headers::AMZ_HEADER_PREFIX;
use crate::mode::{
    ACCESS_KEY_PARAM, AUTHORIZATION_HEADER, EXPIRES_PARAM, SIGNATURE_PARAM, SignatureMode,
};
use crate::signer::compute_signature;

/// Check whether an `Authorization` value uses SigV2 format (`AWS AKID:sig`).
#[must_use]
pub fn is_sigv2(auth_header: &str) -> bool {
    auth_header.starts_with("AWS ") && !auth_header.starts_with("AWS4-")
}

/// Verify a SigV2-signed request and return the access key that signed it.
///
/// `now` is compared against `Expires` for query-string authenticated
/// requests.
///
/// # Errors
///
/// Returns a [`VerifyError`] if the request is unsigned or malformed, has
/// expired, names an unknown access key, or carries the wrong signature.
pub fn verify(
    method: &str,
    canonical_path: &str,
    params: &Multimap,
    headers: &Multimap,
    credential_provider: &dyn CredentialProvider,
    now: DateTime<Utc>,
) -> Result<String, VerifyError> {
    if params.get(EXPIRES_PARAM).is_some_and(Vec::is_empty) {
        return Err(VerifyError::MissingParam(EXPIRES_PARAM));
    }
    let mode = SignatureMode::detect(params);

    let (access_key, provided_signature) = match &mode {
        SignatureMode::Header => {
            let value = headers
                .get_ignore_case(AUTHORIZATION_HEADER)
                .and_then(<[String]>::first)
                .ok_or(VerifyError::MissingSignature)?;
            parse_sigv2_header(value)?
        }
        SignatureMode::QueryString { expires } => {
            let signature = params
                .first(SIGNATURE_PARAM)
                .ok_or(VerifyError::MissingParam(SIGNATURE_PARAM))?;
            let access_key = params
                .first(ACCESS_KEY_PARAM)
                .ok_or(VerifyError::MissingParam(ACCESS_KEY_PARAM))?;
            check_expiration(expires, now)?;
            (access_key.to_owned(), signature.to_owned())
        }
    };

    debug!(access_key = %access_key, mode = ?mode, "Verifying SigV2 signature");

    let secret_key = credential_provider.secret_for(&access_key)?;
    let expected_signature = match &mode {
        SignatureMode::Header => {
            compute_signature(&secret_key, method, canonical_path, params, headers, &mode)
        }
        SignatureMode::QueryString { .. } => {
            let headers = with_query_amz_headers(params, headers);
            compute_signature(&secret_key, method, canonical_path, params, &headers, &mode)
        }
    };

    if provided_signature
        .as_bytes()
        .ct_eq(expected_signature.as_bytes())
        .into()
    {
        debug!(access_key = %access_key, "SigV2 verification succeeded");
        Ok(access_key)
    } else {
        debug!(
            expected = %expected_signature,
            provided = %provided_signature,
            "SigV2 signature mismatch"
        );
        Err(VerifyError::SignatureDoesNotMatch)
    }
}

/// Copy `headers`, adding `x-amz-*` query parameters that no header of the
/// same name (in any case) already carries.
fn with_query_amz_headers(params: &Multimap, headers: &Multimap) -> Multimap {
    let mut merged = headers.clone();
    for (name, values) in params {
        if name.to_ascii_lowercase().starts_with(AMZ_HEADER_PREFIX)
            && headers.get_ignore_case(name).is_none()
        {
            merged.insert(name.clone(), values.clone());
        }
    }
    merged
}

/// Parse a SigV2 `Authorization` header: `AWS AKID:Signature`.
fn parse_sigv2_header(header: &str) -> Result<(String, String), VerifyError> {
    let rest = header
        .strip_prefix("AWS ")
        .ok_or(VerifyError::InvalidAuthHeader)?;

    let (access_key, signature) = rest.split_once(':').ok_or(VerifyError::InvalidAuthHeader)?;

    if access_key.is_empty() || signature.is_empty() {
        return Err(VerifyError::InvalidAuthHeader);
    }

    Ok((access_key.to_owned(), signature.to_owned()))
}

/// Reject requests whose `Expires` (Unix seconds) lies before `now`.
fn check_expiration(expires: &str, now: DateTime<Utc>) -> Result<(), VerifyError> {
    let expires_at: i64 = expires
        .parse()
        .map_err(|_| VerifyError::InvalidExpires(expires.to_owned()))?;

    if now.timestamp() > expires_at {
        debug!(expires_at, now = now.timestamp(), "Request has expired");
        return Err(VerifyError::RequestExpired);
    }
    Ok(())
}
