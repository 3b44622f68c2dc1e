//! Header canonicalization for the SigV2 string to sign.
//!
//! Only `Content-MD5`, `Content-Type`, `Date` and the `x-amz-*` family take
//! part in the signature. The `x-amz-*` headers are lowercased, their values
//! joined with commas, and the pairs are ordered by header name alone.
//!
//! Ordering by name alone matters: compared as whole `name:value` strings,
//! `x-amz-copy-source:/a/b` sorts after `x-amz-copy-source-range:bytes=0-1`
//! (`:` is greater than `-`), while Ceph RGW and other S3-compatible servers
//! expect `x-amz-copy-source` first and reject the request otherwise.

use awsign_core::Multimap;

/// Prefix shared by all headers folded into the canonicalized amz block.
pub const AMZ_HEADER_PREFIX: &str = "x-amz-";

/// The `x-amz-date` header, which supersedes `Date` when present.
pub const AMZ_DATE_HEADER: &str = "x-amz-date";

/// The header carrying a session token.
pub const SECURITY_TOKEN_HEADER: &str = "x-amz-security-token";

/// The header-derived inputs of the string to sign.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalHeaders {
    /// First `Content-MD5` value, or empty.
    pub content_md5: String,
    /// First `Content-Type` value, or empty.
    pub content_type: String,
    /// First `Date` value; empty when absent or when `x-amz-date` is present.
    pub date: String,
    /// Lowercased `x-amz-*` names with comma-joined values, sorted by name.
    pub amz_headers: Vec<(String, String)>,
}

impl CanonicalHeaders {
    /// Extract the signing-relevant headers.
    ///
    /// Header names are matched case-insensitively. Entries are visited in a
    /// fixed order, so the result never depends on map iteration order.
    ///
    /// # Panics
    ///
    /// Panics if `Content-MD5`, `Content-Type` or `Date` is present with no
    /// values.
    #[must_use]
    pub fn from_headers(headers: &Multimap) -> Self {
        let mut entries: Vec<(&String, &Vec<String>)> = headers.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut content_md5 = None;
        let mut content_type = None;
        let mut date = None;
        let mut has_amz_date = false;
        let mut amz_headers = Vec::new();

        for (name, values) in entries {
            let name = name.to_ascii_lowercase();
            match name.as_str() {
                "content-md5" => {
                    content_md5.get_or_insert_with(|| values[0].clone());
                }
                "content-type" => {
                    content_type.get_or_insert_with(|| values[0].clone());
                }
                "date" => {
                    date.get_or_insert_with(|| values[0].clone());
                }
                _ if name.starts_with(AMZ_HEADER_PREFIX) => {
                    has_amz_date |= name == AMZ_DATE_HEADER;
                    amz_headers.push((name.clone(), values.join(",")));
                }
                _ => {}
            }
        }

        // Decided after the full pass so header order cannot matter.
        if has_amz_date {
            date = None;
        }

        sort_by_name(&mut amz_headers);

        Self {
            content_md5: content_md5.unwrap_or_default(),
            content_type: content_type.unwrap_or_default(),
            date: date.unwrap_or_default(),
            amz_headers,
        }
    }

    /// Render the CanonicalizedAmzHeaders block.
    ///
    /// Each pair becomes `name:value\n`; the block is empty when there are no
    /// `x-amz-*` headers.
    #[must_use]
    pub fn amz_block(&self) -> String {
        let mut block = String::new();
        for (name, value) in &self.amz_headers {
            block.push_str(name);
            block.push(':');
            block.push_str(value);
            block.push('\n');
        }
        block
    }
}

/// Sort `x-amz-*` pairs by name only. The sort is stable.
fn sort_by_name(pairs: &mut [(String, String)]) {
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
}
