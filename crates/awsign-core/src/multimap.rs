//! Multi-valued maps for headers and query parameters.
//!
//! Both HTTP headers and query parameters may legitimately repeat, so each
//! key maps to an ordered list of values. Iteration order of the map itself
//! carries no meaning; anything order-sensitive sorts explicitly.

use std::collections::HashMap;

/// A mapping from a name to an ordered list of values.
pub type Multimap = HashMap<String, Vec<String>>;

/// Convenience operations on [`Multimap`].
pub trait MultimapExt {
    /// Append a value under `key`, keeping any existing values.
    fn add(&mut self, key: impl Into<String>, value: impl Into<String>);

    /// Replace all values under `key` with a single value.
    fn insert_single(&mut self, key: impl Into<String>, value: impl Into<String>);

    /// The first value stored under exactly `key`.
    fn first(&self, key: &str) -> Option<&str>;

    /// The values of the first key that matches `key` ignoring ASCII case.
    ///
    /// When several keys differ only in case, the lexicographically smallest
    /// one wins so the result does not depend on hash order.
    fn get_ignore_case(&self, key: &str) -> Option<&[String]>;
}

impl MultimapExt for Multimap {
    fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entry(key.into()).or_default().push(value.into());
    }

    fn insert_single(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key.into(), vec![value.into()]);
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    fn get_ignore_case(&self, key: &str) -> Option<&[String]> {
        self.iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .min_by(|a, b| a.0.cmp(b.0))
            .map(|(_, v)| v.as_slice())
    }
}
