//! Ordered, duplicate-permitting query-parameter store.

use serde_json::Value;
use std::fmt;

use super::collate;
use super::encode::encode_component;
use crate::error::UrlError;

/// Query parameters in insertion order. Keys may repeat.
///
/// Parsing keeps the raw substrings (no percent-decoding); serialization
/// percent-encodes every key and value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string, with or without its leading `?`.
    ///
    /// Segments are split on `&`, then on the first `=`. Segments with an
    /// empty key are dropped; a missing value becomes the empty string.
    pub fn parse(raw: &str) -> Self {
        let search = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = search
            .split('&')
            .filter_map(|segment| {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                if key.is_empty() {
                    None
                } else {
                    Some((key.to_string(), value.to_string()))
                }
            })
            .collect();
        Self { pairs }
    }

    /// Appends a pair at the end. Empty keys and duplicates are accepted.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        tracing::trace!(%key, %value, "query append");
        self.pairs.push((key, value));
    }

    /// [`append`](Self::append) for dynamically typed arguments.
    ///
    /// The key must be a JSON string. A falsy value (`null`, `false`, `0`, `""`)
    /// becomes the empty string; other scalars use their JSON text; arrays and
    /// objects are rejected.
    pub fn append_value(&mut self, key: &Value, value: &Value) -> Result<(), UrlError> {
        let key = key
            .as_str()
            .ok_or_else(|| UrlError::type_argument("key", key))?;
        let value = scalar_text(value)?;
        self.append(key, value);
        Ok(())
    }

    /// Removes the first pair whose key matches. Later duplicates stay.
    pub fn delete(&mut self, key: &str) {
        self.remove_first(|k, _| k == key);
    }

    /// Removes the first pair matching both key and value.
    pub fn delete_pair(&mut self, key: &str, value: &str) {
        self.remove_first(|k, v| k == key && v == value);
    }

    /// [`delete`](Self::delete) / [`delete_pair`](Self::delete_pair) for dynamically
    /// typed arguments. Both the key and a supplied value must be JSON strings.
    pub fn delete_value(&mut self, key: &Value, value: Option<&Value>) -> Result<(), UrlError> {
        let key = key
            .as_str()
            .ok_or_else(|| UrlError::type_argument("key", key))?;
        match value {
            None => self.delete(key),
            Some(v) => {
                let v = v
                    .as_str()
                    .ok_or_else(|| UrlError::type_argument("value", v))?;
                self.delete_pair(key, v);
            }
        }
        Ok(())
    }

    fn remove_first(&mut self, matches: impl Fn(&str, &str) -> bool) {
        if let Some(index) = self.pairs.iter().position(|(k, v)| matches(k, v)) {
            let (key, _) = self.pairs.remove(index);
            tracing::trace!(%key, index, "query delete");
        }
    }

    /// Value of the first pair with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.pairs.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn values(&self) -> Vec<String> {
        self.pairs.iter().map(|(_, v)| v.clone()).collect()
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.pairs.clone()
    }

    /// Deletes the first pair with `key`, then appends `(key, value)`.
    ///
    /// Only one earlier pair is removed: if `key` occurred several times, the
    /// remaining occurrences are kept ahead of the new pair.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.delete(key);
        self.append(key, value);
    }

    /// Stable sort by key using [`collate::compare`].
    pub fn sort(&mut self) {
        self.pairs.sort_by(|(a, _), (b, _)| collate::compare(a, b));
    }

    /// Number of pairs.
    pub fn size(&self) -> usize {
        self.pairs.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates `(key, value)` pairs in current order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.pairs.iter(),
        }
    }

    /// Calls `callback(value, key, self)` for each pair in order.
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&str, &str, &QueryParams),
    {
        for (key, value) in &self.pairs {
            callback(value, key, self);
        }
    }
}

/// Text a dynamically typed value contributes to a pair.
fn scalar_text(value: &Value) -> Result<String, UrlError> {
    match value {
        Value::Null | Value::Bool(false) => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(String::new()),
        Value::Bool(true) | Value::Number(_) => Ok(value.to_string()),
        Value::Array(_) | Value::Object(_) => Err(UrlError::type_argument("value", value)),
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", encode_component(key), encode_component(value))?;
        }
        Ok(())
    }
}

impl From<&str> for QueryParams {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Borrowing iterator over `(key, value)` pairs.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
