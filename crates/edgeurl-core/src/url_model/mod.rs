//! Absolute URL model with mutable components and an ordered query store.
//!
//! A [`Url`] is parsed once from an absolute URL string. Its component fields
//! can then be edited freely; [`Url::host`], [`Url::origin`] and [`Url::href`]
//! are rebuilt from the current fields on every call.

mod collate;
mod encode;
mod grammar;
mod query;

pub use encode::encode_component;
pub use query::{Iter, QueryParams};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::UrlError;

/// A parsed absolute URL: `protocol://hostname[:port][pathname][?search][#hash]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    /// Scheme including the trailing `:` (e.g. `https:`).
    pub protocol: String,
    pub hostname: String,
    /// Empty when not specified. Not validated on assignment.
    pub port: String,
    /// Starts with `/` unless empty.
    pub pathname: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
    search_params: QueryParams,
}

impl Url {
    /// Parses an absolute URL.
    ///
    /// # Examples
    ///
    /// - `Url::parse("https://a.com/p?x=1")?.href()` → `"https://a.com/p?x=1"`
    /// - `Url::parse("/relative")` → `Err(UrlError::InvalidUrl { .. })`
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        if input.is_empty() {
            tracing::debug!("rejected empty URL");
            return Err(UrlError::invalid(input));
        }
        let Some(parts) = grammar::split(input) else {
            tracing::debug!(input, "rejected URL outside absolute-URL grammar");
            return Err(UrlError::invalid(input));
        };

        Ok(Self {
            protocol: parts.protocol.to_string(),
            hostname: parts.hostname.to_string(),
            port: parts.port.to_string(),
            pathname: parts.pathname.to_string(),
            hash: parts.hash.to_string(),
            search_params: QueryParams::parse(parts.search),
        })
    }

    /// Like [`Url::parse`], but with an optional base URL.
    ///
    /// Relative resolution is not implemented: any non-empty `base` fails with
    /// [`UrlError::UnsupportedOperation`] before `input` is looked at.
    pub fn parse_with_base(input: &str, base: Option<&str>) -> Result<Self, UrlError> {
        if base.is_some_and(|b| !b.is_empty()) {
            tracing::debug!(input, ?base, "base URL supplied");
            return Err(UrlError::UnsupportedOperation(
                "base URLs are not supported; pass an absolute URL instead",
            ));
        }
        Self::parse(input)
    }

    /// Parses a dynamically typed value. Anything but a JSON string is invalid.
    pub fn from_value(value: &Value) -> Result<Self, UrlError> {
        match value {
            Value::String(s) => Self::parse(s),
            other => {
                tracing::debug!(%other, "rejected non-string URL");
                Err(UrlError::invalid(other.to_string()))
            }
        }
    }

    /// `hostname`, plus `:port` when a port is set.
    pub fn host(&self) -> String {
        if self.port.is_empty() {
            self.hostname.clone()
        } else {
            format!("{}:{}", self.hostname, self.port)
        }
    }

    /// `protocol//host`.
    pub fn origin(&self) -> String {
        format!("{}//{}", self.protocol, self.host())
    }

    /// `?` followed by the serialized query, or empty when there are no pairs.
    pub fn search(&self) -> String {
        if self.search_params.is_empty() {
            String::new()
        } else {
            format!("?{}", self.search_params)
        }
    }

    /// Full serialized URL, rebuilt from the current fields.
    pub fn href(&self) -> String {
        format!(
            "{}{}{}{}",
            self.origin(),
            self.pathname,
            self.search(),
            self.hash
        )
    }

    pub fn search_params(&self) -> &QueryParams {
        &self.search_params
    }

    pub fn search_params_mut(&mut self) -> &mut QueryParams {
        &mut self.search_params
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = UrlError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for Url {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.href())
    }
}

impl<'de> Deserialize<'de> for Url {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Url::from_value(&value).map_err(D::Error::custom)
    }
}
