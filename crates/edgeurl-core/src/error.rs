//! Error type shared by the URL model and the query store.

use serde_json::Value;
use thiserror::Error;

/// Errors raised synchronously by [`Url`](crate::Url) construction and the dynamic
/// [`QueryParams`](crate::QueryParams) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// Input was empty, not a string, or did not match the absolute-URL grammar.
    #[error("Invalid URL: {input:?}")]
    InvalidUrl { input: String },

    /// The caller asked for something the model deliberately does not do
    /// (e.g. resolving against a base URL).
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// A dynamically typed argument was not a string.
    #[error("{argument} must be a string, got {found}")]
    TypeArgument {
        argument: &'static str,
        found: &'static str,
    },
}

impl UrlError {
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        UrlError::InvalidUrl {
            input: input.into(),
        }
    }

    /// Builds a [`UrlError::TypeArgument`] naming the JSON type that was found instead.
    pub(crate) fn type_argument(argument: &'static str, found: &Value) -> Self {
        let found = match found {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        UrlError::TypeArgument { argument, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(UrlError::invalid("x").to_string(), "Invalid URL: \"x\"");
        assert_eq!(
            UrlError::TypeArgument {
                argument: "key",
                found: "number"
            }
            .to_string(),
            "key must be a string, got number"
        );
        assert_eq!(
            UrlError::type_argument("value", &serde_json::json!([1])),
            UrlError::TypeArgument {
                argument: "value",
                found: "array"
            }
        );
        assert!(UrlError::UnsupportedOperation("base URL")
            .to_string()
            .contains("base URL"));
    }
}
