//! Edit scripts: JSON lists of mutations applied to a [`Url`] in order.
//!
//! ```json
//! [
//!   {"op": "set-hostname", "value": "b.com"},
//!   {"op": "append", "key": "x-id", "value": "GetObject"},
//!   {"op": "delete", "key": "token"},
//!   {"op": "sort"}
//! ]
//! ```
//!
//! Arguments stay dynamically typed until an operation consumes them, so a
//! non-string key or value surfaces as [`UrlError::TypeArgument`].

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::UrlError;
use crate::url_model::Url;

/// One step of an edit script.
#[derive(Debug, Clone, Deserialize)]
pub struct EditOp {
    pub op: String,
    /// Remaining fields (`key`, `value`). A field given as `null` is kept,
    /// which is different from leaving it out.
    #[serde(flatten)]
    pub args: Map<String, Value>,
}

impl EditOp {
    fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    fn key(&self) -> &Value {
        self.arg("key").unwrap_or(&Value::Null)
    }

    fn value_or_null(&self) -> &Value {
        self.arg("value").unwrap_or(&Value::Null)
    }

    fn string_value(&self) -> Result<String, UrlError> {
        let value = self.value_or_null();
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| UrlError::type_argument("value", value))
    }

    /// Applies this step to `url`.
    pub fn apply(&self, url: &mut Url) -> Result<()> {
        match self.op.as_str() {
            "append" => url
                .search_params_mut()
                .append_value(self.key(), self.value_or_null())?,
            "delete" => url
                .search_params_mut()
                .delete_value(self.key(), self.arg("value"))?,
            "set" => {
                let query = url.search_params_mut();
                query.delete_value(self.key(), None)?;
                query.append_value(self.key(), self.value_or_null())?;
            }
            "sort" => url.search_params_mut().sort(),
            "set-protocol" => url.protocol = self.string_value()?,
            "set-hostname" => url.hostname = self.string_value()?,
            "set-port" => url.port = self.string_value()?,
            "set-pathname" => url.pathname = self.string_value()?,
            "set-hash" => url.hash = self.string_value()?,
            other => return Err(anyhow!("unknown edit op {other:?}")),
        }
        Ok(())
    }
}

/// Parses a JSON edit script.
pub fn parse_script(json: &str) -> Result<Vec<EditOp>> {
    serde_json::from_str(json).context("parse edit script")
}

/// Applies `ops` in order, stopping at the first failure.
pub fn apply_all(url: &mut Url, ops: &[EditOp]) -> Result<()> {
    for (i, op) in ops.iter().enumerate() {
        op.apply(url)
            .with_context(|| format!("edit #{} ({})", i + 1, op.op))?;
        tracing::debug!(step = i + 1, op = %op.op, href = %url, "applied edit");
    }
    Ok(())
}
