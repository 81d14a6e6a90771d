//! CLI command handlers. Each command is in its own file.

mod edit;
mod href;
mod parse;
mod query;

pub use edit::run_edit;
pub use href::run_href;
pub use parse::run_parse;
pub use query::run_query;

use anyhow::{Context, Result};
use edgeurl_core::Url;

/// Parses the URL argument, naming it in the error.
fn parse_arg(url: &str) -> Result<Url> {
    Url::parse(url).with_context(|| format!("parse URL argument {url:?}"))
}
