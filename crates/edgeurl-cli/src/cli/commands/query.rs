//! `edgeurl query <url> <key>` – print query parameter values.

use anyhow::{bail, Result};
use edgeurl_core::config::{EdgeUrlConfig, OutputFormat};
use edgeurl_core::QueryParams;

use super::parse_arg;

pub fn run_query(cfg: &EdgeUrlConfig, url: &str, key: &str, all: bool) -> Result<()> {
    let url = parse_arg(url)?;
    println!("{}", render(cfg.output, url.search_params(), key, all)?);
    Ok(())
}

fn render(output: OutputFormat, query: &QueryParams, key: &str, all: bool) -> Result<String> {
    if !query.has(key) {
        bail!("no query parameter named {key:?}");
    }
    Ok(match (output, all) {
        (OutputFormat::Plain, true) => query.get_all(key).join("\n"),
        (OutputFormat::Plain, false) => query.get(key).unwrap_or_default().to_string(),
        (OutputFormat::Json, true) => serde_json::to_string(&query.get_all(key))?,
        (OutputFormat::Json, false) => serde_json::to_string(&query.get(key))?,
    })
}
