//! `edgeurl parse <url>` – print URL components.

use anyhow::{Context, Result};
use edgeurl_core::config::{EdgeUrlConfig, OutputFormat};
use edgeurl_core::Url;
use serde_json::json;

pub fn run_parse(cfg: &EdgeUrlConfig, url: &str, base: Option<&str>) -> Result<()> {
    let url = Url::parse_with_base(url, base).with_context(|| format!("parse {url:?}"))?;
    println!("{}", render(cfg.output, &url)?);
    Ok(())
}

fn render(output: OutputFormat, url: &Url) -> Result<String> {
    match output {
        OutputFormat::Json => {
            let value = json!({
                "href": url,
                "origin": url.origin(),
                "protocol": url.protocol,
                "host": url.host(),
                "hostname": url.hostname,
                "port": url.port,
                "pathname": url.pathname,
                "search": url.search(),
                "hash": url.hash,
                "query": url.search_params().entries(),
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Plain => {
            let mut lines = vec![
                format!("href:     {}", url.href()),
                format!("protocol: {}", url.protocol),
                format!("hostname: {}", url.hostname),
                format!("port:     {}", url.port),
                format!("pathname: {}", url.pathname),
                format!("hash:     {}", url.hash),
            ];
            for (key, value) in url.search_params() {
                lines.push(format!("query:    {key} = {value}"));
            }
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lists_components_and_pairs() {
        let url = Url::parse("https://a.com:81/p?k=1&k=2#h").unwrap();
        let out = render(OutputFormat::Plain, &url).unwrap();
        assert!(out.starts_with("href:     https://a.com:81/p?k=1&k=2#h\n"));
        assert!(out.contains("port:     81"));
        assert!(out.ends_with("query:    k = 1\nquery:    k = 2"));
    }

    #[test]
    fn json_object_carries_href_and_pairs() {
        let url = Url::parse("https://a.com/p?k=v").unwrap();
        let out = render(OutputFormat::Json, &url).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["href"], "https://a.com/p?k=v");
        assert_eq!(value["origin"], "https://a.com");
        assert_eq!(value["query"], json!([["k", "v"]]));
    }
}
