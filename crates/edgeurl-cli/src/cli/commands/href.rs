//! `edgeurl href <url>` – print the regenerated href.

use anyhow::Result;
use edgeurl_core::config::{EdgeUrlConfig, OutputFormat};
use edgeurl_core::Url;

use super::parse_arg;

pub fn run_href(cfg: &EdgeUrlConfig, url: &str) -> Result<()> {
    let mut url = parse_arg(url)?;
    println!("{}", render(cfg, &mut url)?);
    Ok(())
}

/// Formats `url` after applying the configured canonicalization.
pub(super) fn render(cfg: &EdgeUrlConfig, url: &mut Url) -> Result<String> {
    cfg.canonicalize(url);
    Ok(match cfg.output {
        OutputFormat::Plain => url.href(),
        OutputFormat::Json => serde_json::to_string(url)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_json() {
        let mut url = Url::parse("https://a.com/p?b=1&a=2#x").unwrap();
        let cfg = EdgeUrlConfig::default();
        assert_eq!(render(&cfg, &mut url).unwrap(), "https://a.com/p?b=1&a=2#x");

        let cfg = EdgeUrlConfig {
            sort_query: true,
            strip_hash: true,
            output: OutputFormat::Json,
        };
        assert_eq!(render(&cfg, &mut url).unwrap(), "\"https://a.com/p?a=2&b=1\"");
    }
}
