use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::Url;

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Global configuration loaded from `~/.config/edgeurl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeUrlConfig {
    /// Sort query pairs by key before printing an href.
    #[serde(default)]
    pub sort_query: bool,
    /// Drop the `#fragment` before printing an href (signing targets never carry one).
    #[serde(default)]
    pub strip_hash: bool,
    /// "plain" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
}

impl EdgeUrlConfig {
    /// Applies the output canonicalization options to `url` in place.
    pub fn canonicalize(&self, url: &mut Url) {
        if self.sort_query {
            url.search_params_mut().sort();
        }
        if self.strip_hash {
            url.hash.clear();
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("edgeurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<EdgeUrlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: EdgeUrlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EdgeUrlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = EdgeUrlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = EdgeUrlConfig::default();
        assert!(!cfg.sort_query);
        assert!(!cfg.strip_hash);
        assert_eq!(cfg.output, OutputFormat::Plain);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = EdgeUrlConfig {
            sort_query: true,
            strip_hash: false,
            output: OutputFormat::Json,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: EdgeUrlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_missing_fields_default() {
        let cfg: EdgeUrlConfig = toml::from_str("output = \"json\"").unwrap();
        assert_eq!(cfg.output, OutputFormat::Json);
        assert!(!cfg.sort_query);
        assert!(toml::from_str::<EdgeUrlConfig>("output = \"xml\"").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"sort_query = true\nstrip_hash = true\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert!(cfg.sort_query);
        assert!(cfg.strip_hash);
    }

    #[test]
    fn load_from_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }

    #[test]
    fn canonicalize_sorts_and_strips() {
        let mut url = Url::parse("https://a.com/p?b=1&a=2#frag").unwrap();
        EdgeUrlConfig::default().canonicalize(&mut url);
        assert_eq!(url.href(), "https://a.com/p?b=1&a=2#frag");

        let cfg = EdgeUrlConfig {
            sort_query: true,
            strip_hash: true,
            ..Default::default()
        };
        cfg.canonicalize(&mut url);
        assert_eq!(url.href(), "https://a.com/p?a=2&b=1");
    }
}
