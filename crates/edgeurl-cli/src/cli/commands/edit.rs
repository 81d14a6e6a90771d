//! `edgeurl edit <url> --script <json|@file>` – apply an edit script.

use anyhow::{Context, Result};
use edgeurl_core::config::EdgeUrlConfig;
use edgeurl_core::edit::{apply_all, parse_script};
use std::fs;

use super::{href, parse_arg};

pub fn run_edit(cfg: &EdgeUrlConfig, url: &str, script: &str) -> Result<()> {
    let mut url = parse_arg(url)?;
    let ops = parse_script(&load_script(script)?)?;
    apply_all(&mut url, &ops)?;
    println!("{}", href::render(cfg, &mut url)?);
    Ok(())
}

/// Returns the script text: inline JSON, or the contents of the file after `@`.
fn load_script(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).with_context(|| format!("read script {path}")),
        None => Ok(arg.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_script_is_used_verbatim() {
        assert_eq!(load_script("[]").unwrap(), "[]");
    }

    #[test]
    fn missing_script_file_names_path() {
        let err = load_script("@/nonexistent/edgeurl-script.json").unwrap_err();
        assert!(format!("{err:#}").contains("edgeurl-script.json"));
    }
}
