//! CLI for edgeurl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use edgeurl_core::config::{self, EdgeUrlConfig, OutputFormat};
use std::path::PathBuf;

use commands::{run_edit, run_href, run_parse, run_query};

/// Top-level CLI for edgeurl.
#[derive(Debug, Parser)]
#[command(name = "edgeurl")]
#[command(about = "edgeurl: parse, edit and regenerate absolute URLs", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/edgeurl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print JSON regardless of the configured output format.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a URL into its components.
    Parse {
        /// Absolute URL.
        url: String,
        /// Base URL for relative input (rejected: only absolute URLs are supported).
        #[arg(long)]
        base: Option<String>,
    },

    /// Print the regenerated href of a URL.
    Href {
        /// Absolute URL.
        url: String,
        /// Sort query pairs by key.
        #[arg(long)]
        sort: bool,
        /// Drop the #fragment.
        #[arg(long)]
        strip_hash: bool,
    },

    /// Print the value(s) of a query parameter.
    Query {
        /// Absolute URL.
        url: String,
        /// Parameter name.
        key: String,
        /// Print every value for the key, one per line, instead of the first.
        #[arg(long)]
        all: bool,
    },

    /// Apply a JSON edit script to a URL and print the result.
    Edit {
        /// Absolute URL.
        url: String,
        /// Inline JSON array of edit ops, or @path to read it from a file.
        #[arg(long, value_name = "JSON|@FILE")]
        script: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        if cli.json {
            cfg.output = OutputFormat::Json;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        cli.command.run(&cfg)
    }

    fn run(self, cfg: &EdgeUrlConfig) -> Result<()> {
        match self {
            CliCommand::Parse { url, base } => run_parse(cfg, &url, base.as_deref())?,
            CliCommand::Href {
                url,
                sort,
                strip_hash,
            } => {
                let cfg = EdgeUrlConfig {
                    sort_query: cfg.sort_query || sort,
                    strip_hash: cfg.strip_hash || strip_hash,
                    ..cfg.clone()
                };
                run_href(&cfg, &url)?;
            }
            CliCommand::Query { url, key, all } => run_query(cfg, &url, &key, all)?,
            CliCommand::Edit { url, script } => run_edit(cfg, &url, &script)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
