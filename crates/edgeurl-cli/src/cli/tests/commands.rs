//! Tests for parse, href, query, edit.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_parse() {
    match parse(&["edgeurl", "parse", "https://a.com/p"]) {
        CliCommand::Parse { url, base } => {
            assert_eq!(url, "https://a.com/p");
            assert!(base.is_none());
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_with_base() {
    match parse(&["edgeurl", "parse", "/p", "--base", "https://a.com/"]) {
        CliCommand::Parse { url, base } => {
            assert_eq!(url, "/p");
            assert_eq!(base.as_deref(), Some("https://a.com/"));
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_href_flags() {
    match parse(&["edgeurl", "href", "https://a.com/", "--sort", "--strip-hash"]) {
        CliCommand::Href {
            url,
            sort,
            strip_hash,
        } => {
            assert_eq!(url, "https://a.com/");
            assert!(sort);
            assert!(strip_hash);
        }
        _ => panic!("expected Href"),
    }
}

#[test]
fn cli_parse_query() {
    match parse(&["edgeurl", "query", "https://a.com/?k=1", "k", "--all"]) {
        CliCommand::Query { url, key, all } => {
            assert_eq!(url, "https://a.com/?k=1");
            assert_eq!(key, "k");
            assert!(all);
        }
        _ => panic!("expected Query"),
    }
}

#[test]
fn cli_parse_edit() {
    match parse(&["edgeurl", "edit", "https://a.com/", "--script", "@ops.json"]) {
        CliCommand::Edit { url, script } => {
            assert_eq!(url, "https://a.com/");
            assert_eq!(script, "@ops.json");
        }
        _ => panic!("expected Edit"),
    }
}

#[test]
fn cli_edit_requires_script() {
    use super::super::Cli;
    use clap::Parser;
    assert!(Cli::try_parse_from(["edgeurl", "edit", "https://a.com/"]).is_err());
}
