//! Absolute-URL grammar: `protocol://hostname[:port][pathname][?search][#hash]`.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Word characters are ASCII-only; hostnames are not IDNA-decoded.
const PATTERN: &str = concat!(
    r"^(?P<protocol>[0-9A-Za-z_]+:)",
    r"//(?P<hostname>[0-9A-Za-z_.\-]+)",
    r"(?::(?P<port>[0-9]+))?",
    r"(?P<pathname>/[0-9A-Za-z_/.%*\-&$+,:;=]*)?",
    r"(?P<search>\?(?:[0-9A-Za-z_/.%*\-&$+,:;]+=[0-9A-Za-z_/.%*\-&$+,:;]*&?)+)?",
    r"(?P<hash>#.+)?$",
);

fn grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| Regex::new(PATTERN).expect("URL grammar is a valid regex"))
}

/// Raw component substrings of a matched URL. Absent groups are empty.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Components<'a> {
    pub protocol: &'a str,
    pub hostname: &'a str,
    pub port: &'a str,
    pub pathname: &'a str,
    pub search: &'a str,
    pub hash: &'a str,
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Matches `input` against the grammar, returning `None` on mismatch.
pub(crate) fn split(input: &str) -> Option<Components<'_>> {
    let caps = grammar().captures(input)?;
    Some(Components {
        protocol: group(&caps, "protocol"),
        hostname: group(&caps, "hostname"),
        port: group(&caps, "port"),
        pathname: group(&caps, "pathname"),
        search: group(&caps, "search"),
        hash: group(&caps, "hash"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url() {
        let c = split("https://cdn.example-1.com:8443/a/b.txt?x=1&y=%20#frag").unwrap();
        assert_eq!(
            c,
            Components {
                protocol: "https:",
                hostname: "cdn.example-1.com",
                port: "8443",
                pathname: "/a/b.txt",
                search: "?x=1&y=%20",
                hash: "#frag",
            }
        );
    }

    #[test]
    fn optional_groups_default_to_empty() {
        let c = split("http://localhost").unwrap();
        assert_eq!(c.hostname, "localhost");
        assert_eq!((c.port, c.pathname, c.search, c.hash), ("", "", "", ""));

        let c = split("s3://bucket?k=v").unwrap();
        assert_eq!(c.pathname, "");
        assert_eq!(c.search, "?k=v");
    }

    #[test]
    fn rejects_outside_grammar() {
        for input in [
            "",
            "example.com/path",
            "//example.com",
            "https://",
            "https://exa mple.com",
            "https://example.com:port",
            "https://example.com/path with space",
            "https://example.com/?novalue",
            "https://example.com/#",
        ] {
            assert!(split(input).is_none(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn port_separator_requires_digits() {
        assert!(split("https://a.com:/p").is_none());
        assert!(split("https://a.com:").is_none());
        assert_eq!(split("https://a.com:0/p").unwrap().port, "0");
    }

    #[test]
    fn search_keys_may_chain_with_ampersand() {
        let c = split("https://a.com/?flag&k=v").unwrap();
        assert_eq!(c.search, "?flag&k=v");
    }
}
