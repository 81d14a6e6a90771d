//! Locale-aware key comparison used by [`QueryParams::sort`](super::QueryParams::sort).
//!
//! Keys are ordered by the CLDR root collation at tertiary strength with
//! non-ignorable punctuation, the same order `localeCompare` produces without
//! an explicit locale. Keys the collator considers equal fall back to code
//! point order so the result is total.

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

thread_local! {
    static ROOT: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!(%err, "root collator unavailable, sorting by code point");
            None
        }
    }
}

/// Compares two keys the way a user-facing sort would.
pub fn compare(a: &str, b: &str) -> Ordering {
    ROOT.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => Ordering::Equal,
    })
    .then_with(|| a.cmp(b))
}
