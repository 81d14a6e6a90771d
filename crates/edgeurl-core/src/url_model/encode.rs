//! Percent-encoding of query components.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Everything except the RFC 3986 unreserved characters plus `! * ' ( )`,
/// i.e. the set JavaScript's `encodeURIComponent` escapes.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes one query key or value. Borrows when nothing needs escaping.
pub fn encode_component(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, URI_COMPONENT).into()
}
