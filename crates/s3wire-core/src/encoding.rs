//! Percent-encoding for request paths and query strings.
//!
//! Every byte outside the RFC 3986 unreserved set (`A-Z`, `a-z`, `0-9`, `-`,
//! `_`, `.`, `~`) is encoded as `%XX` with uppercase hex digits.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters encoded in query keys, query values and bucket segments.
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Characters encoded in object keys. Forward slashes stay literal.
const KEY_ENCODE_SET: &AsciiSet = &SEGMENT_ENCODE_SET.remove(b'/');

/// Encode a single path segment or query component, including any `/`.
#[must_use]
pub fn encode_segment(input: &str) -> String {
    utf8_percent_encode(input, SEGMENT_ENCODE_SET).to_string()
}

/// Encode an object key, keeping `/` as a path separator.
#[must_use]
pub fn encode_key(input: &str) -> String {
    utf8_percent_encode(input, KEY_ENCODE_SET).to_string()
}
