//! Field Extractor.
//!
//! Scalar lookups by labeled key, confined to a span. Only the first anchored
//! occurrence of the key is considered. A missing key or a value of the wrong
//! shape yields `None`: absence is data for the validator, not an error.

use crate::locator::{find_key, is_quote};
use crate::span::Span;

const SEPARATOR: &[u8] = b":";

/// Text between the quote delimiters following `key` inside `scope`.
///
/// Accepts `"…"`, `'…'` and `` `…` ``. A backslash escapes the next byte, so
/// escaped quotes do not terminate the value; escapes are kept verbatim.
#[must_use]
pub fn extract_string(text: &str, scope: Span, key: &str) -> Option<String> {
    let found = find_key(text, scope, key, scope.start, SEPARATOR)?;
    if found.value >= scope.end {
        return None;
    }
    let bytes = text.as_bytes();
    let quote = bytes[found.value];
    if !is_quote(quote) {
        return None;
    }

    let open = found.value + 1;
    let mut pos = open;
    while pos < scope.end {
        match bytes[pos] {
            b'\\' => pos += 2,
            byte if byte == quote => {
                return Span::new(open, pos).slice(text).map(str::to_string);
            }
            _ => pos += 1,
        }
    }

    None
}

/// The run of digits following `key` inside `scope`.
///
/// Signed, quoted or overflowing values yield `None`.
#[must_use]
pub fn extract_int(text: &str, scope: Span, key: &str) -> Option<u32> {
    let found = find_key(text, scope, key, scope.start, SEPARATOR)?;
    let digits = Span::new(found.value, scope.end)
        .slice(text)?
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    text[found.value..found.value + digits].parse().ok()
}
