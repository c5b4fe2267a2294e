//! Block Locator.
//!
//! Finds the brace-delimited block that follows a label by explicit
//! depth counting. `{` and `[` both open a block and `}` and `]` both close
//! one; intensity buckets are bracket lists of brace records.
//!
//! Labels are anchored: the byte before a label must not be an identifier
//! byte, and the label must be followed (after optional whitespace) by a
//! separator. `climb` therefore never matches inside `climbing:` or
//! `hillclimb:`. Quoted keys (`"ftp": {`) are accepted as well.
//!
//! Delimiters inside quoted values are not skipped when counting depth.
//! Catalog values never contain them, and the scanner relies on that.
//! Record splitting is stricter: it ignores quoted text and comments, since
//! free text such as tips routinely contains `name:`.

use crate::error::{StructuralError, line_of};
use crate::span::Span;

/// Separator accepted between a record key and its value.
const KEY_SEPARATORS: &[u8] = b":";

/// The root label may be an assignment (`const WORKOUTS_DB = {`).
const ROOT_SEPARATORS: &[u8] = b":=";

pub(crate) const fn is_opener(byte: u8) -> bool {
    matches!(byte, b'{' | b'[')
}

pub(crate) const fn is_closer(byte: u8) -> bool {
    matches!(byte, b'}' | b']')
}

pub(crate) const fn is_ident(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}

pub(crate) const fn is_quote(byte: u8) -> bool {
    matches!(byte, b'"' | b'\'' | b'`')
}

/// An anchored `key <separator>` occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyMatch {
    /// Offset of the key's first byte, or of its opening quote.
    pub start: usize,
    /// Offset of the first non-whitespace byte after the separator.
    pub value: usize,
}

/// A labeled block found by [`top_level_blocks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledBlock {
    pub label: String,
    pub span: Span,
}

/// Locate the first block labeled `label` inside `scope`.
///
/// Returns the span of the block including its outer delimiters, or `None`
/// when no anchored `label:` followed by an opener exists in `scope`.
///
/// # Errors
///
/// Returns [`StructuralError::Unbalanced`] when the block does not close
/// before the end of `scope`.
pub fn locate(text: &str, scope: Span, label: &str) -> Result<Option<Span>, StructuralError> {
    locate_with(text, scope, label, KEY_SEPARATORS)
}

/// Locate the enclosing catalog block, accepting `label = {` or `label: {`.
///
/// # Errors
///
/// Returns [`StructuralError::Unbalanced`] when the block never closes.
pub fn locate_root(text: &str, label: &str) -> Result<Option<Span>, StructuralError> {
    locate_with(text, Span::of(text), label, ROOT_SEPARATORS)
}

fn locate_with(
    text: &str,
    scope: Span,
    label: &str,
    separators: &[u8],
) -> Result<Option<Span>, StructuralError> {
    let bytes = text.as_bytes();
    let mut from = scope.start;

    while let Some(key) = find_key(text, scope, label, from, separators) {
        if key.value < scope.end && is_opener(bytes[key.value]) {
            let end = match_block(text, key.value, scope.end)?;
            return Ok(Some(Span::new(key.value, end)));
        }
        // Same label with a scalar value (e.g. `intensity: "easy"`); keep looking.
        from = key.value;
    }

    Ok(None)
}

/// Exclusive end of the block whose opener sits at `open`, scanning no
/// further than `limit`.
pub(crate) fn match_block(text: &str, open: usize, limit: usize) -> Result<usize, StructuralError> {
    let bytes = text.as_bytes();
    let limit = limit.min(bytes.len());
    let mut depth = 0usize;

    for (pos, &byte) in bytes.iter().enumerate().take(limit).skip(open) {
        if is_opener(byte) {
            depth += 1;
        } else if is_closer(byte) {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Ok(pos + 1);
            }
        }
    }

    Err(StructuralError::Unbalanced {
        offset: open,
        line: line_of(text, open),
        depth,
    })
}

/// Verify that every opener in `text` has a closer and vice versa.
///
/// # Errors
///
/// [`StructuralError::StrayCloser`] for a closer at depth zero,
/// [`StructuralError::Unbalanced`] for openers still open at end of input
/// (reporting the innermost one).
pub fn check_balance(text: &str) -> Result<(), StructuralError> {
    let mut open = Vec::new();

    for (pos, &byte) in text.as_bytes().iter().enumerate() {
        if is_opener(byte) {
            open.push(pos);
        } else if is_closer(byte) && open.pop().is_none() {
            return Err(StructuralError::StrayCloser {
                offset: pos,
                line: line_of(text, pos),
            });
        }
    }

    match open.last() {
        Some(&offset) => Err(StructuralError::Unbalanced {
            offset,
            line: line_of(text, offset),
            depth: open.len(),
        }),
        None => Ok(()),
    }
}

/// Split `scope` into one sub-span per record, a record starting at each
/// `key:` occurrence.
///
/// Each sub-span starts at a `key:` occurrence and ends right before the next
/// one; the last ends at `scope.end`. The scan is sequential so a field of
/// record N+1 can never be attributed to record N. Only keys at the
/// shallowest depth they occur at start a record: quoted text, comments and
/// nested `key:` fields deeper inside a record never do.
#[must_use]
pub fn split_records(text: &str, scope: Span, key: &str) -> Vec<Span> {
    let candidates = record_keys(text, scope, key);
    let Some(record_depth) = candidates.iter().map(|&(_, depth)| depth).min() else {
        return Vec::new();
    };
    let starts: Vec<usize> = candidates
        .into_iter()
        .filter(|&(_, depth)| depth == record_depth)
        .map(|(start, _)| start)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(idx, &start)| {
            let end = starts.get(idx + 1).copied().unwrap_or(scope.end);
            Span::new(start, end)
        })
        .collect()
}

/// Anchored `key:` occurrences outside quoted values and comments, with the
/// depth each one sits at relative to `scope.start`.
fn record_keys(text: &str, scope: Span, key: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let end = scope.end.min(bytes.len());
    let needle = key.as_bytes();
    let mut found = Vec::new();
    let mut depth = 0usize;
    let mut pos = scope.start;

    if needle.is_empty() {
        return found;
    }

    while pos < end {
        let byte = bytes[pos];
        if is_quote(byte) {
            // `"name": ...` is a key, any other quoted text is skipped whole.
            if bytes[pos + 1..end].starts_with(needle) {
                if let Some(hit) = anchor(bytes, scope, pos + 1, needle.len(), KEY_SEPARATORS) {
                    found.push((hit.start, depth));
                    pos = hit.value;
                    continue;
                }
            }
            pos = skip_quoted(bytes, pos, end);
        } else if byte == b'/' && bytes.get(pos + 1) == Some(&b'/') {
            pos = skip_line_comment(bytes, pos, end);
        } else if byte == b'/' && bytes.get(pos + 1) == Some(&b'*') {
            pos = skip_block_comment(bytes, pos, end);
        } else if is_opener(byte) {
            depth += 1;
            pos += 1;
        } else if is_closer(byte) {
            depth = depth.saturating_sub(1);
            pos += 1;
        } else if bytes[pos..end].starts_with(needle) {
            match anchor(bytes, scope, pos, needle.len(), KEY_SEPARATORS) {
                Some(hit) => {
                    found.push((hit.start, depth));
                    pos = hit.value;
                }
                None => pos += needle.len(),
            }
        } else {
            pos += 1;
        }
    }

    found
}

/// Offset just past the quoted value opened at `open`. Backslash escapes the
/// next byte; an unterminated value runs to `end`.
fn skip_quoted(bytes: &[u8], open: usize, end: usize) -> usize {
    let quote = bytes[open];
    let mut pos = open + 1;
    while pos < end {
        match bytes[pos] {
            b'\\' => pos += 2,
            byte if byte == quote => return pos + 1,
            _ => pos += 1,
        }
    }
    end
}

fn skip_line_comment(bytes: &[u8], start: usize, end: usize) -> usize {
    bytes[start..end]
        .iter()
        .position(|&byte| byte == b'\n')
        .map_or(end, |offset| start + offset + 1)
}

fn skip_block_comment(bytes: &[u8], start: usize, end: usize) -> usize {
    bytes
        .get(start + 2..end)
        .and_then(|body| body.windows(2).position(|pair| pair == b"*/"))
        .map_or(end, |offset| start + 2 + offset + 2)
}

/// Labeled blocks at the shallowest labeled depth inside `scope`, in
/// document order. Duplicated labels are all returned.
///
/// For a bare catalog (`ftp: { ... } climbing: { ... }`) these are the
/// depth-0 blocks; inside `WORKOUTS_DB = { ... }` they are its children.
///
/// # Errors
///
/// Returns [`StructuralError::Unbalanced`] when a block does not close
/// inside `scope`.
pub fn top_level_blocks(text: &str, scope: Span) -> Result<Vec<LabeledBlock>, StructuralError> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut shallowest: Option<usize> = None;
    let mut found: Vec<(usize, String)> = Vec::new();

    for pos in scope.start..scope.end.min(bytes.len()) {
        let byte = bytes[pos];
        if is_opener(byte) {
            if let Some(label) = label_before(bytes, scope.start, pos) {
                match shallowest {
                    Some(level) if depth > level => {}
                    Some(level) if depth == level => found.push((pos, label)),
                    _ => {
                        shallowest = Some(depth);
                        found.clear();
                        found.push((pos, label));
                    }
                }
            }
            depth += 1;
        } else if is_closer(byte) {
            depth = depth.saturating_sub(1);
        }
    }

    found
        .into_iter()
        .map(|(open, label)| {
            let end = match_block(text, open, scope.end)?;
            Ok(LabeledBlock {
                label,
                span: Span::new(open, end),
            })
        })
        .collect()
}

/// Find the first anchored occurrence of `key` followed by one of
/// `separators`, searching `scope` from `from` onwards.
pub(crate) fn find_key(
    text: &str,
    scope: Span,
    key: &str,
    from: usize,
    separators: &[u8],
) -> Option<KeyMatch> {
    if key.is_empty() {
        return None;
    }

    let bytes = text.as_bytes();
    let mut pos = from.max(scope.start);
    while pos < scope.end {
        let found = pos + text.get(pos..scope.end)?.find(key)?;
        if let Some(anchored) = anchor(bytes, scope, found, key.len(), separators) {
            return Some(anchored);
        }
        pos = found + 1;
    }
    None
}

fn anchor(
    bytes: &[u8],
    scope: Span,
    at: usize,
    len: usize,
    separators: &[u8],
) -> Option<KeyMatch> {
    let mut start = at;
    let mut cursor = at + len;

    match at.checked_sub(1).map(|prev| bytes[prev]) {
        Some(quote) if is_quote(quote) => {
            if at - 1 < scope.start || bytes.get(cursor) != Some(&quote) {
                return None;
            }
            start = at - 1;
            cursor += 1;
        }
        Some(prev) if is_ident(prev) => return None,
        _ => {}
    }

    cursor = skip_whitespace(bytes, cursor, scope.end);
    if cursor >= scope.end || !separators.contains(&bytes[cursor]) {
        return None;
    }

    Some(KeyMatch {
        start,
        value: skip_whitespace(bytes, cursor + 1, scope.end),
    })
}

/// Read the `label:` (or `"label":`) that immediately precedes the opener at
/// `open`, never looking before `floor`.
fn label_before(bytes: &[u8], floor: usize, open: usize) -> Option<String> {
    let mut cursor = skip_whitespace_back(bytes, floor, open);
    if cursor == floor || bytes[cursor - 1] != b':' {
        return None;
    }
    cursor = skip_whitespace_back(bytes, floor, cursor - 1);

    let quote = (cursor > floor && is_quote(bytes[cursor - 1])).then(|| bytes[cursor - 1]);
    let end = if quote.is_some() { cursor - 1 } else { cursor };

    let mut start = end;
    while start > floor && is_ident(bytes[start - 1]) {
        start -= 1;
    }
    if start == end || bytes[start].is_ascii_digit() {
        return None;
    }
    if let Some(quote) = quote {
        if start == floor || bytes[start - 1] != quote {
            return None;
        }
    }

    Some(String::from_utf8_lossy(&bytes[start..end]).into_owned())
}

fn skip_whitespace(bytes: &[u8], mut pos: usize, limit: usize) -> usize {
    while pos < limit && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn skip_whitespace_back(bytes: &[u8], floor: usize, mut pos: usize) -> usize {
    while pos > floor && bytes[pos - 1].is_ascii_whitespace() {
        pos -= 1;
    }
    pos
}
