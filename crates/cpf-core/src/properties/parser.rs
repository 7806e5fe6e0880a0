//! Parser for the `.properties` text format
//!
//! Input bytes are ISO-8859-1; anything outside that range must be written as
//! a `\uXXXX` escape.
//!
//! ```text
//! # comment
//! ! also a comment
//! key = value
//! key2:value
//! key3 value
//! long = first \
//!        second
//! ```

use super::error::{PropertiesError, PropertiesResult};

/// Decode ISO-8859-1 bytes; every byte maps to the code point of the same value
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Parse properties text into `(key, value)` pairs in file order
///
/// Duplicate keys are all returned; the caller decides which one wins.
pub fn parse(text: &str) -> PropertiesResult<Vec<(String, String)>> {
    parse_lines(logical_lines(text, false))
}

/// Parse raw file bytes
pub fn parse_bytes(bytes: &[u8]) -> PropertiesResult<Vec<(String, String)>> {
    parse(&decode_latin1(bytes))
}

/// Parse text that was cut off mid-stream
///
/// Only lines whose terminator was read count. An unterminated tail, and a
/// continued line whose continuation never arrived, are dropped.
pub fn parse_truncated(text: &str) -> PropertiesResult<Vec<(String, String)>> {
    parse_lines(logical_lines(text, true))
}

/// Parse raw bytes that were cut off mid-stream
pub fn parse_truncated_bytes(bytes: &[u8]) -> PropertiesResult<Vec<(String, String)>> {
    parse_truncated(&decode_latin1(bytes))
}

fn parse_lines(lines: Vec<(usize, Vec<char>)>) -> PropertiesResult<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for (line_no, line) in lines {
        let (key, value) = split_key_value(&line);
        let key = unescape(key).ok_or(PropertiesError::MalformedEscape { line: line_no })?;
        let value = unescape(value).ok_or(PropertiesError::MalformedEscape { line: line_no })?;
        pairs.push((key, value));
    }
    Ok(pairs)
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Join continued lines and drop comments and blank lines
///
/// Each logical line is tagged with the 1-based number of the natural line it
/// starts on. With `truncated`, the text after the last line terminator and
/// any continuation left open at the end are discarded.
fn logical_lines(text: &str, truncated: bool) -> Vec<(usize, Vec<char>)> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut natural: Vec<&str> = normalized.split('\n').collect();
    if truncated {
        natural.pop();
    }

    let mut lines = Vec::new();
    let mut pending: Option<(usize, Vec<char>)> = None;

    for (idx, raw) in natural.into_iter().enumerate() {
        let trimmed = raw.trim_start_matches(is_blank);

        if pending.is_none()
            && (trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!'))
        {
            continue;
        }

        let (body, continues) = strip_continuation(trimmed);
        let (start, mut acc) = pending.take().unwrap_or((idx + 1, Vec::new()));
        acc.extend(body.chars());

        if continues {
            pending = Some((start, acc));
        } else {
            lines.push((start, acc));
        }
    }

    if let Some(last) = pending {
        if !truncated {
            lines.push(last);
        }
    }
    lines
}

/// Strip a trailing continuation backslash
///
/// Only an odd run of backslashes continues the line; an even run is a
/// sequence of escaped backslashes.
fn strip_continuation(line: &str) -> (&str, bool) {
    let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
    if trailing % 2 == 1 {
        (&line[..line.len() - 1], true)
    } else {
        (line, false)
    }
}

/// Split a logical line into its raw (still escaped) key and value
fn split_key_value(line: &[char]) -> (&[char], &[char]) {
    let len = line.len();
    let mut key_end = len;
    let mut value_start = len;
    let mut has_separator = false;
    let mut preceding_backslash = false;

    for (i, &c) in line.iter().enumerate() {
        if !preceding_backslash {
            if c == '=' || c == ':' {
                key_end = i;
                value_start = i + 1;
                has_separator = true;
                break;
            }
            if is_blank(c) {
                key_end = i;
                value_start = i + 1;
                break;
            }
        }
        preceding_backslash = c == '\\' && !preceding_backslash;
    }

    while value_start < len {
        let c = line[value_start];
        if is_blank(c) {
            value_start += 1;
        } else if !has_separator && (c == '=' || c == ':') {
            has_separator = true;
            value_start += 1;
        } else {
            break;
        }
    }

    (&line[..key_end], &line[value_start..])
}

/// Resolve escapes; `None` on a malformed `\u` escape
///
/// `\u` escapes are UTF-16 code units, so a surrogate pair written as two
/// escapes combines into one character. An unpaired surrogate cannot live in a
/// `String` and becomes U+FFFD.
fn unescape(raw: &[char]) -> Option<String> {
    let mut units: Vec<u16> = Vec::with_capacity(raw.len());
    let mut buf = [0u16; 2];
    let mut iter = raw.iter().copied();

    while let Some(c) = iter.next() {
        let resolved = if c == '\\' {
            match iter.next() {
                Some('u') => {
                    let mut code: u16 = 0;
                    for _ in 0..4 {
                        let digit = iter.next()?.to_digit(16)?;
                        code = (code << 4) | digit as u16;
                    }
                    units.push(code);
                    continue;
                }
                Some('t') => '\t',
                Some('n') => '\n',
                Some('r') => '\r',
                Some('f') => '\x0c',
                Some(other) => other,
                None => break,
            }
        } else {
            c
        };
        units.extend_from_slice(resolved.encode_utf16(&mut buf));
    }

    Some(String::from_utf16_lossy(&units))
}
