//! Text encoding of a [`Manifest`]
//!
//! The format is a brace-delimited block with one `"path": "digest"` entry
//! per line:
//!
//! ```text
//! {
//!   "/data/a.txt": "3a98...",
//!   "/data/b.txt": "ERROR: Permission denied (os error 13)"
//! }
//! ```
//!
//! Backslashes and double quotes are backslash-escaped and control
//! characters use their JSON escapes, so an encoded string never contains a
//! raw line break and the output is also valid JSON. The decoder is not a
//! JSON parser: it only promises to read back what [`encode`] writes.
//! It splits entries on `,\n`, so text that carries that sequence inside a
//! string (which `encode` never produces) cannot be decoded.

use std::fmt::Write;

use super::{DigestEntry, Manifest};
use crate::{Error, Result};

const ENTRY_SEPARATOR: &str = ",\n";

/// Encode a manifest into its text form.
pub fn encode(manifest: &Manifest) -> String {
    let mut out = String::from("{\n");
    let last = manifest.len().saturating_sub(1);

    for (idx, (path, entry)) in manifest.iter().enumerate() {
        out.push_str("  \"");
        escape_into(&mut out, path);
        out.push_str("\": \"");
        escape_into(&mut out, &entry.to_stored());
        out.push('"');
        if idx < last {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("}\n");
    out
}

/// Decode text produced by [`encode`].
///
/// # Errors
///
/// Returns [`Error::ManifestParse`] with the 1-based line of the offending
/// entry when the text is structurally invalid.
pub fn decode(text: &str) -> Result<Manifest> {
    let text = text.replace("\r\n", "\n");
    let leading_lines = text[..text.len() - text.trim_start().len()]
        .matches('\n')
        .count();
    let trimmed = text.trim();

    let body = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| Error::parse(leading_lines + 1, "manifest must be enclosed in braces"))?;

    let mut manifest = Manifest::new();
    // Byte offset into `trimmed` where the current entry starts; 1 skips `{`
    let mut offset = 1;

    for raw in body.split(ENTRY_SEPARATOR) {
        let start = offset;
        offset += raw.len() + ENTRY_SEPARATOR.len();

        let entry = raw.trim();
        if entry.is_empty() {
            continue;
        }

        let skipped = raw.len() - raw.trim_start().len();
        let line = leading_lines + trimmed[..start + skipped].matches('\n').count() + 1;

        let (path, value) = parse_entry(entry, line)?;
        if manifest.contains(&path) {
            return Err(Error::parse(line, format!("duplicate path \"{}\"", path)));
        }
        manifest.insert(path, DigestEntry::from_stored(value));
    }

    Ok(manifest)
}

/// Escape a string for the manifest text.
///
/// Backslash is handled before quote so an escaped quote is never
/// escaped a second time.
fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < ' ' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
}

/// Split one `"key": "value"` entry.
///
/// The separator is the first colon after the closing quote of the key, so
/// colons inside paths (drive letters, URLs) are safe.
fn parse_entry(entry: &str, line: usize) -> Result<(String, String)> {
    let (path, rest) = parse_quoted(entry, line)?;

    let rest = rest
        .trim_start()
        .strip_prefix(':')
        .ok_or_else(|| Error::parse(line, "expected ':' after path"))?;

    let (value, rest) = parse_quoted(rest.trim_start(), line)?;

    // Leftover separators from the last entry or a hand-edited file
    if let Some(c) = rest
        .chars()
        .find(|c| !(*c == ',' || *c == '}' || c.is_whitespace()))
    {
        return Err(Error::parse(
            line,
            format!("unexpected character '{}' after digest", c),
        ));
    }

    Ok((path, value))
}

/// Read a double-quoted string at the start of `input`, returning the
/// unescaped content and the text after the closing quote.
fn parse_quoted(input: &str, line: usize) -> Result<(String, &str)> {
    let body = input
        .strip_prefix('"')
        .ok_or_else(|| Error::parse(line, "expected '\"'"))?;

    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices();

    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => return Ok((out, &body[idx + 1..])),
            '\\' => {
                let (_, escaped) = chars
                    .next()
                    .ok_or_else(|| Error::parse(line, "unterminated escape sequence"))?;
                match escaped {
                    '"' => out.push('"'),
                    '\\' => out.push('\\'),
                    '/' => out.push('/'),
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    't' => out.push('\t'),
                    'b' => out.push('\u{8}'),
                    'f' => out.push('\u{c}'),
                    'u' => {
                        let hex: String = chars.by_ref().take(4).map(|(_, h)| h).collect();
                        let decoded = (hex.len() == 4)
                            .then(|| u32::from_str_radix(&hex, 16).ok())
                            .flatten()
                            .and_then(char::from_u32)
                            .ok_or_else(|| {
                                Error::parse(line, format!("invalid unicode escape \\u{}", hex))
                            })?;
                        out.push(decoded);
                    }
                    other => {
                        return Err(Error::parse(
                            line,
                            format!("unknown escape sequence \\{}", other),
                        ));
                    }
                }
            }
            c => out.push(c),
        }
    }

    Err(Error::parse(line, "unterminated string"))
}
