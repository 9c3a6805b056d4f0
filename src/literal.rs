//! Quoted, escaped rendering of text in which every control or otherwise invisible character shows
//! up as an escape sequence, plus the inverse.

use std::{iter::Peekable, str::Chars};

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::{error::Error, Result};

/// Renders `s` as a quoted literal.
///
/// Single quotes are used unless `s` contains a `'` but no `"`. Backslash, `\n`, `\r`, `\t` and
/// the chosen quote get their short escapes. Every other non-printable character becomes `\xhh`,
/// `\uhhhh` or `\Uhhhhhhhh` depending on its code point.
pub fn escape(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);

    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => out.push_str(&hex_escape(c)),
            c => out.push(c),
        }
    }

    out.push(quote);
    out
}

fn hex_escape(c: char) -> String {
    let code = c as u32;
    if code < 0x100 {
        format!("\\x{:02x}", code)
    } else if code < 0x10000 {
        format!("\\u{:04x}", code)
    } else {
        format!("\\U{:08x}", code)
    }
}

/// Returns `false` for characters that would be invisible or ambiguous if printed as-is.
///
/// That is every character in the "Other" and "Separator" general categories (control, format,
/// surrogate, private-use, unassigned, line and paragraph separators, spaces) except the plain
/// space.
pub fn is_printable(c: char) -> bool {
    match get_general_category(c) {
        GeneralCategory::Control
        | GeneralCategory::Format
        | GeneralCategory::Surrogate
        | GeneralCategory::PrivateUse
        | GeneralCategory::Unassigned
        | GeneralCategory::LineSeparator
        | GeneralCategory::ParagraphSeparator => false,
        GeneralCategory::SpaceSeparator => c == ' ',
        _ => true,
    }
}

/// Parses a literal produced by [`escape`] back into the text it represents.
pub fn unescape(literal: &str) -> Result<String> {
    let mut chars = literal.chars().peekable();

    let quote = match chars.next() {
        Some(q @ '\'') | Some(q @ '"') => q,
        _ => return Err(malformed(0, "missing opening quote")),
    };

    let mut out = String::with_capacity(literal.len());
    let mut position = 1;

    loop {
        let c = chars
            .next()
            .ok_or_else(|| malformed(position, "missing closing quote"))?;

        if c == quote {
            if chars.peek().is_some() {
                return Err(malformed(position + 1, "trailing characters after closing quote"));
            }
            return Ok(out);
        }

        if c != '\\' {
            out.push(c);
            position += 1;
            continue;
        }

        let kind = chars
            .next()
            .ok_or_else(|| malformed(position, "dangling backslash"))?;

        let (unescaped, consumed) = match kind {
            '\\' | '\'' | '"' => (kind, 2),
            'n' => ('\n', 2),
            'r' => ('\r', 2),
            't' => ('\t', 2),
            'x' => (read_hex(&mut chars, 2, position)?, 4),
            'u' => (read_hex(&mut chars, 4, position)?, 6),
            'U' => (read_hex(&mut chars, 8, position)?, 10),
            _ => return Err(malformed(position, "unknown escape sequence")),
        };

        out.push(unescaped);
        position += consumed;
    }
}

fn read_hex(chars: &mut Peekable<Chars<'_>>, digits: usize, position: usize) -> Result<char> {
    let hex: String = chars.take(digits).collect();
    if hex.len() != digits || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed(position, "truncated hex escape"));
    }

    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(std::char::from_u32)
        .ok_or_else(|| malformed(position, "escape is not a valid code point"))
}

#[inline]
fn malformed(position: usize, reason: &'static str) -> Error {
    Error::MalformedLiteral { position, reason }
}
