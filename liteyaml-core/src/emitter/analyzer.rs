//! Content analysis behind the automatic scalar style choice, and the
//! builders for literal and quoted scalar text.

use super::ScalarStyle;
use crate::char_utils::{FALSE_SPELLINGS, NULL_SPELLINGS, TRUE_SPELLINGS};
use alloc::string::String;
use core::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitStringInfo {
    /// Number of lines, not counting a single trailing line break.
    pub lines: usize,
    pub needs_quotes: bool,
    pub is_reserved_word: bool,
}

impl EmitStringInfo {
    #[must_use]
    pub fn suggest_scalar_style(&self) -> ScalarStyle {
        if self.lines <= 1 {
            if self.needs_quotes {
                ScalarStyle::DoubleQuoted
            } else {
                ScalarStyle::Plain
            }
        } else {
            ScalarStyle::Literal
        }
    }
}

const QUOTED_FIRST_CHARS: &[char] = &[
    '&', '*', '?', '|', '-', '<', '>', '=', '!', '%', '@', '.',
];
const QUOTED_ANYWHERE_CHARS: &[char] = &[':', '{', '}', '[', ']', ',', '#', '`', '"', '\''];

fn is_reserved_word(value: &str) -> bool {
    let bytes = value.as_bytes();
    NULL_SPELLINGS.contains(&bytes) || TRUE_SPELLINGS.contains(&bytes) || FALSE_SPELLINGS.contains(&bytes)
}

/// Inspects `value` for the characters that make a plain scalar ambiguous.
#[must_use]
pub fn analyze(value: &str) -> EmitStringInfo {
    let (Some(first), Some(last)) = (value.chars().next(), value.chars().last()) else {
        return EmitStringInfo {
            lines: 0,
            needs_quotes: true,
            is_reserved_word: false,
        };
    };

    let is_reserved_word = is_reserved_word(value);
    let mut needs_quotes = is_reserved_word
        || first == ' '
        || last == ' '
        || QUOTED_FIRST_CHARS.contains(&first);

    let mut lines = 1;
    let mut digits = 0;
    for ch in value.chars() {
        match ch {
            '\n' => {
                lines += 1;
                needs_quotes = true;
            }
            c if QUOTED_ANYWHERE_CHARS.contains(&c) || c.is_control() => needs_quotes = true,
            c if c.is_ascii_digit() => digits += 1,
            _ => {}
        }
    }
    if last == '\n' {
        lines -= 1;
    }
    if digits == value.len() {
        needs_quotes = true;
    }

    EmitStringInfo {
        lines,
        needs_quotes,
        is_reserved_word,
    }
}

/// Builds a `|` block scalar whose content lines start at `indent` columns.
///
/// Chomping follows the trailing breaks of `value`: none gives `|-`, one
/// gives `|`, more give `|+`. When the first non-empty line starts with a
/// space an indentation indicator of `indent_width` is written.
#[must_use]
pub fn build_literal_scalar(value: &str, indent: usize, indent_width: usize) -> String {
    let chomp = match value.strip_suffix('\n') {
        Some(rest) if rest.strip_suffix('\r').unwrap_or(rest).ends_with('\n') => Some('+'),
        Some(_) => None,
        None => Some('-'),
    };
    let leading_space = value
        .split('\n')
        .find(|line| !line.is_empty())
        .map_or(false, |line| line.starts_with(' '));

    let mut out = String::with_capacity(value.len() + indent * 2 + 4);
    out.push('|');
    if leading_space {
        // indicators are a single digit
        let _ = write!(out, "{}", indent_width.clamp(1, 9));
    }
    if let Some(hint) = chomp {
        out.push(hint);
    }
    out.push('\n');

    let mut at_line_start = true;
    for ch in value.chars() {
        if at_line_start && ch != '\n' {
            push_indent(&mut out, indent);
        }
        out.push(ch);
        at_line_start = ch == '\n';
    }
    if chomp == Some('-') {
        out.push('\n');
    }
    out
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push(' ');
    }
}

/// Wraps `value` in quotes. Double quoted text uses the YAML escapes;
/// single quoted text doubles embedded `'`.
#[must_use]
pub fn build_quoted_scalar(value: &str, double_quote: bool) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    if double_quote {
        out.push('"');
        escape_double_quoted(value, &mut out);
        out.push('"');
    } else {
        out.push('\'');
        for ch in value.chars() {
            if ch == '\'' {
                out.push('\'');
            }
            out.push(ch);
        }
        out.push('\'');
    }
    out
}

fn escape_double_quoted(value: &str, out: &mut String) {
    let mut start = 0;

    for (i, ch) in value.char_indices() {
        let escaped = match ch {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\0' => "\\0",
            '\x07' => "\\a",
            '\x08' => "\\b",
            '\t' => "\\t",
            '\n' => "\\n",
            '\x0b' => "\\v",
            '\x0c' => "\\f",
            '\r' => "\\r",
            '\x1b' => "\\e",
            '\u{85}' => "\\N",
            '\u{a0}' => "\\_",
            '\u{2028}' => "\\L",
            '\u{2029}' => "\\P",
            c if c.is_control() => "",
            _ => continue,
        };

        out.push_str(&value[start..i]);
        if escaped.is_empty() {
            let _ = write!(out, "\\x{:02X}", u32::from(ch));
        } else {
            out.push_str(escaped);
        }
        start = i + ch.len_utf8();
    }

    out.push_str(&value[start..]);
}
