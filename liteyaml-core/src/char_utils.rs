//! Byte classes of the YAML grammar. Every predicate works on a single raw
//! byte; multi-byte UTF-8 sequences are never split by them because all the
//! classes below are ASCII.

pub const SPACE: u8 = b' ';
pub const TAB: u8 = b'\t';
pub const LF: u8 = b'\n';
pub const CR: u8 = b'\r';
pub const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

pub const NULL_SPELLINGS: [&[u8]; 4] = [b"~", b"null", b"Null", b"NULL"];
pub const TRUE_SPELLINGS: [&[u8]; 3] = [b"true", b"True", b"TRUE"];
pub const FALSE_SPELLINGS: [&[u8]; 3] = [b"false", b"False", b"FALSE"];

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_blank(c: u8) -> bool {
    c == SPACE || c == TAB
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_break(c: u8) -> bool {
    c == CR || c == LF
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_blank_or_break(c: u8) -> bool {
    c == SPACE || c == TAB || c == CR || c == LF
}

/// `,` `[` `]` `{` `}`
#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_flow(c: u8) -> bool {
    matches!(c, b',' | b'[' | b']' | b'{' | b'}')
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_number(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Bytes that may appear in a decimal or exponent float spelling.
#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_number_representation(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E')
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_hex(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

/// Value of a hex digit. Callers check [`is_hex`] first; anything else maps to 0.
#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn as_hex(c: u8) -> u32 {
    match c {
        b'0'..=b'9' => u32::from(c - b'0'),
        b'a'..=b'f' => u32::from(c - b'a') + 10,
        b'A'..=b'F' => u32::from(c - b'A') + 10,
        _ => 0,
    }
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_word_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-'
}

/// Characters of anchor names, alias names and directive names.
#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_alpha(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'-')
}

/// Check whether the character is a valid URI character.
#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_uri_char(c: u8) -> bool {
    is_word_char(c) || b"#;/?:@&=+$,_.!~*'()[]%".contains(&c)
}

/// URI characters allowed in a tag shorthand suffix.
#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_tag_char(c: u8) -> bool {
    is_uri_char(c) && !is_flow(c) && c != b'!'
}
