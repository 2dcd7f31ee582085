//! Byte buffers holding decoded scalar content and the pool recycling them.

use crate::buffer::ExpandBuffer;
use crate::char_utils::{is_number_representation, FALSE_SPELLINGS, NULL_SPELLINGS, TRUE_SPELLINGS};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Debug, Display, Formatter};
use core::str::Utf8Error;

const DEFAULT_SCALAR_CAPACITY: usize = 256;

const POSITIVE_INFINITY: [&[u8]; 6] = [b".inf", b".Inf", b".INF", b"+.inf", b"+.Inf", b"+.INF"];
const NEGATIVE_INFINITY: [&[u8]; 3] = [b"-.inf", b"-.Inf", b"-.INF"];
const NOT_A_NUMBER: [&[u8]; 3] = [b".nan", b".NaN", b".NAN"];

/// Line break as found in the input. Scalar content keeps the original bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineBreak {
    #[default]
    None,
    Lf,
    CrLf,
    Cr,
}

impl LineBreak {
    #[must_use]
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineBreak::None => b"",
            LineBreak::Lf => b"\n",
            LineBreak::CrLf => b"\r\n",
            LineBreak::Cr => b"\r",
        }
    }
}

/// Decoded content of a scalar, alias or anchor token.
///
/// Bytes are exactly what the tokenizer produced after unescaping and
/// folding, so they are valid UTF-8 whenever the input was.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Scalar {
    buffer: Vec<u8>,
}

impl Scalar {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Scalar {
            buffer: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn from_bytes(content: &[u8]) -> Self {
        Scalar {
            buffer: Vec::from(content),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// # Errors
    /// Returns the underlying [`Utf8Error`] when the content is not valid UTF-8.
    pub fn as_utf8(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(&self.buffer)
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub fn write(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub fn write_line_break(&mut self, line_break: LineBreak) {
        self.write_slice(line_break.as_bytes());
    }

    /// Appends the UTF-8 encoding of `ch`.
    pub fn write_unicode_codepoint(&mut self, ch: char) {
        let mut encoded = [0u8; 4];
        self.write_slice(ch.encode_utf8(&mut encoded).as_bytes());
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn sequence_equal(&self, other: &[u8]) -> bool {
        self.buffer == other
    }

    /// `~`, `null`, `Null`, `NULL` and the empty scalar are null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.buffer.is_empty() || NULL_SPELLINGS.contains(&self.buffer.as_slice())
    }

    #[must_use]
    pub fn try_get_bool(&self) -> Option<bool> {
        let span = self.buffer.as_slice();
        if TRUE_SPELLINGS.contains(&span) {
            Some(true)
        } else if FALSE_SPELLINGS.contains(&span) {
            Some(false)
        } else {
            None
        }
    }

    #[must_use]
    pub fn try_get_i32(&self) -> Option<i32> {
        self.try_get_integer()
    }

    #[must_use]
    pub fn try_get_i64(&self) -> Option<i64> {
        self.try_get_integer()
    }

    #[must_use]
    pub fn try_get_u32(&self) -> Option<u32> {
        self.try_get_integer()
    }

    #[must_use]
    pub fn try_get_u64(&self) -> Option<u64> {
        self.try_get_integer()
    }

    #[must_use]
    pub fn try_get_f32(&self) -> Option<f32> {
        self.try_get_float()
    }

    #[must_use]
    pub fn try_get_f64(&self) -> Option<f64> {
        self.try_get_float()
    }

    /// Decimal first, then `0x` hex, `-0x` hex and `0o` octal.
    fn try_get_integer<T>(&self) -> Option<T>
    where
        T: core::str::FromStr + TryFrom<i128>,
    {
        let span = self.buffer.as_slice();
        if let Some(value) = core::str::from_utf8(span)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
        {
            return Some(value);
        }
        if let Some(digits) = strip_prefix(span, b"0x") {
            return parse_hex(digits).and_then(|v| T::try_from(i128::from(v)).ok());
        }
        if let Some(digits) = strip_prefix(span, b"-0x") {
            return parse_hex(digits).and_then(|v| T::try_from(-i128::from(v)).ok());
        }
        parse_octal(span).and_then(|v| T::try_from(i128::from(v)).ok())
    }

    fn try_get_float<T>(&self) -> Option<T>
    where
        T: core::str::FromStr + From<f32>,
    {
        let span = self.buffer.as_slice();
        // `str::parse` also takes `inf` and `NaN` which are not YAML spellings.
        if !span.is_empty() && span.iter().all(|&c| is_number_representation(c)) {
            if let Some(value) = core::str::from_utf8(span)
                .ok()
                .and_then(|s| s.parse::<T>().ok())
            {
                return Some(value);
            }
        }
        if POSITIVE_INFINITY.contains(&span) {
            Some(T::from(f32::INFINITY))
        } else if NEGATIVE_INFINITY.contains(&span) {
            Some(T::from(f32::NEG_INFINITY))
        } else if NOT_A_NUMBER.contains(&span) {
            Some(T::from(f32::NAN))
        } else {
            None
        }
    }
}

/// Strips `prefix` when at least one byte follows it.
fn strip_prefix<'a>(span: &'a [u8], prefix: &[u8]) -> Option<&'a [u8]> {
    if span.len() > prefix.len() && span.starts_with(prefix) {
        Some(&span[prefix.len()..])
    } else {
        None
    }
}

fn parse_hex(digits: &[u8]) -> Option<u64> {
    if digits.len() > 16 || !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let text = core::str::from_utf8(digits).ok()?;
    u64::from_str_radix(text, 16).ok()
}

/// At most 22 octal digits fit in 64 bits, the leading one being `0` or `1`.
fn parse_octal(span: &[u8]) -> Option<u64> {
    let digits = strip_prefix(span, b"0o")?;
    let start = digits.iter().position(|&c| c != b'0');
    let Some(start) = start else {
        return Some(0);
    };
    let digits = &digits[start..];
    if digits.len() > 22 || (digits.len() == 22 && digits[0] > b'1') {
        return None;
    }
    let mut value: u64 = 0;
    for &c in digits {
        if !(b'0'..=b'7').contains(&c) {
            return None;
        }
        value = (value << 3) + u64::from(c - b'0');
    }
    Some(value)
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.buffer))
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar({:?})", String::from_utf8_lossy(&self.buffer))
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::from_bytes(value.as_bytes())
    }
}

/// Free list of scalar buffers.
///
/// A scalar leaves the pool through [`ScalarPool::checkout`] and comes back,
/// cleared, through [`ScalarPool::checkin`]. Ownership moves both ways, so a
/// buffer can never be shared by two live tokens.
#[derive(Debug)]
pub struct ScalarPool {
    free: ExpandBuffer<Scalar>,
    capacity: usize,
}

impl Default for ScalarPool {
    fn default() -> Self {
        ScalarPool::new()
    }
}

impl ScalarPool {
    #[must_use]
    pub fn new() -> Self {
        ScalarPool::with_capacity(DEFAULT_SCALAR_CAPACITY)
    }

    /// Pool whose freshly allocated scalars reserve `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ScalarPool {
            free: ExpandBuffer::default(),
            capacity,
        }
    }

    pub fn checkout(&mut self) -> Scalar {
        self.free
            .try_pop()
            .unwrap_or_else(|| Scalar::with_capacity(self.capacity))
    }

    pub fn checkin(&mut self, mut scalar: Scalar) {
        scalar.clear();
        self.free.push(scalar);
    }

    /// Number of idle scalars ready for reuse.
    #[must_use]
    pub fn available(&self) -> usize {
        self.free.len()
    }
}

#[cfg(test)]
mod test {
    use super::{Scalar, ScalarPool};
    use crate::char_utils::NULL_SPELLINGS;
    use proptest::prelude::*;

    #[test]
    fn null_spellings() {
        for text in ["", "~", "null", "Null", "NULL"] {
            assert!(Scalar::from(text).is_null(), "{text}");
        }
        for text in ["nULL", "nil", " ", "~~"] {
            assert!(!Scalar::from(text).is_null(), "{text}");
        }
    }

    #[test]
    fn bool_spellings() {
        assert_eq!(Scalar::from("true").try_get_bool(), Some(true));
        assert_eq!(Scalar::from("True").try_get_bool(), Some(true));
        assert_eq!(Scalar::from("TRUE").try_get_bool(), Some(true));
        assert_eq!(Scalar::from("false").try_get_bool(), Some(false));
        assert_eq!(Scalar::from("FALSE").try_get_bool(), Some(false));
        assert_eq!(Scalar::from("tRUE").try_get_bool(), None);
        assert_eq!(Scalar::from("yes").try_get_bool(), None);
    }

    #[test]
    fn integers() {
        assert_eq!(Scalar::from("1234").try_get_i32(), Some(1234));
        assert_eq!(Scalar::from("-42").try_get_i64(), Some(-42));
        assert_eq!(Scalar::from("0x1F").try_get_i32(), Some(31));
        assert_eq!(Scalar::from("-0x1F").try_get_i32(), Some(-31));
        assert_eq!(Scalar::from("0o17").try_get_i32(), Some(15));
        assert_eq!(Scalar::from("0o000").try_get_u64(), Some(0));
        assert_eq!(Scalar::from("-0x1").try_get_u32(), None);
        assert_eq!(Scalar::from("12a").try_get_i32(), None);
        assert_eq!(Scalar::from("0x").try_get_i32(), None);
        assert_eq!(Scalar::from("0x-5").try_get_i32(), None);
        assert_eq!(Scalar::from("0o8").try_get_i32(), None);
        assert_eq!(Scalar::from("4294967296").try_get_u32(), None);
        assert_eq!(Scalar::from("-0x80000000").try_get_i32(), Some(i32::MIN));
    }

    #[test]
    fn octal_limits() {
        let max = Scalar::from("0o1777777777777777777777");
        assert_eq!(max.try_get_u64(), Some(u64::MAX));
        assert_eq!(max.try_get_i64(), None);
        assert_eq!(Scalar::from("0o2777777777777777777777").try_get_u64(), None);
        assert_eq!(Scalar::from("0o17777777777").try_get_i32(), Some(i32::MAX));
        assert_eq!(Scalar::from("0o20000000000").try_get_i32(), None);
    }

    #[test]
    fn floats() {
        assert_eq!(Scalar::from("1.5").try_get_f64(), Some(1.5));
        assert_eq!(Scalar::from("-2e3").try_get_f32(), Some(-2000.0));
        assert_eq!(Scalar::from(".inf").try_get_f64(), Some(f64::INFINITY));
        assert_eq!(Scalar::from("+.INF").try_get_f64(), Some(f64::INFINITY));
        assert_eq!(Scalar::from("-.Inf").try_get_f32(), Some(f32::NEG_INFINITY));
        assert!(Scalar::from(".NaN").try_get_f64().map_or(false, f64::is_nan));
        assert_eq!(Scalar::from("inf").try_get_f64(), None);
        assert_eq!(Scalar::from("NaN").try_get_f64(), None);
        assert_eq!(Scalar::from("").try_get_f64(), None);
    }

    #[test]
    fn unicode_codepoints() {
        let mut scalar = Scalar::default();
        scalar.write_unicode_codepoint('a');
        scalar.write_unicode_codepoint('\u{e9}');
        scalar.write_unicode_codepoint('\u{1F600}');
        assert_eq!(scalar.as_utf8(), Ok("a\u{e9}\u{1F600}"));
        assert!(scalar.sequence_equal("a\u{e9}\u{1F600}".as_bytes()));
    }

    #[test]
    fn pool_recycles_cleared_buffers() {
        let mut pool = ScalarPool::with_capacity(8);
        let mut scalar = pool.checkout();
        scalar.write_slice(b"content");
        pool.checkin(scalar);
        assert_eq!(pool.available(), 1);

        let reused = pool.checkout();
        assert!(reused.is_empty());
        assert_eq!(pool.available(), 0);
    }

    proptest! {
        #[test]
        fn decimal_i64_matches_std(value: i64) {
            let scalar = Scalar::from(value.to_string().as_str());
            prop_assert_eq!(scalar.try_get_i64(), Some(value));
        }

        #[test]
        fn hex_u32_matches_std(value: u32) {
            let scalar = Scalar::from(format!("0x{value:x}").as_str());
            prop_assert_eq!(scalar.try_get_u32(), Some(value));
        }

        #[test]
        fn octal_u64_matches_std(value: u64) {
            let scalar = Scalar::from(format!("0o{value:o}").as_str());
            prop_assert_eq!(scalar.try_get_u64(), Some(value));
        }

        #[test]
        fn trailing_bytes_reject_numbers(value: i64, suffix in "[g-np-wyzG-NP-WYZ _:#,]{1,4}") {
            let scalar = Scalar::from(format!("{value}{suffix}").as_str());
            prop_assert_eq!(scalar.try_get_i64(), None);
            prop_assert_eq!(scalar.try_get_i32(), None);
            prop_assert_eq!(scalar.try_get_f64(), None);
        }

        #[test]
        fn only_null_spellings_are_null(text in "\\PC{1,8}") {
            prop_assume!(!NULL_SPELLINGS.contains(&text.as_bytes()));
            prop_assert!(!Scalar::from(text.as_str()).is_null());
        }
    }
}
