extern crate core;

mod error;

pub use error::{
    BufferError, EmitterError, EmitterResult, ParserError, ParserResult, TokenizerError,
    TokenizerResult,
};
use std::fmt::{Display, Formatter};
use std::string::String;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ScalarType {
    /// Unquoted string type like:
    /// ```yaml
    ///   multiline
    ///   string
    /// ```
    #[default]
    Plain,
    /// Folded string type like:
    /// ```yaml
    ///   >
    ///     folded
    ///     string
    /// ```
    Folded,
    /// Literal string type like:
    /// ```yaml
    ///   |
    ///     literal
    ///     string
    /// ```
    Literal,
    /// Single quote string which permits any symbol inside
    /// E.g. :
    /// ```yaml
    /// ' This is a quoted string
    ///    with ''quoted'' string within.'
    /// ```
    SingleQuote,
    /// Double quote string with backslash escapes
    /// E.g. :
    /// ```yaml
    /// "This is a quoted string
    ///    with \"double quoted\" string within."
    /// ```
    DoubleQuote,
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarType::Plain => write!(f, ":"),
            ScalarType::Folded => write!(f, ">"),
            ScalarType::Literal => write!(f, "|"),
            ScalarType::SingleQuote => write!(f, "'"),
            ScalarType::DoubleQuote => write!(f, "\""),
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum ChompIndicator {
    /// `-` final line break and any trailing empty lines are excluded from the scalar’s content
    Strip,
    ///  ` ` final line break character is preserved in the scalar’s content
    #[default]
    Clip,
    /// `+` final line break and any trailing empty lines are considered to be part of the scalar’s content
    Keep,
}

/// Position of the lexer inside the input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Marker {
    /// index in bytes of the input.
    pub pos: usize,
    /// Line of mark. One indexed.
    pub line: usize,
    /// Column of mark. Zero indexed.
    pub col: usize,
}

impl Marker {
    #[must_use]
    pub fn new(pos: usize, line: usize, col: usize) -> Self {
        Marker { pos, line, col }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Marker {
            pos: 0,
            line: 1,
            col: 0,
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line: {}, Col: {}, Idx: {}", self.line, self.col, self.pos)
    }
}

/// Kind of the event a parser cursor currently points at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ParseEventType {
    /// No event was read yet.
    #[default]
    Nothing,
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    Alias,
    Scalar,
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
}

impl Display for ParseEventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ParseEventType::Nothing => "Nothing",
            ParseEventType::StreamStart => "StreamStart",
            ParseEventType::StreamEnd => "StreamEnd",
            ParseEventType::DocumentStart => "DocumentStart",
            ParseEventType::DocumentEnd => "DocumentEnd",
            ParseEventType::Alias => "Alias",
            ParseEventType::Scalar => "Scalar",
            ParseEventType::SequenceStart => "SequenceStart",
            ParseEventType::SequenceEnd => "SequenceEnd",
            ParseEventType::MappingStart => "MappingStart",
            ParseEventType::MappingEnd => "MappingEnd",
        };
        f.write_str(name)
    }
}

/// A YAML tag as written in the input, e.g. `!!str` is handle `!!` and suffix `str`.
#[derive(Clone, PartialEq, Debug, Eq, Ord, PartialOrd, Hash, Default)]
pub struct Tag {
    /// Handle of the tag (`!` included).
    pub handle: String,
    /// The suffix of the tag.
    pub suffix: String,
}

impl Tag {
    #[must_use]
    pub fn new(handle: impl Into<String>, suffix: impl Into<String>) -> Self {
        Tag {
            handle: handle.into(),
            suffix: suffix.into(),
        }
    }

    /// Compares `handle` followed by `suffix` against a flat string, regardless
    /// of where the split between the two falls.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        value.len() == self.handle.len() + self.suffix.len()
            && value.starts_with(self.handle.as_str())
            && value.ends_with(self.suffix.as_str())
    }

    /// Returns whether the tag uses the secondary handle of the YAML core schema (`!!str`, `!!int`, ...).
    #[must_use]
    pub fn is_yaml_core_schema(&self) -> bool {
        self.handle == "!!"
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.handle, self.suffix)
    }
}

/// Name given to a node with `&name` and referred to with `*name`.
#[derive(Clone, PartialEq, Debug, Eq, Hash, Default)]
pub struct Anchor {
    pub name: String,
}

impl Anchor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Anchor { name: name.into() }
    }
}

impl Display for Anchor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Content of a `%YAML major.minor` directive.
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub struct VersionDirective {
    pub major: u32,
    pub minor: u32,
}

#[cfg(test)]
mod test {
    use crate::{Marker, Tag};

    #[test]
    fn tag_matches_flat_string() {
        let tag = Tag::new("!", "something");

        assert!(tag.matches("!something"));
        assert!(!tag.matches("!somethinga"));
        assert!(!tag.matches("!somothing"));
        assert_eq!(tag, "!something");
    }

    #[test]
    fn tag_matches_independent_of_split() {
        let tag = Tag::new("!u!", "29");
        assert!(tag.matches("!u!29"));
        assert_eq!(tag.to_string(), "!u!29");
    }

    #[test]
    fn marker_display() {
        let mark = Marker::new(12, 3, 4);
        assert_eq!(mark.to_string(), "Line: 3, Col: 4, Idx: 12");
    }
}
