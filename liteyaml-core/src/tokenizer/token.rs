use crate::scalar::Scalar;
use core::fmt::{Display, Formatter};
use liteyaml_common::{Marker, ScalarType, Tag, VersionDirective};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenType {
    StreamStart,
    StreamEnd,
    /// `%YAML major.minor`
    VersionDirective(VersionDirective),
    /// `%TAG handle prefix`, or an empty tag for a directive with an unknown name.
    TagDirective(Tag),
    DocumentStart,
    DocumentEnd,
    BlockSequenceStart,
    BlockMappingStart,
    BlockEnd,
    FlowSequenceStart,
    FlowSequenceEnd,
    FlowMappingStart,
    FlowMappingEnd,
    BlockEntryStart,
    FlowEntryStart,
    KeyStart,
    ValueStart,
    Alias(Scalar),
    Anchor(Scalar),
    Tag(Tag),
    PlainScalar(Scalar),
    SingleQuotedScalar(Scalar),
    DoubleQuotedScalar(Scalar),
    LiteralScalar(Scalar),
    FoldedScalar(Scalar),
}

impl TokenType {
    /// Style of a scalar token, `None` for every other kind.
    #[must_use]
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            TokenType::PlainScalar(_) => Some(ScalarType::Plain),
            TokenType::SingleQuotedScalar(_) => Some(ScalarType::SingleQuote),
            TokenType::DoubleQuotedScalar(_) => Some(ScalarType::DoubleQuote),
            TokenType::LiteralScalar(_) => Some(ScalarType::Literal),
            TokenType::FoldedScalar(_) => Some(ScalarType::Folded),
            _ => None,
        }
    }

    #[must_use]
    pub fn scalar(&self) -> Option<&Scalar> {
        match self {
            TokenType::Alias(s)
            | TokenType::Anchor(s)
            | TokenType::PlainScalar(s)
            | TokenType::SingleQuotedScalar(s)
            | TokenType::DoubleQuotedScalar(s)
            | TokenType::LiteralScalar(s)
            | TokenType::FoldedScalar(s) => Some(s),
            _ => None,
        }
    }

    /// Moves the pooled scalar out of the token, if it carries one.
    #[must_use]
    pub fn into_scalar(self) -> Option<Scalar> {
        match self {
            TokenType::Alias(s)
            | TokenType::Anchor(s)
            | TokenType::PlainScalar(s)
            | TokenType::SingleQuotedScalar(s)
            | TokenType::DoubleQuotedScalar(s)
            | TokenType::LiteralScalar(s)
            | TokenType::FoldedScalar(s) => Some(s),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TokenType::StreamStart => "StreamStart",
            TokenType::StreamEnd => "StreamEnd",
            TokenType::VersionDirective(_) => "VersionDirective",
            TokenType::TagDirective(_) => "TagDirective",
            TokenType::DocumentStart => "DocumentStart",
            TokenType::DocumentEnd => "DocumentEnd",
            TokenType::BlockSequenceStart => "BlockSequenceStart",
            TokenType::BlockMappingStart => "BlockMappingStart",
            TokenType::BlockEnd => "BlockEnd",
            TokenType::FlowSequenceStart => "FlowSequenceStart",
            TokenType::FlowSequenceEnd => "FlowSequenceEnd",
            TokenType::FlowMappingStart => "FlowMappingStart",
            TokenType::FlowMappingEnd => "FlowMappingEnd",
            TokenType::BlockEntryStart => "BlockEntryStart",
            TokenType::FlowEntryStart => "FlowEntryStart",
            TokenType::KeyStart => "KeyStart",
            TokenType::ValueStart => "ValueStart",
            TokenType::Alias(_) => "Alias",
            TokenType::Anchor(_) => "Anchor",
            TokenType::Tag(_) => "Tag",
            TokenType::PlainScalar(_) => "PlainScalar",
            TokenType::SingleQuotedScalar(_) => "SingleQuotedScalar",
            TokenType::DoubleQuotedScalar(_) => "DoubleQuotedScalar",
            TokenType::LiteralScalar(_) => "LiteralScalar",
            TokenType::FoldedScalar(_) => "FoldedScalar",
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            TokenType::VersionDirective(v) => write!(f, "VersionDirective({}.{})", v.major, v.minor),
            TokenType::TagDirective(tag) | TokenType::Tag(tag) => {
                write!(f, "{}({} {})", self.name(), tag.handle, tag.suffix)
            }
            other => match other.scalar() {
                Some(scalar) => write!(f, "{}({scalar})", other.name()),
                None => f.write_str(other.name()),
            },
        }
    }
}

/// A token together with the position where it starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub mark: Marker,
}

impl Token {
    #[must_use]
    pub fn new(token_type: TokenType, mark: Marker) -> Self {
        Token { token_type, mark }
    }
}
