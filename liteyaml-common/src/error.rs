use std::string::{String, ToString};
use thiserror::Error;

use crate::{Marker, ParseEventType, ScalarType};

/// Malformed lexical input. Fatal to the current parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({mark})")]
pub struct TokenizerError {
    pub mark: Marker,
    pub message: String,
}

impl TokenizerError {
    pub fn new_str(mark: Marker, message: &str) -> Self {
        TokenizerError {
            mark,
            message: message.to_string(),
        }
    }
}

/// Structural or semantic violation found above the token level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
    #[error("{message} ({mark})")]
    Syntax { mark: Marker, message: String },
    #[error("found undefined alias `*{name}` ({mark})")]
    UndefinedAnchor { mark: Marker, name: String },
    #[error("found undefined tag handle `{handle}` ({mark})")]
    UndefinedTagHandle { mark: Marker, handle: String },
    #[error("Cannot detect a scalar value as {expected} : {event} {value} ({mark})")]
    ScalarConversion {
        mark: Marker,
        expected: &'static str,
        event: ParseEventType,
        value: String,
    },
    #[error("expected {expected} event but found {found} ({mark})")]
    UnexpectedEvent {
        mark: Marker,
        expected: ParseEventType,
        found: ParseEventType,
    },
    #[error("scalar is not valid UTF-8 ({mark})")]
    InvalidUtf8 { mark: Marker },
}

impl ParserError {
    pub fn new_str(mark: Marker, message: &str) -> Self {
        ParserError::Syntax {
            mark,
            message: message.to_string(),
        }
    }

    /// Marker of the offending input, whichever layer raised the error.
    #[must_use]
    pub fn mark(&self) -> Marker {
        match self {
            ParserError::Tokenizer(err) => err.mark,
            ParserError::Syntax { mark, .. }
            | ParserError::UndefinedAnchor { mark, .. }
            | ParserError::UndefinedTagHandle { mark, .. }
            | ParserError::ScalarConversion { mark, .. }
            | ParserError::UnexpectedEvent { mark, .. }
            | ParserError::InvalidUtf8 { mark } => *mark,
        }
    }
}

/// Usage-contract violation at an emitter call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitterError {
    #[error("{message}")]
    InvalidState { message: String },
    #[error("scalar style `{0:?}` is not supported by the emitter")]
    UnsupportedStyle(ScalarType),
    #[error("failed to format a scalar value")]
    Format,
}

impl EmitterError {
    pub fn new_str(message: &str) -> Self {
        EmitterError::InvalidState {
            message: message.to_string(),
        }
    }
}

impl From<core::fmt::Error> for EmitterError {
    fn from(_: core::fmt::Error) -> Self {
        EmitterError::Format
    }
}

/// Failure of the growable stack and queue primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("Cannot pop the empty buffer")]
    EmptyBuffer,
    #[error("EmptyQueue")]
    EmptyQueue,
    #[error("position {position} is out of range for a queue of {len} elements")]
    OutOfRange { position: usize, len: usize },
}

pub type TokenizerResult<T> = Result<T, TokenizerError>;
pub type ParserResult<T> = Result<T, ParserError>;
pub type EmitterResult<T> = Result<T, EmitterError>;
