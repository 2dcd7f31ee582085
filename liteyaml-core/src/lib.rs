//! YAML over raw UTF-8 bytes: a streaming [`Tokenizer`], a pull [`Parser`]
//! producing structural events, and a push [`Utf8Emitter`].
//!
//! ```
//! use liteyaml_core::Parser;
//! use liteyaml_common::ParseEventType;
//!
//! let mut parser = Parser::new(b"key: 42");
//! parser.skip_after(ParseEventType::MappingStart).unwrap();
//! assert_eq!(parser.read_scalar_as_string().unwrap().as_deref(), Some("key"));
//! assert_eq!(parser.read_scalar_as_i32().unwrap(), 42);
//! ```
#![cfg_attr(not(test), no_std)]
extern crate alloc;

mod buffer;
mod char_utils;
mod emitter;
mod parser;
mod scalar;
mod tracing_macros;

pub mod tokenizer;

pub use buffer::{ExpandBuffer, InsertionQueue};
pub use emitter::{
    analyze, build_literal_scalar, build_quoted_scalar, EmitOptions, EmitState, EmitStringInfo,
    MappingStyle, ScalarStyle, SequenceStyle, Utf8Emitter,
};
pub use parser::Parser;
pub use scalar::{LineBreak, Scalar, ScalarPool};
pub use tokenizer::{Token, TokenType, Tokenizer};
