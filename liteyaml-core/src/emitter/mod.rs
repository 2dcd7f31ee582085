//! Push based YAML writer.
//!
//! The caller drives [`Utf8Emitter`] with `begin_*`/`end_*` pairs and scalar
//! writes. A stack of [`EmitState`]s mirrors the nesting and decides the
//! separators, indentation and line breaks written around every node.

mod analyzer;

pub use analyzer::{analyze, build_literal_scalar, build_quoted_scalar, EmitStringInfo};

use crate::buffer::ExpandBuffer;
use crate::tracing_macros::trace;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display, Write};
use liteyaml_common::{EmitterError, EmitterResult, ScalarType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceStyle {
    #[default]
    Block,
    Flow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MappingStyle {
    #[default]
    Block,
    Flow,
}

/// Requested style of a string scalar. `Any` lets the analyzer decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalarStyle {
    #[default]
    Any,
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitState {
    #[default]
    None,
    BlockSequenceEntry,
    BlockMappingKey,
    BlockMappingValue,
    FlowSequenceEntry,
    FlowMappingKey,
    FlowMappingValue,
}

impl EmitState {
    fn is_flow(self) -> bool {
        matches!(
            self,
            EmitState::FlowSequenceEntry | EmitState::FlowMappingKey | EmitState::FlowMappingValue
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions { indent_width: 2 }
    }
}

struct ByteWriter<'a>(&'a mut Vec<u8>);

impl Write for ByteWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

pub struct Utf8Emitter {
    output: Vec<u8>,
    options: EmitOptions,
    state_stack: ExpandBuffer<EmitState>,
    element_count_stack: ExpandBuffer<usize>,
    /// Tag of each open block collection, written with its first entry.
    collection_tags: ExpandBuffer<Option<String>>,
    tag_stack: ExpandBuffer<String>,
    indent_level: usize,
    element_count: usize,
}

impl Default for Utf8Emitter {
    fn default() -> Self {
        Utf8Emitter::new()
    }
}

impl Utf8Emitter {
    #[must_use]
    pub fn new() -> Self {
        Utf8Emitter::with_options(EmitOptions::default())
    }

    #[must_use]
    pub fn with_options(options: EmitOptions) -> Self {
        let mut state_stack = ExpandBuffer::new(16);
        state_stack.push(EmitState::None);
        Utf8Emitter {
            output: Vec::with_capacity(256),
            options,
            state_stack,
            element_count_stack: ExpandBuffer::new(16),
            collection_tags: ExpandBuffer::new(16),
            tag_stack: ExpandBuffer::new(4),
            indent_level: 0,
            element_count: 0,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.output
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.output
    }

    /// Sets the tag of the next node written.
    pub fn tag(&mut self, value: &str) {
        self.tag_stack.push(value.to_string());
    }

    /// # Errors
    /// [`EmitterError::InvalidState`] when a block sequence is started in a
    /// flow collection or as a mapping key, or a flow sequence as a key.
    pub fn begin_sequence(&mut self, style: SequenceStyle) -> EmitterResult<()> {
        let state = self.current_state();
        match style {
            SequenceStyle::Block => {
                match state {
                    EmitState::BlockSequenceEntry => self.write_block_sequence_entry_header(),
                    EmitState::BlockMappingKey => {
                        return Err(EmitterError::new_str(
                            "To start block-sequence in the mapping key is not supported.",
                        ));
                    }
                    s if s.is_flow() => {
                        return Err(EmitterError::new_str(
                            "To start block-sequence in the flow-sequence is not supported.",
                        ));
                    }
                    _ => {}
                }
                let tag = self.tag_stack.try_pop();
                self.push_state(EmitState::BlockSequenceEntry, tag);
            }
            SequenceStyle::Flow => {
                match state {
                    EmitState::BlockMappingKey | EmitState::FlowMappingKey => {
                        return Err(EmitterError::new_str(
                            "To start flow-sequence in the mapping key is not supported.",
                        ));
                    }
                    EmitState::BlockSequenceEntry => self.write_block_sequence_entry_header(),
                    EmitState::BlockMappingValue => self.output.push(b' '),
                    EmitState::FlowSequenceEntry if !self.is_first_element() => {
                        self.output.extend_from_slice(b", ");
                    }
                    _ => {}
                }
                self.write_pending_tag();
                self.output.push(b'[');
                self.push_state(EmitState::FlowSequenceEntry, None);
            }
        }
        Ok(())
    }

    /// # Errors
    /// [`EmitterError::InvalidState`] when the current node is not a sequence,
    /// or a block sequence ends up as a mapping key.
    pub fn end_sequence(&mut self) -> EmitterResult<()> {
        match self.current_state() {
            EmitState::BlockSequenceEntry => {
                let is_empty = self.is_first_element();
                let tag = self.pop_state();
                let parent = self.current_state();
                if is_empty {
                    let line_break = matches!(
                        parent,
                        EmitState::BlockSequenceEntry | EmitState::BlockMappingValue
                    );
                    self.write_empty_collection(tag, b"[]", line_break);
                }
                match parent {
                    EmitState::BlockSequenceEntry => {
                        if !is_empty {
                            self.decrease_indent();
                        }
                        self.element_count += 1;
                    }
                    EmitState::BlockMappingKey => {
                        return Err(EmitterError::new_str("Complex key is not supported."));
                    }
                    EmitState::BlockMappingValue => {
                        self.replace_current_state(EmitState::BlockMappingKey);
                        self.element_count += 1;
                    }
                    _ => {}
                }
            }
            EmitState::FlowSequenceEntry => {
                self.pop_state();
                let line_break = self.close_flow_in_parent();
                self.output.push(b']');
                if line_break {
                    self.output.push(b'\n');
                }
            }
            state => {
                return Err(EmitterError::new_str(&format!(
                    "Current state is not sequence: {state:?}"
                )));
            }
        }
        Ok(())
    }

    /// # Errors
    /// [`EmitterError::InvalidState`] when a block mapping is started in a
    /// flow collection or any mapping is started as a mapping key.
    pub fn begin_mapping(&mut self, style: MappingStyle) -> EmitterResult<()> {
        let state = self.current_state();
        match style {
            MappingStyle::Block => {
                match state {
                    EmitState::BlockMappingKey => {
                        return Err(EmitterError::new_str(
                            "To start block-mapping in the mapping key is not supported.",
                        ));
                    }
                    s if s.is_flow() => {
                        return Err(EmitterError::new_str(
                            "Cannot start block-mapping in the flow-sequence",
                        ));
                    }
                    EmitState::BlockSequenceEntry => self.write_block_sequence_entry_header(),
                    _ => {}
                }
                let tag = self.tag_stack.try_pop();
                self.push_state(EmitState::BlockMappingKey, tag);
            }
            MappingStyle::Flow => {
                match state {
                    EmitState::BlockMappingKey | EmitState::FlowMappingKey => {
                        return Err(EmitterError::new_str(
                            "To start flow-mapping in the mapping key is not supported.",
                        ));
                    }
                    EmitState::BlockSequenceEntry => self.write_block_sequence_entry_header(),
                    EmitState::BlockMappingValue => self.output.push(b' '),
                    EmitState::FlowSequenceEntry if !self.is_first_element() => {
                        self.output.extend_from_slice(b", ");
                    }
                    _ => {}
                }
                self.write_pending_tag();
                self.output.push(b'{');
                self.push_state(EmitState::FlowMappingKey, None);
            }
        }
        Ok(())
    }

    /// # Errors
    /// [`EmitterError::InvalidState`] when the current node is not a mapping
    /// waiting for its next key.
    pub fn end_mapping(&mut self) -> EmitterResult<()> {
        match self.current_state() {
            EmitState::BlockMappingKey => {
                let is_empty = self.is_first_element();
                let tag = self.pop_state();
                let parent = self.current_state();
                if is_empty {
                    let line_break = matches!(
                        parent,
                        EmitState::BlockSequenceEntry | EmitState::BlockMappingValue
                    );
                    self.write_empty_collection(tag, b"{}", line_break);
                }
                match parent {
                    EmitState::BlockSequenceEntry => {
                        if !is_empty {
                            self.decrease_indent();
                        }
                        self.element_count += 1;
                    }
                    EmitState::BlockMappingValue => {
                        if !is_empty {
                            self.decrease_indent();
                        }
                        self.replace_current_state(EmitState::BlockMappingKey);
                        self.element_count += 1;
                    }
                    _ => {}
                }
            }
            EmitState::FlowMappingKey => {
                let is_empty = self.is_first_element();
                self.pop_state();
                let line_break = self.close_flow_in_parent();
                if !is_empty {
                    self.output.push(b' ');
                }
                self.output.push(b'}');
                if line_break {
                    self.output.push(b'\n');
                }
            }
            state => {
                return Err(EmitterError::new_str(&format!(
                    "Invalid mapping end: {state:?}"
                )));
            }
        }
        Ok(())
    }

    /// # Errors
    /// Never fails; kept fallible like the other writers.
    pub fn write_null(&mut self) -> EmitterResult<()> {
        self.write_scalar(b"null")
    }

    /// # Errors
    /// Never fails; kept fallible like the other writers.
    pub fn write_bool(&mut self, value: bool) -> EmitterResult<()> {
        self.write_scalar(if value { b"true" } else { b"false" })
    }

    /// # Errors
    /// [`EmitterError::Format`] if formatting fails.
    pub fn write_i32(&mut self, value: i32) -> EmitterResult<()> {
        self.write_formatted(11, value)
    }

    /// # Errors
    /// [`EmitterError::Format`] if formatting fails.
    pub fn write_i64(&mut self, value: i64) -> EmitterResult<()> {
        self.write_formatted(20, value)
    }

    /// # Errors
    /// [`EmitterError::Format`] if formatting fails.
    pub fn write_u32(&mut self, value: u32) -> EmitterResult<()> {
        self.write_formatted(10, value)
    }

    /// # Errors
    /// [`EmitterError::Format`] if formatting fails.
    pub fn write_u64(&mut self, value: u64) -> EmitterResult<()> {
        self.write_formatted(20, value)
    }

    /// Infinity and NaN use the `.inf`, `-.inf` and `.nan` spellings.
    ///
    /// # Errors
    /// [`EmitterError::Format`] if formatting fails.
    pub fn write_f32(&mut self, value: f32) -> EmitterResult<()> {
        self.write_f64(f64::from(value))
    }

    /// # Errors
    /// [`EmitterError::Format`] if formatting fails.
    pub fn write_f64(&mut self, value: f64) -> EmitterResult<()> {
        if value.is_nan() {
            self.write_scalar(b".nan")
        } else if value == f64::INFINITY {
            self.write_scalar(b".inf")
        } else if value == f64::NEG_INFINITY {
            self.write_scalar(b"-.inf")
        } else {
            self.write_formatted(24, value)
        }
    }

    /// Writes `value` in `style`; [`ScalarStyle::Any`] picks a style from the
    /// content. Keys and flow entries fall back to double quotes where a
    /// literal block would be picked.
    ///
    /// # Errors
    /// [`EmitterError::UnsupportedStyle`] for [`ScalarStyle::Folded`], and
    /// [`EmitterError::InvalidState`] for a literal scalar in a key or a flow
    /// collection.
    pub fn write_string(&mut self, value: &str, style: ScalarStyle) -> EmitterResult<()> {
        let state = self.current_state();
        let inline_only = state.is_flow() || state == EmitState::BlockMappingKey;
        let style = match style {
            ScalarStyle::Any => match analyze(value).suggest_scalar_style() {
                ScalarStyle::Literal if inline_only => ScalarStyle::DoubleQuoted,
                suggested => suggested,
            },
            other => other,
        };

        match style {
            ScalarStyle::Any | ScalarStyle::Plain => self.write_scalar(value.as_bytes()),
            ScalarStyle::SingleQuoted => self.write_scalar(build_quoted_scalar(value, false).as_bytes()),
            ScalarStyle::DoubleQuoted => self.write_scalar(build_quoted_scalar(value, true).as_bytes()),
            ScalarStyle::Literal => {
                if inline_only {
                    return Err(EmitterError::new_str(&format!(
                        "Literal scalar is not supported in {state:?}"
                    )));
                }
                let indent = (self.indent_level + 1) * self.options.indent_width;
                let mut literal = build_literal_scalar(value, indent, self.options.indent_width);
                if matches!(
                    state,
                    EmitState::BlockMappingValue | EmitState::BlockSequenceEntry
                ) {
                    literal.pop();
                }
                self.write_scalar(literal.as_bytes())
            }
            ScalarStyle::Folded => Err(EmitterError::UnsupportedStyle(ScalarType::Folded)),
        }
    }

    /// Writes already formatted scalar bytes as a node.
    ///
    /// # Errors
    /// Never fails; kept fallible like the other writers.
    pub fn write_scalar(&mut self, value: &[u8]) -> EmitterResult<()> {
        self.output.reserve(self.max_scalar_len(value.len()));
        self.begin_scalar();
        self.output.extend_from_slice(value);
        self.end_scalar();
        Ok(())
    }

    /// Appends `value` with no state change, optionally indented and
    /// followed by a line break.
    pub fn write_raw(&mut self, value: &[u8], indent: bool, line_break: bool) {
        if indent {
            self.write_indent();
        }
        self.output.extend_from_slice(value);
        if line_break {
            self.output.push(b'\n');
        }
    }

    fn write_formatted(&mut self, max_len: usize, value: impl Display) -> EmitterResult<()> {
        self.output.reserve(self.max_scalar_len(max_len));
        self.begin_scalar();
        write!(ByteWriter(&mut self.output), "{value}")?;
        self.end_scalar();
        Ok(())
    }

    fn begin_scalar(&mut self) {
        match self.current_state() {
            EmitState::BlockSequenceEntry => {
                self.write_block_sequence_entry_header();
                self.write_pending_tag();
            }
            EmitState::BlockMappingKey => {
                if self.is_first_element() {
                    let collection_tag = self.take_collection_tag();
                    match self.previous_state() {
                        EmitState::BlockSequenceEntry => {
                            self.increase_indent();
                            if let Some(tag) = collection_tag {
                                self.output.extend_from_slice(tag.as_bytes());
                                self.output.push(b'\n');
                                self.write_indent();
                            } else {
                                // the `- ` header already fills the first columns
                                let width = self.options.indent_width.saturating_sub(2);
                                self.write_spaces(width);
                            }
                        }
                        EmitState::BlockMappingValue => {
                            self.increase_indent();
                            if let Some(tag) = collection_tag {
                                self.output.push(b' ');
                                self.output.extend_from_slice(tag.as_bytes());
                            }
                            self.output.push(b'\n');
                            self.write_indent();
                        }
                        _ => {
                            self.write_indent();
                            if let Some(tag) = collection_tag {
                                self.output.extend_from_slice(tag.as_bytes());
                                self.output.push(b'\n');
                                self.write_indent();
                            }
                        }
                    }
                } else {
                    self.write_indent();
                }
                self.write_pending_tag();
            }
            EmitState::FlowSequenceEntry => {
                if !self.is_first_element() {
                    self.output.extend_from_slice(b", ");
                }
                self.write_pending_tag();
            }
            EmitState::FlowMappingKey => {
                if self.is_first_element() {
                    self.output.push(b' ');
                } else {
                    self.output.extend_from_slice(b", ");
                }
                self.write_pending_tag();
            }
            EmitState::BlockMappingValue => {
                self.output.push(b' ');
                self.write_pending_tag();
            }
            EmitState::FlowMappingValue | EmitState::None => {
                self.write_pending_tag();
            }
        }
    }

    fn end_scalar(&mut self) {
        match self.current_state() {
            EmitState::BlockSequenceEntry => {
                self.output.push(b'\n');
                self.element_count += 1;
            }
            EmitState::BlockMappingKey => {
                // the separating space comes with a value on the same line
                self.output.push(b':');
                self.replace_current_state(EmitState::BlockMappingValue);
            }
            EmitState::BlockMappingValue => {
                self.output.push(b'\n');
                self.replace_current_state(EmitState::BlockMappingKey);
                self.element_count += 1;
            }
            EmitState::FlowSequenceEntry => {
                self.element_count += 1;
            }
            EmitState::FlowMappingKey => {
                self.output.extend_from_slice(b": ");
                self.replace_current_state(EmitState::FlowMappingValue);
            }
            EmitState::FlowMappingValue => {
                self.replace_current_state(EmitState::FlowMappingKey);
                self.element_count += 1;
            }
            EmitState::None => {}
        }
    }

    fn write_block_sequence_entry_header(&mut self) {
        if self.is_first_element() {
            let collection_tag = self.take_collection_tag();
            match self.previous_state() {
                EmitState::BlockSequenceEntry => {
                    if let Some(tag) = collection_tag {
                        self.output.extend_from_slice(tag.as_bytes());
                    }
                    self.output.push(b'\n');
                    self.increase_indent();
                }
                EmitState::BlockMappingValue => {
                    if let Some(tag) = collection_tag {
                        self.output.push(b' ');
                        self.output.extend_from_slice(tag.as_bytes());
                    }
                    self.output.push(b'\n');
                }
                _ => {
                    if let Some(tag) = collection_tag {
                        self.output.extend_from_slice(tag.as_bytes());
                        self.output.push(b'\n');
                    }
                }
            }
        }
        self.write_indent();
        self.output.extend_from_slice(b"- ");
    }

    /// Writes `[]` or `{}` for a block collection that got no entries.
    fn write_empty_collection(&mut self, tag: Option<String>, marker: &[u8], line_break: bool) {
        if self.current_state() == EmitState::BlockMappingValue {
            self.output.push(b' ');
        }
        if let Some(tag) = tag {
            self.output.extend_from_slice(tag.as_bytes());
            self.output.push(b' ');
        }
        self.write_raw(marker, false, line_break);
    }

    /// Moves the parent past a finished flow collection. Returns whether a
    /// line break must follow the closing bracket.
    fn close_flow_in_parent(&mut self) -> bool {
        match self.current_state() {
            EmitState::BlockSequenceEntry => {
                self.element_count += 1;
                true
            }
            EmitState::BlockMappingValue => {
                self.replace_current_state(EmitState::BlockMappingKey);
                self.element_count += 1;
                true
            }
            EmitState::FlowSequenceEntry => {
                self.element_count += 1;
                false
            }
            EmitState::FlowMappingValue => {
                self.replace_current_state(EmitState::FlowMappingKey);
                self.element_count += 1;
                false
            }
            _ => false,
        }
    }

    fn write_pending_tag(&mut self) {
        if let Some(tag) = self.tag_stack.try_pop() {
            self.output.extend_from_slice(tag.as_bytes());
            self.output.push(b' ');
        }
    }

    fn take_collection_tag(&mut self) -> Option<String> {
        self.collection_tags.peek_mut().and_then(Option::take)
    }

    fn write_indent(&mut self) {
        let width = self.indent_level * self.options.indent_width;
        self.write_spaces(width);
    }

    fn write_spaces(&mut self, count: usize) {
        self.output.resize(self.output.len() + count, b' ');
    }

    fn max_scalar_len(&self, len: usize) -> usize {
        let tag_len = self.tag_stack.peek().map_or(0, String::len);
        len + (self.indent_level + 1) * self.options.indent_width + tag_len + 3
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn is_first_element(&self) -> bool {
        self.element_count == 0
    }

    fn current_state(&self) -> EmitState {
        self.state_stack.peek().copied().unwrap_or_default()
    }

    fn previous_state(&self) -> EmitState {
        let len = self.state_stack.len();
        if len < 2 {
            return EmitState::None;
        }
        self.state_stack.get(len - 2).copied().unwrap_or_default()
    }

    fn push_state(&mut self, state: EmitState, tag: Option<String>) {
        trace!("emitter push {:?} (depth {})", state, self.state_stack.len());
        self.state_stack.push(state);
        self.element_count_stack.push(self.element_count);
        self.collection_tags.push(tag);
        self.element_count = 0;
    }

    /// Returns the collection tag that was never written.
    #[cfg_attr(not(any(test, feature = "tracing")), allow(unused_variables))]
    fn pop_state(&mut self) -> Option<String> {
        let state = self.state_stack.try_pop();
        trace!("emitter pop {:?} (depth {})", state, self.state_stack.len());
        self.element_count = self.element_count_stack.try_pop().unwrap_or(0);
        self.collection_tags.try_pop().flatten()
    }

    fn replace_current_state(&mut self, state: EmitState) {
        if let Some(top) = self.state_stack.peek_mut() {
            *top = state;
        }
    }
}

#[cfg(test)]
mod test {
    use super::{EmitOptions, MappingStyle, ScalarStyle, SequenceStyle, Utf8Emitter};
    use liteyaml_common::{EmitterError, ScalarType};

    fn output(emitter: &Utf8Emitter) -> &str {
        core::str::from_utf8(emitter.as_bytes()).unwrap()
    }

    #[test]
    fn block_sequence() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.write_i32(100).unwrap();
        emitter.write_string("hello", ScalarStyle::Any).unwrap();
        emitter.write_bool(true).unwrap();
        emitter.end_sequence().unwrap();
        assert_eq!(output(&emitter), "- 100\n- hello\n- true\n");
    }

    #[test]
    fn nested_block_sequences() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.write_i32(1).unwrap();
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.write_i32(2).unwrap();
        emitter.write_i32(3).unwrap();
        emitter.end_sequence().unwrap();
        emitter.write_i32(4).unwrap();
        emitter.end_sequence().unwrap();
        assert_eq!(output(&emitter), "- 1\n- \n  - 2\n  - 3\n- 4\n");
    }

    #[test]
    fn block_mapping_with_nested_collections() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.write_string("a", ScalarStyle::Any).unwrap();
        emitter.write_i64(-1).unwrap();
        emitter.write_string("b", ScalarStyle::Any).unwrap();
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.write_string("c", ScalarStyle::Any).unwrap();
        emitter.write_null().unwrap();
        emitter.end_mapping().unwrap();
        emitter.write_string("d", ScalarStyle::Any).unwrap();
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.write_u32(7).unwrap();
        emitter.end_sequence().unwrap();
        emitter.end_mapping().unwrap();
        assert_eq!(
            output(&emitter),
            "a: -1\nb:\n  c: null\nd:\n- 7\n"
        );
    }

    #[test]
    fn nested_values_leave_no_trailing_space() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.write_string("outer", ScalarStyle::Any).unwrap();
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.write_string("inner", ScalarStyle::Any).unwrap();
        emitter.tag("!list");
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.write_i32(1).unwrap();
        emitter.end_sequence().unwrap();
        emitter.write_string("empty", ScalarStyle::Any).unwrap();
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.end_mapping().unwrap();
        emitter.end_mapping().unwrap();
        emitter.write_string("flow", ScalarStyle::Any).unwrap();
        emitter.begin_sequence(SequenceStyle::Flow).unwrap();
        emitter.end_sequence().unwrap();
        emitter.end_mapping().unwrap();

        let text = output(&emitter);
        assert_eq!(
            text,
            "outer:\n  inner: !list\n  - 1\n  empty: {}\nflow: []\n"
        );
        assert!(text.lines().all(|line| !line.ends_with(' ')), "{text:?}");
    }

    #[test]
    fn mapping_in_sequence() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.write_string("x", ScalarStyle::Any).unwrap();
        emitter.write_i32(1).unwrap();
        emitter.write_string("y", ScalarStyle::Any).unwrap();
        emitter.write_i32(2).unwrap();
        emitter.end_mapping().unwrap();
        emitter.write_i32(3).unwrap();
        emitter.end_sequence().unwrap();
        assert_eq!(output(&emitter), "- x: 1\n  y: 2\n- 3\n");
    }

    #[test]
    fn flow_collections() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.write_string("seq", ScalarStyle::Any).unwrap();
        emitter.begin_sequence(SequenceStyle::Flow).unwrap();
        emitter.write_i32(1).unwrap();
        emitter.begin_mapping(MappingStyle::Flow).unwrap();
        emitter.write_string("a", ScalarStyle::Any).unwrap();
        emitter.write_i32(2).unwrap();
        emitter.write_string("b", ScalarStyle::Any).unwrap();
        emitter.begin_sequence(SequenceStyle::Flow).unwrap();
        emitter.end_sequence().unwrap();
        emitter.end_mapping().unwrap();
        emitter.end_sequence().unwrap();
        emitter.write_string("map", ScalarStyle::Any).unwrap();
        emitter.begin_mapping(MappingStyle::Flow).unwrap();
        emitter.end_mapping().unwrap();
        emitter.end_mapping().unwrap();
        assert_eq!(
            output(&emitter),
            "seq: [1, { a: 2, b: [] }]\nmap: {}\n"
        );
    }

    #[test]
    fn empty_block_collections() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.write_string("a", ScalarStyle::Any).unwrap();
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.end_sequence().unwrap();
        emitter.write_string("b", ScalarStyle::Any).unwrap();
        emitter.tag("!set");
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.end_mapping().unwrap();
        emitter.end_mapping().unwrap();
        assert_eq!(output(&emitter), "a: []\nb: !set {}\n");

        let mut emitter = Utf8Emitter::new();
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.end_sequence().unwrap();
        assert_eq!(output(&emitter), "[]");
    }

    #[test]
    fn tags() {
        let mut emitter = Utf8Emitter::new();
        emitter.tag("!tag1");
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.write_string("a", ScalarStyle::Any).unwrap();
        emitter.tag("!!int");
        emitter.write_string("100", ScalarStyle::Plain).unwrap();
        emitter.write_string("b", ScalarStyle::Any).unwrap();
        emitter.tag("!list");
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.write_i32(1).unwrap();
        emitter.end_sequence().unwrap();
        emitter.write_string("c", ScalarStyle::Any).unwrap();
        emitter.tag("!pair");
        emitter.begin_sequence(SequenceStyle::Flow).unwrap();
        emitter.write_i32(2).unwrap();
        emitter.end_sequence().unwrap();
        emitter.end_mapping().unwrap();
        assert_eq!(
            output(&emitter),
            "!tag1\na: !!int 100\nb: !list\n- 1\nc: !pair [2]\n"
        );
    }

    #[test]
    fn tagged_mapping_in_sequence() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.tag("!point");
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.write_string("x", ScalarStyle::Any).unwrap();
        emitter.write_i32(1).unwrap();
        emitter.end_mapping().unwrap();
        emitter.end_sequence().unwrap();
        assert_eq!(output(&emitter), "- !point\n  x: 1\n");
    }

    #[test]
    fn string_styles() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.write_string("null", ScalarStyle::Any).unwrap();
        emitter.write_string("a: b", ScalarStyle::Any).unwrap();
        emitter.write_string("it's", ScalarStyle::SingleQuoted).unwrap();
        emitter.write_string("x", ScalarStyle::DoubleQuoted).unwrap();
        emitter.write_string("", ScalarStyle::Any).unwrap();
        emitter.end_sequence().unwrap();
        assert_eq!(
            output(&emitter),
            "- \"null\"\n- \"a: b\"\n- 'it''s'\n- \"x\"\n- \"\"\n"
        );
    }

    #[test]
    fn literal_strings() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.write_string("text", ScalarStyle::Any).unwrap();
        emitter.write_string("line1\nline2\n", ScalarStyle::Any).unwrap();
        emitter.write_string("list", ScalarStyle::Any).unwrap();
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.write_string("a\nb", ScalarStyle::Literal).unwrap();
        emitter.end_sequence().unwrap();
        emitter.end_mapping().unwrap();
        assert_eq!(
            output(&emitter),
            "text: |\n  line1\n  line2\nlist:\n- |-\n  a\n  b\n"
        );
    }

    #[test]
    fn multi_line_in_flow_is_quoted() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_sequence(SequenceStyle::Flow).unwrap();
        emitter.write_string("a\nb", ScalarStyle::Any).unwrap();
        assert!(matches!(
            emitter.write_string("a\nb", ScalarStyle::Literal),
            Err(EmitterError::InvalidState { .. })
        ));
        emitter.end_sequence().unwrap();
        assert_eq!(output(&emitter), "[\"a\\nb\"]");
    }

    #[test]
    fn floats() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_sequence(SequenceStyle::Flow).unwrap();
        emitter.write_f64(1.5).unwrap();
        emitter.write_f32(f32::INFINITY).unwrap();
        emitter.write_f64(f64::NEG_INFINITY).unwrap();
        emitter.write_f64(f64::NAN).unwrap();
        emitter.write_u64(u64::MAX).unwrap();
        emitter.end_sequence().unwrap();
        assert_eq!(
            output(&emitter),
            "[1.5, .inf, -.inf, .nan, 18446744073709551615]"
        );
    }

    #[test]
    fn indent_width_option() {
        let mut emitter = Utf8Emitter::with_options(EmitOptions { indent_width: 4 });
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.write_string("a", ScalarStyle::Any).unwrap();
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        emitter.write_string("b", ScalarStyle::Any).unwrap();
        emitter.write_i32(1).unwrap();
        emitter.end_mapping().unwrap();
        emitter.end_mapping().unwrap();
        assert_eq!(output(&emitter), "a:\n    b: 1\n");
    }

    #[test]
    fn raw_output() {
        let mut emitter = Utf8Emitter::new();
        emitter.write_raw(b"---", false, true);
        emitter.begin_sequence(SequenceStyle::Block).unwrap();
        emitter.write_i32(1).unwrap();
        emitter.end_sequence().unwrap();
        assert_eq!(emitter.into_inner(), b"---\n- 1\n".to_vec());
    }

    #[test]
    fn usage_errors() {
        let mut emitter = Utf8Emitter::new();
        emitter.begin_sequence(SequenceStyle::Flow).unwrap();
        assert!(emitter.begin_sequence(SequenceStyle::Block).is_err());
        assert!(emitter.begin_mapping(MappingStyle::Block).is_err());
        assert!(emitter.end_mapping().is_err());
        emitter.end_sequence().unwrap();

        let mut emitter = Utf8Emitter::new();
        emitter.begin_mapping(MappingStyle::Block).unwrap();
        match emitter.begin_sequence(SequenceStyle::Block) {
            Err(EmitterError::InvalidState { message }) => assert_eq!(
                message,
                "To start block-sequence in the mapping key is not supported."
            ),
            other => panic!("unexpected {other:?}"),
        }
        assert!(emitter.end_sequence().is_err());
        assert_eq!(
            emitter.write_string("x", ScalarStyle::Folded),
            Err(EmitterError::UnsupportedStyle(ScalarType::Folded))
        );
    }
}
