//! Pull parser turning tokens into parse events.
//!
//! The parser is a cursor: [`Parser::read`] moves it to the next event and
//! the accessors describe the event it currently points at. Scalar content
//! stays in pooled buffers and goes back to the tokenizer's pool on the
//! following `read`.

mod typed_access;

use crate::buffer::ExpandBuffer;
use crate::scalar::{Scalar, ScalarPool};
use crate::tokenizer::{Token, TokenType, Tokenizer};
use crate::tracing_macros::trace;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;
use liteyaml_common::{
    Anchor, Marker, ParseEventType, ParserError, ParserResult, ScalarType, Tag, VersionDirective,
};

const DEFAULT_TAG_HANDLES: [(&str, &str); 2] = [("!", "!"), ("!!", "tag:yaml.org,2002:")];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum ParseState {
    #[default]
    StreamStart,
    ImplicitDocumentStart,
    DocumentStart,
    DocumentContent,
    DocumentEnd,
    BlockNode,
    BlockSequenceFirstEntry,
    BlockSequenceEntry,
    IndentlessSequenceEntry,
    BlockMappingFirstKey,
    BlockMappingKey,
    BlockMappingValue,
    FlowSequenceFirstEntry,
    FlowSequenceEntry,
    FlowSequenceEntryMappingKey,
    FlowSequenceEntryMappingValue,
    FlowSequenceEntryMappingEnd,
    FlowMappingFirstKey,
    FlowMappingKey,
    FlowMappingValue,
    FlowMappingEmptyValue,
    End,
}

pub struct Parser<'input> {
    tokenizer: Tokenizer<'input>,
    token_consumed: bool,

    state: ParseState,
    states: ExpandBuffer<ParseState>,

    current_event: ParseEventType,
    current_mark: Marker,
    current_scalar: Option<Scalar>,
    current_scalar_style: Option<ScalarType>,
    current_tag: Option<Tag>,
    current_anchor: Option<Anchor>,
    current_flow: bool,
    current_explicit: bool,
    alias_mark: Option<Marker>,

    anchors: HashMap<String, Marker>,
    tag_directives: Vec<Tag>,
    version: Option<VersionDirective>,
}

impl<'input> Parser<'input> {
    #[must_use]
    pub fn new(input: &'input [u8]) -> Self {
        Parser::from_tokenizer(Tokenizer::new(input))
    }

    #[must_use]
    pub fn with_pool(input: &'input [u8], pool: ScalarPool) -> Self {
        Parser::from_tokenizer(Tokenizer::with_pool(input, pool))
    }

    #[must_use]
    pub fn from_tokenizer(tokenizer: Tokenizer<'input>) -> Self {
        Parser {
            tokenizer,
            token_consumed: true,

            state: ParseState::StreamStart,
            states: ExpandBuffer::new(16),

            current_event: ParseEventType::Nothing,
            current_mark: Marker::default(),
            current_scalar: None,
            current_scalar_style: None,
            current_tag: None,
            current_anchor: None,
            current_flow: false,
            current_explicit: false,
            alias_mark: None,

            anchors: HashMap::new(),
            tag_directives: Vec::new(),
            version: None,
        }
    }

    /// Gives back the scalar pool so a later parse can reuse its buffers.
    #[must_use]
    pub fn into_pool(mut self) -> ScalarPool {
        if let Some(scalar) = self.current_scalar.take() {
            self.tokenizer.return_scalar(scalar);
        }
        self.tokenizer.into_pool()
    }

    #[must_use]
    pub fn current_event_type(&self) -> ParseEventType {
        self.current_event
    }

    #[must_use]
    pub fn current_mark(&self) -> Marker {
        self.current_mark
    }

    /// Style of the current scalar, `None` unless the cursor is on a scalar.
    #[must_use]
    pub fn current_scalar_style(&self) -> Option<ScalarType> {
        self.current_scalar_style
    }

    /// Whether the current collection start or end uses flow style.
    #[must_use]
    pub fn is_flow_collection(&self) -> bool {
        self.current_flow
    }

    /// Whether the current document start or end was written out as `---`
    /// or `...`.
    #[must_use]
    pub fn is_explicit_document_marker(&self) -> bool {
        self.current_explicit
    }

    /// `%YAML` directive of the current document.
    #[must_use]
    pub fn version_directive(&self) -> Option<VersionDirective> {
        self.version
    }

    /// Tag attached to the current node as written in the input.
    #[must_use]
    pub fn try_get_current_tag(&self) -> Option<&Tag> {
        self.current_tag.as_ref()
    }

    /// Anchor defined on the current node, or the name an alias refers to.
    #[must_use]
    pub fn try_get_current_anchor(&self) -> Option<&Anchor> {
        self.current_anchor.as_ref()
    }

    /// Position of the anchor definition the current alias points back to.
    #[must_use]
    pub fn alias_definition_mark(&self) -> Option<Marker> {
        self.alias_mark
    }

    /// Current tag with its handle expanded through `%TAG` directives and
    /// the default `!` and `!!` handles.
    #[must_use]
    pub fn try_get_resolved_tag(&self) -> Option<String> {
        let tag = self.current_tag.as_ref()?;
        if tag.handle.is_empty() {
            return Some(tag.suffix.clone());
        }
        let prefix = self.tag_prefix(&tag.handle)?;
        let mut resolved = String::with_capacity(prefix.len() + tag.suffix.len());
        resolved.push_str(prefix);
        resolved.push_str(&tag.suffix);
        Some(resolved)
    }

    /// Advances to the next event.
    ///
    /// Returns `Ok(false)` once the stream end event was already produced.
    ///
    /// # Errors
    /// Returns [`ParserError`] on malformed input; the parser is finished
    /// afterwards.
    pub fn read(&mut self) -> ParserResult<bool> {
        if self.state == ParseState::End {
            return Ok(false);
        }

        self.reset_current();
        if let Err(err) = self.state_machine() {
            self.state = ParseState::End;
            return Err(err);
        }
        trace!("event {} at {} (next {:?})", self.current_event, self.current_mark, self.state);
        Ok(true)
    }

    /// Reads only if the cursor is on `event`.
    ///
    /// # Errors
    /// [`ParserError::UnexpectedEvent`] when the current event differs.
    pub fn read_with_verify(&mut self, event: ParseEventType) -> ParserResult<()> {
        if self.current_event != event {
            return Err(ParserError::UnexpectedEvent {
                mark: self.current_mark,
                expected: event,
                found: self.current_event,
            });
        }
        self.read()?;
        Ok(())
    }

    /// Reads until `event` is seen and then once more, leaving the cursor on
    /// the event right after it.
    ///
    /// # Errors
    /// Propagates parse errors met on the way.
    pub fn skip_after(&mut self, event: ParseEventType) -> ParserResult<()> {
        while self.read()? {
            if self.current_event == event {
                self.read()?;
                return Ok(());
            }
        }
        Ok(())
    }

    /// Consumes the node under the cursor including all its children.
    ///
    /// # Errors
    /// Propagates parse errors met inside the node.
    pub fn skip_current_node(&mut self) -> ParserResult<()> {
        match self.current_event {
            ParseEventType::SequenceStart | ParseEventType::MappingStart => {
                let mut depth = 0usize;
                loop {
                    match self.current_event {
                        ParseEventType::SequenceStart | ParseEventType::MappingStart => depth += 1,
                        ParseEventType::SequenceEnd | ParseEventType::MappingEnd => depth -= 1,
                        _ => {}
                    }
                    if !self.read()? || depth == 0 {
                        break;
                    }
                }
            }
            _ => {
                self.read()?;
            }
        }
        Ok(())
    }

    fn reset_current(&mut self) {
        if let Some(scalar) = self.current_scalar.take() {
            self.tokenizer.return_scalar(scalar);
        }
        self.current_scalar_style = None;
        self.current_tag = None;
        self.current_anchor = None;
        self.current_flow = false;
        self.current_explicit = false;
        self.alias_mark = None;
    }

    fn state_machine(&mut self) -> ParserResult<()> {
        match self.state {
            ParseState::StreamStart => self.parse_stream_start(),
            ParseState::ImplicitDocumentStart => self.parse_document_start(true),
            ParseState::DocumentStart => self.parse_document_start(false),
            ParseState::DocumentContent => self.parse_document_content(),
            ParseState::DocumentEnd => self.parse_document_end(),
            ParseState::BlockNode => self.parse_node(true, false),
            ParseState::BlockSequenceFirstEntry => self.parse_block_sequence_entry(true),
            ParseState::BlockSequenceEntry => self.parse_block_sequence_entry(false),
            ParseState::IndentlessSequenceEntry => self.parse_indentless_sequence_entry(),
            ParseState::BlockMappingFirstKey => self.parse_block_mapping_key(true),
            ParseState::BlockMappingKey => self.parse_block_mapping_key(false),
            ParseState::BlockMappingValue => self.parse_block_mapping_value(),
            ParseState::FlowSequenceFirstEntry => self.parse_flow_sequence_entry(true),
            ParseState::FlowSequenceEntry => self.parse_flow_sequence_entry(false),
            ParseState::FlowSequenceEntryMappingKey => self.parse_flow_sequence_entry_mapping_key(),
            ParseState::FlowSequenceEntryMappingValue => {
                self.parse_flow_sequence_entry_mapping_value()
            }
            ParseState::FlowSequenceEntryMappingEnd => self.parse_flow_sequence_entry_mapping_end(),
            ParseState::FlowMappingFirstKey => self.parse_flow_mapping_key(true),
            ParseState::FlowMappingKey => self.parse_flow_mapping_key(false),
            ParseState::FlowMappingValue => self.parse_flow_mapping_value(false),
            ParseState::FlowMappingEmptyValue => self.parse_flow_mapping_value(true),
            ParseState::End => Ok(()),
        }
    }

    fn peek_token(&mut self) -> ParserResult<&Token> {
        if self.token_consumed {
            if !self.tokenizer.read()? {
                return Err(ParserError::new_str(
                    self.tokenizer.mark(),
                    "unexpected end of the token stream",
                ));
            }
            self.token_consumed = false;
        }
        let mark = self.tokenizer.mark();
        self.tokenizer
            .current_token()
            .ok_or_else(|| ParserError::new_str(mark, "no token available"))
    }

    fn skip_token(&mut self) {
        self.token_consumed = true;
    }

    /// Moves the next token out of the tokenizer, consuming it.
    fn take_token(&mut self) -> ParserResult<Token> {
        let mark = self.peek_token()?.mark;
        self.token_consumed = true;
        self.tokenizer
            .take_current_token()
            .ok_or_else(|| ParserError::new_str(mark, "no token available"))
    }

    fn peek_mark(&mut self) -> ParserResult<Marker> {
        Ok(self.peek_token()?.mark)
    }

    fn pop_state(&mut self) -> ParseState {
        self.states.try_pop().unwrap_or(ParseState::End)
    }

    fn emit(&mut self, event: ParseEventType, mark: Marker) {
        self.current_event = event;
        self.current_mark = mark;
    }

    fn emit_collection_start(&mut self, event: ParseEventType, mark: Marker, flow: bool) {
        self.current_flow = flow;
        self.emit(event, mark);
    }

    fn emit_scalar(&mut self, scalar: Option<Scalar>, style: ScalarType, mark: Marker) {
        self.current_scalar = scalar;
        self.current_scalar_style = Some(style);
        self.emit(ParseEventType::Scalar, mark);
    }

    fn emit_empty_scalar(&mut self, mark: Marker) {
        self.emit_scalar(None, ScalarType::Plain, mark);
    }

    fn tag_prefix(&self, handle: &str) -> Option<&str> {
        self.tag_directives
            .iter()
            .find(|directive| directive.handle == handle)
            .map(|directive| directive.suffix.as_str())
            .or_else(|| {
                DEFAULT_TAG_HANDLES
                    .iter()
                    .find(|(default, _)| *default == handle)
                    .map(|(_, prefix)| *prefix)
            })
    }

    /// Reads the text out of an anchor or alias token and recycles its buffer.
    fn scalar_name(&mut self, scalar: Scalar, mark: Marker) -> ParserResult<String> {
        let name = scalar
            .as_utf8()
            .map(ToString::to_string)
            .map_err(|_| ParserError::InvalidUtf8 { mark });
        self.tokenizer.return_scalar(scalar);
        name
    }

    fn parse_stream_start(&mut self) -> ParserResult<()> {
        let token = self.peek_token()?;
        let mark = token.mark;
        match token.token_type {
            TokenType::StreamStart => {
                self.state = ParseState::ImplicitDocumentStart;
                self.emit(ParseEventType::StreamStart, mark);
                self.skip_token();
                Ok(())
            }
            _ => Err(ParserError::new_str(mark, "did not find expected <stream-start>")),
        }
    }

    fn parse_document_start(&mut self, implicit: bool) -> ParserResult<()> {
        while matches!(self.peek_token()?.token_type, TokenType::DocumentEnd) {
            self.skip_token();
        }

        let token = self.peek_token()?;
        let mark = token.mark;
        match token.token_type {
            TokenType::StreamEnd => {
                self.state = ParseState::End;
                self.emit(ParseEventType::StreamEnd, mark);
                self.skip_token();
                Ok(())
            }
            TokenType::VersionDirective(_)
            | TokenType::TagDirective(_)
            | TokenType::DocumentStart => self.parse_explicit_document_start(),
            _ if implicit => {
                self.begin_document();
                self.states.push(ParseState::DocumentEnd);
                self.state = ParseState::BlockNode;
                self.emit(ParseEventType::DocumentStart, mark);
                Ok(())
            }
            _ => self.parse_explicit_document_start(),
        }
    }

    fn parse_explicit_document_start(&mut self) -> ParserResult<()> {
        self.begin_document();
        self.process_directives()?;

        let token = self.peek_token()?;
        let mark = token.mark;
        if !matches!(token.token_type, TokenType::DocumentStart) {
            return Err(ParserError::new_str(
                mark,
                "did not find expected <document start>",
            ));
        }

        self.states.push(ParseState::DocumentEnd);
        self.state = ParseState::DocumentContent;
        self.current_explicit = true;
        self.emit(ParseEventType::DocumentStart, mark);
        self.skip_token();
        Ok(())
    }

    fn begin_document(&mut self) {
        self.anchors.clear();
        self.version = None;
    }

    fn process_directives(&mut self) -> ParserResult<()> {
        loop {
            let token = self.peek_token()?;
            if !matches!(
                token.token_type,
                TokenType::VersionDirective(_) | TokenType::TagDirective(_)
            ) {
                return Ok(());
            }

            let token = self.take_token()?;
            match token.token_type {
                TokenType::VersionDirective(version) => {
                    if self.version.is_some() {
                        return Err(ParserError::new_str(
                            token.mark,
                            "found duplicate %YAML directive",
                        ));
                    }
                    if version.major != 1 {
                        return Err(ParserError::new_str(
                            token.mark,
                            "found incompatible YAML document",
                        ));
                    }
                    self.version = Some(version);
                }
                // unknown directive
                TokenType::TagDirective(tag) if tag.handle.is_empty() && tag.suffix.is_empty() => {}
                TokenType::TagDirective(tag) => {
                    if self.tag_directives.iter().any(|known| known.handle == tag.handle) {
                        return Err(ParserError::new_str(
                            token.mark,
                            "found duplicate %TAG directive",
                        ));
                    }
                    self.tag_directives.push(tag);
                }
                _ => {}
            }
        }
    }

    fn parse_document_content(&mut self) -> ParserResult<()> {
        let token = self.peek_token()?;
        let mark = token.mark;
        match token.token_type {
            TokenType::VersionDirective(_)
            | TokenType::TagDirective(_)
            | TokenType::DocumentStart
            | TokenType::DocumentEnd
            | TokenType::StreamEnd => {
                self.state = self.pop_state();
                self.emit_empty_scalar(mark);
                Ok(())
            }
            _ => self.parse_node(true, false),
        }
    }

    fn parse_document_end(&mut self) -> ParserResult<()> {
        let token = self.peek_token()?;
        let mark = token.mark;
        let explicit = matches!(token.token_type, TokenType::DocumentEnd);
        if explicit {
            self.skip_token();
        }

        self.tag_directives.clear();
        // a bare document may follow `...`, otherwise `---` is required
        self.state = if explicit {
            ParseState::ImplicitDocumentStart
        } else {
            ParseState::DocumentStart
        };
        self.current_explicit = explicit;
        self.emit(ParseEventType::DocumentEnd, mark);
        Ok(())
    }

    fn parse_node(&mut self, block: bool, indentless_sequence: bool) -> ParserResult<()> {
        let token = self.peek_token()?;
        let start_mark = token.mark;

        if let TokenType::Alias(_) = token.token_type {
            let token = self.take_token()?;
            self.state = self.pop_state();
            return self.parse_alias(token);
        }

        let mut anchor = None;
        let mut tag = None;
        loop {
            let token = self.peek_token()?;
            match token.token_type {
                TokenType::Anchor(_) if anchor.is_none() => {
                    let token = self.take_token()?;
                    if let Some(scalar) = token.token_type.into_scalar() {
                        let name = self.scalar_name(scalar, token.mark)?;
                        self.anchors.insert(name.clone(), token.mark);
                        anchor = Some(Anchor::new(name));
                    }
                }
                TokenType::Tag(_) if tag.is_none() => {
                    let token = self.take_token()?;
                    if let TokenType::Tag(node_tag) = token.token_type {
                        if !node_tag.handle.is_empty() && self.tag_prefix(&node_tag.handle).is_none()
                        {
                            return Err(ParserError::UndefinedTagHandle {
                                mark: token.mark,
                                handle: node_tag.handle,
                            });
                        }
                        tag = Some(node_tag);
                    }
                }
                _ => break,
            }
        }

        let has_properties = anchor.is_some() || tag.is_some();
        self.current_anchor = anchor;
        self.current_tag = tag;

        let token = self.peek_token()?;
        let mark = token.mark;
        match token.token_type {
            TokenType::BlockEntryStart if indentless_sequence => {
                self.state = ParseState::IndentlessSequenceEntry;
                self.emit_collection_start(ParseEventType::SequenceStart, start_mark, false);
            }
            TokenType::PlainScalar(_)
            | TokenType::SingleQuotedScalar(_)
            | TokenType::DoubleQuotedScalar(_)
            | TokenType::LiteralScalar(_)
            | TokenType::FoldedScalar(_) => {
                let token = self.take_token()?;
                self.state = self.pop_state();
                let style = token.token_type.scalar_type().unwrap_or_default();
                self.emit_scalar(token.token_type.into_scalar(), style, start_mark);
            }
            TokenType::FlowSequenceStart => {
                self.state = ParseState::FlowSequenceFirstEntry;
                self.emit_collection_start(ParseEventType::SequenceStart, start_mark, true);
            }
            TokenType::FlowMappingStart => {
                self.state = ParseState::FlowMappingFirstKey;
                self.emit_collection_start(ParseEventType::MappingStart, start_mark, true);
            }
            TokenType::BlockSequenceStart if block => {
                self.state = ParseState::BlockSequenceFirstEntry;
                self.emit_collection_start(ParseEventType::SequenceStart, start_mark, false);
            }
            TokenType::BlockMappingStart if block => {
                self.state = ParseState::BlockMappingFirstKey;
                self.emit_collection_start(ParseEventType::MappingStart, start_mark, false);
            }
            // properties without content stand for an empty scalar
            _ if has_properties => {
                self.state = self.pop_state();
                self.emit_empty_scalar(start_mark);
            }
            _ => {
                return Err(ParserError::new_str(
                    mark,
                    if block {
                        "while parsing a block node, did not find expected node content"
                    } else {
                        "while parsing a flow node, did not find expected node content"
                    },
                ));
            }
        }
        Ok(())
    }

    fn parse_alias(&mut self, token: Token) -> ParserResult<()> {
        let mark = token.mark;
        let Some(scalar) = token.token_type.into_scalar() else {
            return Err(ParserError::new_str(mark, "alias without a name"));
        };
        let name = self.scalar_name(scalar, mark)?;
        let Some(definition) = self.anchors.get(&name).copied() else {
            return Err(ParserError::UndefinedAnchor { mark, name });
        };

        self.alias_mark = Some(definition);
        self.current_anchor = Some(Anchor::new(name));
        self.emit(ParseEventType::Alias, mark);
        Ok(())
    }

    fn parse_block_sequence_entry(&mut self, first: bool) -> ParserResult<()> {
        if first {
            self.skip_token();
        }

        let token = self.peek_token()?;
        let mark = token.mark;
        match token.token_type {
            TokenType::BlockEntryStart => {
                self.skip_token();
                if matches!(
                    self.peek_token()?.token_type,
                    TokenType::BlockEntryStart | TokenType::BlockEnd
                ) {
                    self.state = ParseState::BlockSequenceEntry;
                    self.emit_empty_scalar(mark);
                    Ok(())
                } else {
                    self.states.push(ParseState::BlockSequenceEntry);
                    self.parse_node(true, false)
                }
            }
            TokenType::BlockEnd => {
                self.state = self.pop_state();
                self.emit(ParseEventType::SequenceEnd, mark);
                self.skip_token();
                Ok(())
            }
            _ => Err(ParserError::new_str(
                mark,
                "while parsing a block collection, did not find expected '-' indicator",
            )),
        }
    }

    fn parse_indentless_sequence_entry(&mut self) -> ParserResult<()> {
        let token = self.peek_token()?;
        let mark = token.mark;
        if !matches!(token.token_type, TokenType::BlockEntryStart) {
            self.state = self.pop_state();
            self.emit(ParseEventType::SequenceEnd, mark);
            return Ok(());
        }

        self.skip_token();
        if matches!(
            self.peek_token()?.token_type,
            TokenType::BlockEntryStart
                | TokenType::KeyStart
                | TokenType::ValueStart
                | TokenType::BlockEnd
        ) {
            self.state = ParseState::IndentlessSequenceEntry;
            self.emit_empty_scalar(mark);
            Ok(())
        } else {
            self.states.push(ParseState::IndentlessSequenceEntry);
            self.parse_node(true, false)
        }
    }

    fn parse_block_mapping_key(&mut self, first: bool) -> ParserResult<()> {
        if first {
            self.skip_token();
        }

        let token = self.peek_token()?;
        let mark = token.mark;
        match token.token_type {
            TokenType::KeyStart => {
                self.skip_token();
                if matches!(
                    self.peek_token()?.token_type,
                    TokenType::KeyStart | TokenType::ValueStart | TokenType::BlockEnd
                ) {
                    self.state = ParseState::BlockMappingValue;
                    self.emit_empty_scalar(mark);
                    Ok(())
                } else {
                    self.states.push(ParseState::BlockMappingValue);
                    self.parse_node(true, true)
                }
            }
            // `: value` with an empty key
            TokenType::ValueStart => {
                self.state = ParseState::BlockMappingValue;
                self.emit_empty_scalar(mark);
                Ok(())
            }
            TokenType::BlockEnd => {
                self.state = self.pop_state();
                self.emit(ParseEventType::MappingEnd, mark);
                self.skip_token();
                Ok(())
            }
            _ => Err(ParserError::new_str(
                mark,
                "while parsing a block mapping, did not find expected key",
            )),
        }
    }

    fn parse_block_mapping_value(&mut self) -> ParserResult<()> {
        let token = self.peek_token()?;
        let mark = token.mark;
        if !matches!(token.token_type, TokenType::ValueStart) {
            self.state = ParseState::BlockMappingKey;
            self.emit_empty_scalar(mark);
            return Ok(());
        }

        self.skip_token();
        if matches!(
            self.peek_token()?.token_type,
            TokenType::KeyStart | TokenType::ValueStart | TokenType::BlockEnd
        ) {
            self.state = ParseState::BlockMappingKey;
            self.emit_empty_scalar(mark);
            Ok(())
        } else {
            self.states.push(ParseState::BlockMappingKey);
            self.parse_node(true, true)
        }
    }

    fn parse_flow_sequence_entry(&mut self, first: bool) -> ParserResult<()> {
        if first {
            self.skip_token();
        }

        let token = self.peek_token()?;
        let mut mark = token.mark;
        if !matches!(token.token_type, TokenType::FlowSequenceEnd) {
            if !first {
                if !matches!(token.token_type, TokenType::FlowEntryStart) {
                    return Err(ParserError::new_str(
                        mark,
                        "while parsing a flow sequence, did not find expected ',' or ']'",
                    ));
                }
                self.skip_token();
            }

            let token = self.peek_token()?;
            mark = token.mark;
            match token.token_type {
                TokenType::KeyStart => {
                    self.state = ParseState::FlowSequenceEntryMappingKey;
                    self.emit_collection_start(ParseEventType::MappingStart, mark, true);
                    self.skip_token();
                    return Ok(());
                }
                TokenType::FlowSequenceEnd => {}
                _ => {
                    self.states.push(ParseState::FlowSequenceEntry);
                    return self.parse_node(false, false);
                }
            }
        }

        self.state = self.pop_state();
        self.current_flow = true;
        self.emit(ParseEventType::SequenceEnd, mark);
        self.skip_token();
        Ok(())
    }

    fn parse_flow_sequence_entry_mapping_key(&mut self) -> ParserResult<()> {
        let token = self.peek_token()?;
        let mark = token.mark;
        if matches!(
            token.token_type,
            TokenType::ValueStart | TokenType::FlowEntryStart | TokenType::FlowSequenceEnd
        ) {
            self.state = ParseState::FlowSequenceEntryMappingValue;
            self.emit_empty_scalar(mark);
            Ok(())
        } else {
            self.states.push(ParseState::FlowSequenceEntryMappingValue);
            self.parse_node(false, false)
        }
    }

    fn parse_flow_sequence_entry_mapping_value(&mut self) -> ParserResult<()> {
        let token = self.peek_token()?;
        let mut mark = token.mark;
        if matches!(token.token_type, TokenType::ValueStart) {
            self.skip_token();
            let token = self.peek_token()?;
            mark = token.mark;
            if !matches!(
                token.token_type,
                TokenType::FlowEntryStart | TokenType::FlowSequenceEnd
            ) {
                self.states.push(ParseState::FlowSequenceEntryMappingEnd);
                return self.parse_node(false, false);
            }
        }
        self.state = ParseState::FlowSequenceEntryMappingEnd;
        self.emit_empty_scalar(mark);
        Ok(())
    }

    fn parse_flow_sequence_entry_mapping_end(&mut self) -> ParserResult<()> {
        let mark = self.peek_mark()?;
        self.state = ParseState::FlowSequenceEntry;
        self.current_flow = true;
        self.emit(ParseEventType::MappingEnd, mark);
        Ok(())
    }

    fn parse_flow_mapping_key(&mut self, first: bool) -> ParserResult<()> {
        if first {
            self.skip_token();
        }

        let token = self.peek_token()?;
        let mut mark = token.mark;
        if !matches!(token.token_type, TokenType::FlowMappingEnd) {
            if !first {
                if !matches!(token.token_type, TokenType::FlowEntryStart) {
                    return Err(ParserError::new_str(
                        mark,
                        "while parsing a flow mapping, did not find expected ',' or '}'",
                    ));
                }
                self.skip_token();
            }

            let token = self.peek_token()?;
            mark = token.mark;
            match token.token_type {
                TokenType::KeyStart => {
                    self.skip_token();
                    let token = self.peek_token()?;
                    let key_mark = token.mark;
                    if matches!(
                        token.token_type,
                        TokenType::ValueStart | TokenType::FlowEntryStart | TokenType::FlowMappingEnd
                    ) {
                        self.state = ParseState::FlowMappingValue;
                        self.emit_empty_scalar(key_mark);
                        return Ok(());
                    }
                    self.states.push(ParseState::FlowMappingValue);
                    return self.parse_node(false, false);
                }
                // `{: value}` with an empty key
                TokenType::ValueStart => {
                    self.state = ParseState::FlowMappingValue;
                    self.emit_empty_scalar(mark);
                    return Ok(());
                }
                TokenType::FlowMappingEnd => {}
                _ => {
                    self.states.push(ParseState::FlowMappingEmptyValue);
                    return self.parse_node(false, false);
                }
            }
        }

        self.state = self.pop_state();
        self.current_flow = true;
        self.emit(ParseEventType::MappingEnd, mark);
        self.skip_token();
        Ok(())
    }

    fn parse_flow_mapping_value(&mut self, empty: bool) -> ParserResult<()> {
        let token = self.peek_token()?;
        let mut mark = token.mark;
        if !empty && matches!(token.token_type, TokenType::ValueStart) {
            self.skip_token();
            let token = self.peek_token()?;
            mark = token.mark;
            if !matches!(
                token.token_type,
                TokenType::FlowEntryStart | TokenType::FlowMappingEnd
            ) {
                self.states.push(ParseState::FlowMappingKey);
                return self.parse_node(false, false);
            }
        }
        self.state = ParseState::FlowMappingKey;
        self.emit_empty_scalar(mark);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Parser;
    use liteyaml_common::{ParseEventType, ParserError, ScalarType, VersionDirective};

    fn events(input: &str) -> Vec<ParseEventType> {
        let mut parser = Parser::new(input.as_bytes());
        let mut events = Vec::new();
        while parser.read().unwrap() {
            events.push(parser.current_event_type());
        }
        events
    }

    fn first_error(input: &str) -> ParserError {
        let mut parser = Parser::new(input.as_bytes());
        loop {
            match parser.read() {
                Ok(true) => {}
                Ok(false) => panic!("expected an error for {input:?}"),
                Err(err) => return err,
            }
        }
    }

    #[test]
    fn empty_stream() {
        assert_eq!(
            events(""),
            vec![ParseEventType::StreamStart, ParseEventType::StreamEnd]
        );
    }

    #[test]
    fn block_sequence_of_scalars() {
        use ParseEventType::*;
        assert_eq!(
            events("- a\n- b\n"),
            vec![
                StreamStart,
                DocumentStart,
                SequenceStart,
                Scalar,
                Scalar,
                SequenceEnd,
                DocumentEnd,
                StreamEnd
            ]
        );
    }

    #[test]
    fn indentless_sequence_in_mapping() {
        use ParseEventType::*;
        assert_eq!(
            events("a:\n- 1\n- 2\nb: c"),
            vec![
                StreamStart,
                DocumentStart,
                MappingStart,
                Scalar,
                SequenceStart,
                Scalar,
                Scalar,
                SequenceEnd,
                Scalar,
                Scalar,
                MappingEnd,
                DocumentEnd,
                StreamEnd
            ]
        );
    }

    #[test]
    fn flow_pairs_inside_sequence() {
        use ParseEventType::*;
        assert_eq!(
            events("[a: 1, b]"),
            vec![
                StreamStart,
                DocumentStart,
                SequenceStart,
                MappingStart,
                Scalar,
                Scalar,
                MappingEnd,
                Scalar,
                SequenceEnd,
                DocumentEnd,
                StreamEnd
            ]
        );
    }

    #[test]
    fn multiple_documents() {
        use ParseEventType::*;
        assert_eq!(
            events("--- a\n...\nb\n--- c"),
            vec![
                StreamStart,
                DocumentStart,
                Scalar,
                DocumentEnd,
                DocumentStart,
                Scalar,
                DocumentEnd,
                DocumentStart,
                Scalar,
                DocumentEnd,
                StreamEnd
            ]
        );
    }

    #[test]
    fn scalar_styles() {
        let mut parser = Parser::new(b"[plain, 'single', \"double\"]");
        parser.skip_after(ParseEventType::SequenceStart).unwrap();
        assert_eq!(parser.current_scalar_style(), Some(ScalarType::Plain));
        parser.read().unwrap();
        assert_eq!(parser.current_scalar_style(), Some(ScalarType::SingleQuote));
        parser.read().unwrap();
        assert_eq!(parser.current_scalar_style(), Some(ScalarType::DoubleQuote));
        parser.read().unwrap();
        assert!(parser.is_flow_collection());
    }

    #[test]
    fn anchors_and_aliases() {
        let mut parser = Parser::new(b"a: &x 1\nb: *x\n");
        parser.skip_after(ParseEventType::MappingStart).unwrap();
        parser.read().unwrap();
        assert_eq!(parser.try_get_current_anchor().map(|a| a.name.as_str()), Some("x"));
        let definition = parser.current_mark();
        parser.read().unwrap();
        parser.read().unwrap();
        assert_eq!(parser.current_event_type(), ParseEventType::Alias);
        assert_eq!(parser.try_get_current_anchor().map(|a| a.name.as_str()), Some("x"));
        assert_eq!(parser.alias_definition_mark(), Some(definition));
    }

    #[test]
    fn undefined_alias_is_an_error() {
        assert!(matches!(
            first_error("a: *nope"),
            ParserError::UndefinedAnchor { ref name, .. } if name == "nope"
        ));
    }

    #[test]
    fn tags_resolve_through_directives() {
        let mut parser = Parser::new(b"%TAG !e! tag:example.com,2000:app/\n--- !e!foo bar");
        parser.skip_after(ParseEventType::DocumentStart).unwrap();
        assert_eq!(parser.try_get_current_tag().map(ToString::to_string), Some("!e!foo".into()));
        assert_eq!(
            parser.try_get_resolved_tag().as_deref(),
            Some("tag:example.com,2000:app/foo")
        );

        let mut parser = Parser::new(b"!!str a");
        parser.skip_after(ParseEventType::DocumentStart).unwrap();
        assert_eq!(
            parser.try_get_resolved_tag().as_deref(),
            Some("tag:yaml.org,2002:str")
        );
    }

    #[test]
    fn undefined_tag_handle_is_an_error() {
        assert!(matches!(
            first_error("- !e!foo bar"),
            ParserError::UndefinedTagHandle { ref handle, .. } if handle == "!e!"
        ));
    }

    #[test]
    fn directive_validation() {
        assert!(first_error("%YAML 1.2\n%YAML 1.2\n---").to_string().contains("duplicate %YAML"));
        assert!(first_error("%YAML 2.0\n---").to_string().contains("incompatible"));
        assert!(first_error("%TAG !a! x\n%TAG !a! y\n---").to_string().contains("duplicate %TAG"));

        let mut parser = Parser::new(b"%YAML 1.1\n--- a");
        parser.skip_after(ParseEventType::StreamStart).unwrap();
        assert_eq!(
            parser.version_directive(),
            Some(VersionDirective { major: 1, minor: 1 })
        );
    }

    #[test]
    fn unknown_directive_is_ignored() {
        use ParseEventType::*;
        assert_eq!(
            events("%FOO bar\n--- a"),
            vec![StreamStart, DocumentStart, Scalar, DocumentEnd, StreamEnd]
        );
    }

    #[test]
    fn tokenizer_errors_are_wrapped() {
        assert!(matches!(first_error("\"open"), ParserError::Tokenizer(_)));
    }

    #[test]
    fn read_after_stream_end_is_false() {
        let mut parser = Parser::new(b"a");
        while parser.read().unwrap() {}
        assert_eq!(parser.current_event_type(), ParseEventType::StreamEnd);
        assert!(!parser.read().unwrap());
    }

    #[test]
    fn pool_comes_back() {
        let mut parser = Parser::new(b"[a, b, c]");
        while parser.read().unwrap() {}
        assert!(parser.into_pool().available() >= 2);
    }
}
