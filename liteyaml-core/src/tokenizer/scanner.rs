use super::source::Source;
use super::token::{Token, TokenType};
use crate::buffer::{ExpandBuffer, InsertionQueue};
use crate::char_utils::{
    as_hex, is_alpha, is_blank_or_break, is_break, is_flow, is_hex, is_number,
    is_tag_char, is_uri_char, is_word_char, SPACE, TAB,
};
use crate::scalar::{LineBreak, Scalar, ScalarPool};
use crate::tracing_macros::trace;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::mem;
use liteyaml_common::{
    ChompIndicator, Marker, Tag, TokenizerError, TokenizerResult, VersionDirective,
};

type ScanResult = TokenizerResult<()>;

/// A simple key must be resolved by a `:` within this many bytes.
const SIMPLE_KEY_WINDOW: usize = 1024;
/// Longest run of digits accepted for each part of `%YAML major.minor`.
const MAX_VERSION_DIGITS: usize = 9;

#[derive(Clone, Copy, Debug, Default)]
struct SimpleKey {
    possible: bool,
    required: bool,
    token_number: usize,
    mark: Marker,
}

/// Streaming lexer turning a complete UTF-8 buffer into [`Token`]s.
///
/// Tokens are produced lazily into an [`InsertionQueue`]: a token that may
/// still turn out to be an implicit mapping key stays queued until the
/// scanner has seen enough input to decide, at which point a `KeyStart`
/// (and, for block mappings, a `BlockMappingStart`) is spliced in front of it.
pub struct Tokenizer<'input> {
    src: Source<'input>,
    mark: Marker,
    current: Option<Token>,
    tokens: InsertionQueue<Token>,
    simple_keys: ExpandBuffer<SimpleKey>,
    indents: ExpandBuffer<isize>,
    pool: ScalarPool,

    stream_start_produced: bool,
    stream_end_fetched: bool,
    stream_end_produced: bool,
    token_available: bool,
    simple_key_allowed: bool,

    /// Column of the innermost block collection, `-1` at the top level.
    indent: isize,
    flow_level: usize,
    adjacent_value_allowed_at: usize,
    tokens_parsed: usize,

    buf_whitespaces: Vec<u8>,
    buf_trailing_breaks: Vec<u8>,
}

impl<'input> Tokenizer<'input> {
    #[must_use]
    pub fn new(input: &'input [u8]) -> Self {
        Tokenizer::with_pool(input, ScalarPool::new())
    }

    /// Tokenizer drawing its scalar buffers from an existing pool, e.g. one
    /// recovered from a previous run with [`Tokenizer::into_pool`].
    #[must_use]
    pub fn with_pool(input: &'input [u8], pool: ScalarPool) -> Self {
        Tokenizer {
            src: Source::new(input),
            mark: Marker::default(),
            current: None,
            tokens: InsertionQueue::new(16),
            simple_keys: ExpandBuffer::new(16),
            indents: ExpandBuffer::new(16),
            pool,

            stream_start_produced: false,
            stream_end_fetched: false,
            stream_end_produced: false,
            token_available: false,
            simple_key_allowed: false,

            indent: -1,
            flow_level: 0,
            adjacent_value_allowed_at: 0,
            tokens_parsed: 0,

            buf_whitespaces: Vec::new(),
            buf_trailing_breaks: Vec::new(),
        }
    }

    /// Position of the scanner inside the input.
    #[must_use]
    pub fn mark(&self) -> Marker {
        self.mark
    }

    #[must_use]
    pub fn current_token(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn current_token_type(&self) -> Option<&TokenType> {
        self.current.as_ref().map(|tok| &tok.token_type)
    }

    /// Moves the current token out. Its scalar, if any, becomes the caller's
    /// to hand back with [`Tokenizer::return_scalar`].
    pub fn take_current_token(&mut self) -> Option<Token> {
        self.current.take()
    }

    pub fn return_scalar(&mut self, scalar: Scalar) {
        self.pool.checkin(scalar);
    }

    #[must_use]
    pub fn into_pool(self) -> ScalarPool {
        self.pool
    }

    /// Advances to the next token.
    ///
    /// Returns `Ok(true)` for every token including `StreamEnd`, and
    /// `Ok(false)` once the stream end was already delivered. After an error
    /// the tokenizer is exhausted.
    ///
    /// # Errors
    /// Returns a [`TokenizerError`] on malformed input.
    pub fn read(&mut self) -> TokenizerResult<bool> {
        if self.stream_end_produced {
            return Ok(false);
        }

        if !self.token_available {
            if let Err(err) = self.fetch_more_tokens() {
                self.stream_end_produced = true;
                return Err(err);
            }
        }

        if let Some(token) = self.current.take() {
            if let Some(scalar) = token.token_type.into_scalar() {
                self.pool.checkin(scalar);
            }
        }

        let token = match self.tokens.dequeue() {
            Ok(token) => token,
            Err(err) => {
                self.stream_end_produced = true;
                return Err(TokenizerError::new_str(self.mark, &err.to_string()));
            }
        };
        self.token_available = false;
        self.tokens_parsed += 1;

        if token.token_type == TokenType::StreamEnd {
            self.stream_end_produced = true;
        }
        trace!("token {} at {}", token.token_type, token.mark);

        self.current = Some(token);
        Ok(true)
    }

    fn fetch_more_tokens(&mut self) -> ScanResult {
        loop {
            let mut need_more = self.tokens.is_empty();
            if !need_more && !self.stream_end_fetched {
                self.stale_simple_keys()?;
                let parsed = self.tokens_parsed;
                need_more = self
                    .simple_keys
                    .as_slice()
                    .iter()
                    .any(|sk| sk.possible && sk.token_number == parsed);
            }
            if !need_more {
                break;
            }
            self.fetch_next_token()?;
        }
        self.token_available = true;
        Ok(())
    }

    fn fetch_next_token(&mut self) -> ScanResult {
        if !self.stream_start_produced {
            self.fetch_stream_start();
            return Ok(());
        }

        self.skip_to_next_token()?;
        self.stale_simple_keys()?;
        self.unroll_indent(self.col());

        if self.src.buf_is_empty() {
            return self.fetch_stream_end();
        }

        if self.mark.col == 0 {
            match self.src.peekz() {
                b'%' => return self.fetch_directive(),
                b'-' if self.src.next_is_document_start() => {
                    return self.fetch_document_indicator(TokenType::DocumentStart);
                }
                b'.' if self.src.next_is_document_end() => {
                    return self.fetch_document_indicator(TokenType::DocumentEnd);
                }
                _ => {}
            }
        }

        self.fetch_main_loop()
    }

    fn fetch_main_loop(&mut self) -> ScanResult {
        let c = self.src.peekz();
        let next_is_empty = self.src.is_blank_or_breakz_at(1);
        match c {
            b'[' => self.fetch_flow_collection_start(TokenType::FlowSequenceStart),
            b'{' => self.fetch_flow_collection_start(TokenType::FlowMappingStart),
            b']' => self.fetch_flow_collection_end(TokenType::FlowSequenceEnd),
            b'}' => self.fetch_flow_collection_end(TokenType::FlowMappingEnd),
            b',' => self.fetch_flow_entry(),
            b'-' if next_is_empty => self.fetch_block_entry(),
            b'?' if next_is_empty => self.fetch_key(),
            b':' if next_is_empty
                || (self.flow_level > 0
                    && (is_flow(self.src.peekz_n1())
                        || self.mark.pos == self.adjacent_value_allowed_at)) =>
            {
                self.fetch_value()
            }
            b'*' => self.fetch_anchor(true),
            b'&' => self.fetch_anchor(false),
            b'!' => self.fetch_tag(),
            b'|' if self.flow_level == 0 => self.fetch_block_scalar(true),
            b'>' if self.flow_level == 0 => self.fetch_block_scalar(false),
            b'\'' => self.fetch_flow_scalar(true),
            b'"' => self.fetch_flow_scalar(false),
            b'%' | b'@' | b'`' => Err(TokenizerError::new_str(
                self.mark,
                &format!("Unexpected character: '{}'", c as char),
            )),
            _ => self.fetch_plain_scalar(),
        }
    }

    fn fetch_stream_start(&mut self) {
        self.indent = -1;
        self.stream_start_produced = true;
        self.simple_key_allowed = true;
        self.enqueue(TokenType::StreamStart, self.mark);
        self.simple_keys.push(SimpleKey::default());
    }

    fn fetch_stream_end(&mut self) -> ScanResult {
        // force new line
        if self.mark.col != 0 {
            self.mark.col = 0;
            self.mark.line += 1;
        }
        self.unroll_indent(-1);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;
        self.stream_end_fetched = true;
        self.enqueue(TokenType::StreamEnd, self.mark);
        Ok(())
    }

    fn fetch_document_indicator(&mut self, token_type: TokenType) -> ScanResult {
        self.unroll_indent(-1);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;

        let start_mark = self.mark;
        self.skip_non_blank(3);
        self.enqueue(token_type, start_mark);
        Ok(())
    }

    fn fetch_directive(&mut self) -> ScanResult {
        self.unroll_indent(-1);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;

        let start_mark = self.mark;
        self.skip_non_blank(1);

        let name = self.scan_directive_name()?;
        let token_type = match name.as_slice() {
            b"YAML" => self.scan_version_directive_value()?,
            b"TAG" => self.scan_tag_directive_value()?,
            _ => {
                let rest = self.src.count_until_break();
                self.skip_non_blank(rest);
                TokenType::TagDirective(Tag::default())
            }
        };
        self.enqueue(token_type, start_mark);

        self.skip_blanks();
        if self.src.peekz() == b'#' {
            self.skip_comment();
        }

        if !self.src.buf_is_empty() && !self.src.next_is_break() {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning a directive, did not find expected comment or line break",
            ));
        }
        self.consume_line_break();
        Ok(())
    }

    fn scan_directive_name(&mut self) -> TokenizerResult<Vec<u8>> {
        let mut name = Vec::new();
        while is_alpha(self.src.peekz()) {
            name.push(self.src.peekz());
            self.skip_non_blank(1);
        }

        if name.is_empty() {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning a directive, could not find expected directive name",
            ));
        }

        if !self.src.is_blank_or_breakz_at(0) {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning a directive, found unexpected non-alphabetical character",
            ));
        }
        Ok(name)
    }

    fn scan_version_directive_value(&mut self) -> TokenizerResult<TokenType> {
        self.skip_blanks();
        let major = self.scan_version_directive_number()?;

        if self.src.peekz() != b'.' {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning a YAML directive, did not find expected digit or '.' character",
            ));
        }
        self.skip_non_blank(1);

        let minor = self.scan_version_directive_number()?;
        Ok(TokenType::VersionDirective(VersionDirective { major, minor }))
    }

    fn scan_version_directive_number(&mut self) -> TokenizerResult<u32> {
        let mut value = 0u32;
        let mut length = 0;
        while is_number(self.src.peekz()) {
            if length == MAX_VERSION_DIGITS {
                return Err(TokenizerError::new_str(
                    self.mark,
                    "While scanning a YAML directive, found extremely long version number",
                ));
            }
            length += 1;
            value = value * 10 + as_hex(self.src.peekz());
            self.skip_non_blank(1);
        }

        if length == 0 {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning a YAML directive, did not find expected version number",
            ));
        }
        Ok(value)
    }

    fn scan_tag_directive_value(&mut self) -> TokenizerResult<TokenType> {
        self.skip_blanks();
        let handle = self.scan_tag_handle(true)?;

        if !self.src.next_is_blank() {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning a TAG directive, did not find expected whitespace after tag handle.",
            ));
        }
        self.skip_blanks();

        let prefix = self.scan_tag_prefix()?;
        if !self.src.is_blank_or_breakz_at(0) {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning TAG, did not find expected whitespace or line break",
            ));
        }

        Ok(TokenType::TagDirective(Tag::new(
            self.utf8_string(handle)?,
            self.utf8_string(prefix)?,
        )))
    }

    fn fetch_flow_collection_start(&mut self, token_type: TokenType) -> ScanResult {
        // `[` and `{` may start a simple key.
        self.save_simple_key()?;
        self.increase_flow_level();
        self.simple_key_allowed = true;

        let start_mark = self.mark;
        self.skip_non_blank(1);
        self.enqueue(token_type, start_mark);
        Ok(())
    }

    fn fetch_flow_collection_end(&mut self, token_type: TokenType) -> ScanResult {
        self.remove_simple_key()?;
        self.decrease_flow_level();
        self.simple_key_allowed = false;

        let start_mark = self.mark;
        self.skip_non_blank(1);
        if self.flow_level > 0 {
            self.adjacent_value_allowed_at = self.mark.pos;
        }
        self.enqueue(token_type, start_mark);
        Ok(())
    }

    fn fetch_flow_entry(&mut self) -> ScanResult {
        self.remove_simple_key()?;
        self.simple_key_allowed = true;

        let start_mark = self.mark;
        self.skip_non_blank(1);
        self.enqueue(TokenType::FlowEntryStart, start_mark);
        Ok(())
    }

    fn fetch_block_entry(&mut self) -> ScanResult {
        if self.flow_level > 0 {
            return Err(TokenizerError::new_str(
                self.mark,
                "'-' is only valid inside a block",
            ));
        }
        if !self.simple_key_allowed {
            return Err(TokenizerError::new_str(
                self.mark,
                "Block sequence entries are not allowed in this context",
            ));
        }

        let start_mark = self.mark;
        self.roll_indent(start_mark.col, None, TokenType::BlockSequenceStart, start_mark)?;
        self.remove_simple_key()?;
        self.simple_key_allowed = true;

        self.skip_non_blank(1);
        self.enqueue(TokenType::BlockEntryStart, start_mark);
        Ok(())
    }

    fn fetch_key(&mut self) -> ScanResult {
        let start_mark = self.mark;
        if self.flow_level == 0 {
            if !self.simple_key_allowed {
                return Err(TokenizerError::new_str(
                    self.mark,
                    "Mapping keys are not allowed in this context",
                ));
            }
            self.roll_indent(start_mark.col, None, TokenType::BlockMappingStart, start_mark)?;
        }
        self.remove_simple_key()?;
        self.simple_key_allowed = self.flow_level == 0;

        self.skip_non_blank(1);
        self.enqueue(TokenType::KeyStart, start_mark);
        Ok(())
    }

    fn fetch_value(&mut self) -> ScanResult {
        let start_mark = self.mark;
        let sk = self.simple_keys.peek().copied().unwrap_or_default();

        if sk.possible {
            self.insert_token(sk.token_number, Token::new(TokenType::KeyStart, sk.mark))?;
            self.roll_indent(
                sk.mark.col,
                Some(sk.token_number),
                TokenType::BlockMappingStart,
                sk.mark,
            )?;
            if let Some(last) = self.simple_keys.peek_mut() {
                last.possible = false;
            }
            self.simple_key_allowed = false;
        } else {
            // `:` after a complex key
            if self.flow_level == 0 {
                if !self.simple_key_allowed {
                    return Err(TokenizerError::new_str(
                        self.mark,
                        "Mapping values are not allowed in this context",
                    ));
                }
                self.roll_indent(start_mark.col, None, TokenType::BlockMappingStart, start_mark)?;
            }
            self.simple_key_allowed = self.flow_level == 0;
        }

        self.skip_non_blank(1);
        self.enqueue(TokenType::ValueStart, start_mark);
        Ok(())
    }

    fn fetch_anchor(&mut self, alias: bool) -> ScanResult {
        self.save_simple_key()?;
        self.simple_key_allowed = false;

        let start_mark = self.mark;
        self.skip_non_blank(1);

        let mut scalar = self.pool.checkout();
        while is_alpha(self.src.peekz()) {
            scalar.write(self.src.peekz());
            self.skip_non_blank(1);
        }

        let ends_properly = self.src.peek_check(0).map_or(true, |c| {
            is_blank_or_break(c)
                || matches!(c, b'?' | b':' | b',' | b']' | b'}' | b'%' | b'@' | b'`')
        });
        if scalar.is_empty() || !ends_properly {
            self.pool.checkin(scalar);
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning an anchor or alias, did not find expected alphabetic or numeric character",
            ));
        }

        let token_type = if alias {
            TokenType::Alias(scalar)
        } else {
            TokenType::Anchor(scalar)
        };
        self.enqueue(token_type, start_mark);
        Ok(())
    }

    fn fetch_tag(&mut self) -> ScanResult {
        self.save_simple_key()?;
        self.simple_key_allowed = false;

        let start_mark = self.mark;
        let (handle, suffix) = if self.src.peekz_n1() == b'<' {
            self.scan_verbatim_tag()?
        } else {
            self.scan_tag_shorthand()?
        };

        // An empty scalar may follow a tag directly inside a flow collection.
        let ends_properly = self
            .src
            .peek_check(0)
            .map_or(true, |c| is_blank_or_break(c) || is_flow(c));
        if !ends_properly {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning a tag, did not find expected whitespace or line break or flow",
            ));
        }

        let tag = Tag::new(self.utf8_string(handle)?, self.utf8_string(suffix)?);
        self.enqueue(TokenType::Tag(tag), start_mark);
        Ok(())
    }

    /// `!<uri>`, reported with an empty handle.
    fn scan_verbatim_tag(&mut self) -> TokenizerResult<(Vec<u8>, Vec<u8>)> {
        self.skip_non_blank(2);

        let mut suffix = Vec::new();
        while self.consume_uri_char(&mut suffix, false)? {}

        if suffix.is_empty() {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning a verbatim tag, did not find valid characters.",
            ));
        }
        if self.src.peekz() != b'>' {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning a tag, did not find the expected '>'",
            ));
        }
        self.skip_non_blank(1);
        Ok((Vec::new(), suffix))
    }

    /// `!suffix`, `!!suffix`, `!named!suffix` or the non-specific `!`.
    fn scan_tag_shorthand(&mut self) -> TokenizerResult<(Vec<u8>, Vec<u8>)> {
        let mut handle = self.scan_tag_handle(false)?;
        let mut suffix = Vec::new();

        if handle.len() >= 2 && handle.last() == Some(&b'!') {
            while self.consume_uri_char(&mut suffix, true)? {}
            if suffix.is_empty() {
                return Err(TokenizerError::new_str(
                    self.mark,
                    "While scanning a tag, did not find any tag-shorthand suffix.",
                ));
            }
        } else {
            // primary handle: everything after the first `!` is suffix
            suffix.extend_from_slice(&handle[1..]);
            handle.truncate(1);
            while self.consume_uri_char(&mut suffix, true)? {}
            if suffix.is_empty() {
                mem::swap(&mut handle, &mut suffix);
            }
        }
        Ok((handle, suffix))
    }

    fn scan_tag_handle(&mut self, directive: bool) -> TokenizerResult<Vec<u8>> {
        if self.src.peekz() != b'!' {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning a tag, did not find expected '!'",
            ));
        }

        let mut handle = Vec::new();
        handle.push(b'!');
        self.skip_non_blank(1);

        while is_word_char(self.src.peekz()) {
            handle.push(self.src.peekz());
            self.skip_non_blank(1);
        }

        if self.src.peekz() == b'!' {
            handle.push(b'!');
            self.skip_non_blank(1);
        } else if directive && handle != b"!" {
            return Err(TokenizerError::new_str(
                self.mark,
                "While parsing a tag directive, did not find expected '!'",
            ));
        }
        Ok(handle)
    }

    fn scan_tag_prefix(&mut self) -> TokenizerResult<Vec<u8>> {
        let c = self.src.peekz();
        if c != b'!' && !is_tag_char(c) {
            return Err(TokenizerError::new_str(
                self.mark,
                "While parsing a tag, did not find expected tag prefix",
            ));
        }

        let mut prefix = Vec::new();
        prefix.push(c);
        self.skip_non_blank(1);
        while self.consume_uri_char(&mut prefix, false)? {}
        Ok(prefix)
    }

    fn consume_uri_char(&mut self, out: &mut Vec<u8>, tag_char_only: bool) -> TokenizerResult<bool> {
        if self.src.buf_is_empty() {
            return Ok(false);
        }
        let c = self.src.peekz();
        if c == b'%' {
            self.scan_uri_escapes(out)?;
            return Ok(true);
        }
        let accepted = if tag_char_only {
            is_tag_char(c)
        } else {
            is_uri_char(c)
        };
        if accepted {
            out.push(c);
            self.skip_non_blank(1);
        }
        Ok(accepted)
    }

    /// Decodes one UTF-8 character written as `%XX` octets.
    fn scan_uri_escapes(&mut self, out: &mut Vec<u8>) -> ScanResult {
        let mut escaped = Vec::with_capacity(12);
        let mut width = 0u32;

        loop {
            let (c, h1, h2) = (self.src.peekz(), self.src.peekz_n1(), self.src.peekz_n2());
            if c != b'%' || !is_hex(h1) || !is_hex(h2) {
                return Err(TokenizerError::new_str(
                    self.mark,
                    "While parsing a tag, did not find URI escaped octet",
                ));
            }

            let octet = (as_hex(h1) << 4) + as_hex(h2);
            if width == 0 {
                width = match octet {
                    _ if octet & 0x80 == 0x00 => 1,
                    _ if octet & 0xE0 == 0xC0 => 2,
                    _ if octet & 0xF0 == 0xE0 => 3,
                    _ if octet & 0xF8 == 0xF0 => 4,
                    _ => {
                        return Err(TokenizerError::new_str(
                            self.mark,
                            "While parsing a tag, found an incorrect leading utf8 octet",
                        ));
                    }
                };
            } else if octet & 0xC0 != 0x80 {
                return Err(TokenizerError::new_str(
                    self.mark,
                    "While parsing a tag, found an incorrect trailing utf8 octet",
                ));
            }

            escaped.extend_from_slice(&[c, h1, h2]);
            self.skip_non_blank(3);

            width -= 1;
            if width == 0 {
                break;
            }
        }

        let decoded = urlencoding::decode_binary(&escaped);
        if core::str::from_utf8(&decoded).is_err() {
            return Err(TokenizerError::new_str(
                self.mark,
                "While parsing a tag, found an invalid UTF-8 codepoint",
            ));
        }
        out.extend_from_slice(&decoded);
        Ok(())
    }

    fn fetch_block_scalar(&mut self, literal: bool) -> ScanResult {
        // A simple key may follow a block scalar.
        self.remove_simple_key()?;
        self.simple_key_allowed = true;

        let start_mark = self.mark;
        self.skip_non_blank(1);

        let mut chomping = ChompIndicator::Clip;
        let mut increment = 0usize;

        let c = self.src.peekz();
        if c == b'+' || c == b'-' {
            chomping = chomp_indicator(c);
            self.skip_non_blank(1);
            if is_number(self.src.peekz()) {
                increment = self.scan_indentation_indicator()?;
            }
        } else if is_number(c) {
            increment = self.scan_indentation_indicator()?;
            let c = self.src.peekz();
            if c == b'+' || c == b'-' {
                chomping = chomp_indicator(c);
                self.skip_non_blank(1);
            }
        }

        self.skip_blanks();
        if self.src.peekz() == b'#' {
            self.skip_comment();
        }

        if !self.src.buf_is_empty() && !self.src.next_is_break() {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning a block scalar, did not find expected comment or line break",
            ));
        }
        self.consume_line_break();

        let mut block_indent = 0usize;
        if increment > 0 {
            block_indent = match usize::try_from(self.indent) {
                Ok(indent) => indent + increment,
                Err(_) => increment,
            };
        }

        let mut scalar = self.pool.checkout();
        let mut line_breaks = mem::take(&mut self.buf_trailing_breaks);
        line_breaks.clear();

        let mut leading_break = LineBreak::None;
        let mut leading_blank = false;

        self.skip_block_scalar_breaks(&mut block_indent, &mut line_breaks)?;

        while self.mark.col == block_indent && !self.src.buf_is_empty() {
            // at the start of a non-empty line
            let trailing_blank = self.src.next_is_blank();
            if !literal && leading_break != LineBreak::None && !leading_blank && !trailing_blank {
                if line_breaks.is_empty() {
                    scalar.write(SPACE);
                }
            } else {
                scalar.write_line_break(leading_break);
            }

            scalar.write_slice(&line_breaks);
            line_breaks.clear();
            leading_blank = self.src.next_is_blank();

            let content_len = self.src.count_until_break();
            scalar.write_slice(&self.src.remaining()[..content_len]);
            self.skip_non_blank(content_len);

            if self.src.buf_is_empty() {
                // end of input counts as a line feed for chomping
                leading_break = LineBreak::Lf;
                break;
            }

            leading_break = self.consume_line_break();
            self.skip_block_scalar_breaks(&mut block_indent, &mut line_breaks)?;
        }

        if chomping != ChompIndicator::Strip {
            scalar.write_line_break(leading_break);
        }
        if chomping == ChompIndicator::Keep {
            scalar.write_slice(&line_breaks);
        }
        line_breaks.clear();
        self.buf_trailing_breaks = line_breaks;

        let token_type = if literal {
            TokenType::LiteralScalar(scalar)
        } else {
            TokenType::FoldedScalar(scalar)
        };
        self.enqueue(token_type, start_mark);
        Ok(())
    }

    fn scan_indentation_indicator(&mut self) -> TokenizerResult<usize> {
        let c = self.src.peekz();
        if c == b'0' {
            return Err(TokenizerError::new_str(
                self.mark,
                "While scanning a block scalar, found an indentation indicator equal to 0",
            ));
        }
        self.skip_non_blank(1);
        Ok(as_hex(c) as usize)
    }

    /// Eats indentation and empty lines, detecting the block indentation
    /// from the most indented leading line when it is not known yet.
    fn skip_block_scalar_breaks(
        &mut self,
        block_indent: &mut usize,
        breaks: &mut Vec<u8>,
    ) -> ScanResult {
        let mut max_indent = 0;
        loop {
            while (*block_indent == 0 || self.mark.col < *block_indent)
                && self.src.peekz() == SPACE
            {
                self.skip_non_blank(1);
            }

            max_indent = max_indent.max(self.mark.col);

            if (*block_indent == 0 || self.mark.col < *block_indent) && self.src.peekz() == TAB {
                return Err(TokenizerError::new_str(
                    self.mark,
                    "While scanning a block scalar, found a tab character where an indentation space is expected",
                ));
            }

            if !self.src.next_is_break() {
                break;
            }

            let line_break = self.consume_line_break();
            breaks.extend_from_slice(line_break.as_bytes());
        }

        if *block_indent == 0 {
            *block_indent = max_indent.max(self.content_col()).max(1);
        }
        Ok(())
    }

    fn fetch_flow_scalar(&mut self, single: bool) -> ScanResult {
        self.save_simple_key()?;
        self.simple_key_allowed = false;

        let start_mark = self.mark;
        let mut scalar = self.pool.checkout();
        let mut whitespaces = mem::take(&mut self.buf_whitespaces);
        let mut trailing_breaks = mem::take(&mut self.buf_trailing_breaks);
        whitespaces.clear();
        trailing_breaks.clear();

        let mut leading_break = LineBreak::None;

        // left quote
        self.skip_non_blank(1);

        let result = loop {
            if self.mark.col == 0 && self.src.next_is_document_indicator() {
                break Err(TokenizerError::new_str(
                    self.mark,
                    "While scanning a quoted scalar, found unexpected document indicator",
                ));
            }

            if self.src.buf_is_empty() {
                break Err(TokenizerError::new_str(
                    self.mark,
                    "While scanning a quoted scalar, found unexpected end of stream",
                ));
            }

            let mut leading_blanks = false;
            match self.consume_flow_scalar_non_whitespace(single, &mut scalar, &mut leading_blanks) {
                Ok(true) => break Ok(()),
                Ok(false) => {}
                Err(err) => break Err(err),
            }

            // blanks and line breaks
            while self.src.next_is_blank_or_break() {
                if self.src.next_is_blank() {
                    if !leading_blanks {
                        whitespaces.push(self.src.peekz());
                    }
                    self.skip_non_blank(1);
                } else if leading_blanks {
                    let line_break = self.consume_line_break();
                    trailing_breaks.extend_from_slice(line_break.as_bytes());
                } else {
                    whitespaces.clear();
                    leading_break = self.consume_line_break();
                    leading_blanks = true;
                }
            }

            if leading_blanks {
                join_folded_lines(&mut scalar, &mut leading_break, &mut trailing_breaks);
            } else {
                scalar.write_slice(&whitespaces);
                whitespaces.clear();
            }
        };

        whitespaces.clear();
        trailing_breaks.clear();
        self.buf_whitespaces = whitespaces;
        self.buf_trailing_breaks = trailing_breaks;

        if let Err(err) = result {
            self.pool.checkin(scalar);
            return Err(err);
        }

        // right quote
        self.skip_non_blank(1);
        // a JSON-like key may be followed by `:` without a space
        self.adjacent_value_allowed_at = self.mark.pos;

        let token_type = if single {
            TokenType::SingleQuotedScalar(scalar)
        } else {
            TokenType::DoubleQuotedScalar(scalar)
        };
        self.enqueue(token_type, start_mark);
        Ok(())
    }

    /// Copies content up to the next blank or break. Returns `true` when the
    /// closing quote was reached.
    fn consume_flow_scalar_non_whitespace(
        &mut self,
        single: bool,
        scalar: &mut Scalar,
        leading_blanks: &mut bool,
    ) -> TokenizerResult<bool> {
        while !self.src.buf_is_empty() && !self.src.next_is_blank_or_break() {
            match self.src.peekz() {
                b'\'' if single && self.src.peekz_n1() == b'\'' => {
                    scalar.write(b'\'');
                    self.skip_non_blank(2);
                }
                b'\'' if single => return Ok(true),
                b'"' if !single => return Ok(true),
                b'\\' if !single && is_break(self.src.peekz_n1()) => {
                    self.skip_non_blank(1);
                    self.consume_line_break();
                    *leading_blanks = true;
                    break;
                }
                b'\\' if !single => self.scan_escape_sequence(scalar)?,
                c => {
                    scalar.write(c);
                    self.skip_non_blank(1);
                }
            }
        }
        Ok(false)
    }

    fn scan_escape_sequence(&mut self, scalar: &mut Scalar) -> ScanResult {
        let mut code_length = 0usize;
        match self.src.peekz_n1() {
            b'0' => scalar.write(b'\0'),
            b'a' => scalar.write(0x07),
            b'b' => scalar.write(0x08),
            b't' | b'\t' => scalar.write(b'\t'),
            b'n' => scalar.write(b'\n'),
            b'v' => scalar.write(0x0B),
            b'f' => scalar.write(0x0C),
            b'r' => scalar.write(b'\r'),
            b'e' => scalar.write(0x1B),
            b' ' => scalar.write(b' '),
            b'"' => scalar.write(b'"'),
            b'/' => scalar.write(b'/'),
            b'\'' => scalar.write(b'\''),
            b'\\' => scalar.write(b'\\'),
            // NEL (#x85)
            b'N' => scalar.write_unicode_codepoint('\u{85}'),
            // NBSP (#xA0)
            b'_' => scalar.write_unicode_codepoint('\u{A0}'),
            // LS (#x2028)
            b'L' => scalar.write_unicode_codepoint('\u{2028}'),
            // PS (#x2029)
            b'P' => scalar.write_unicode_codepoint('\u{2029}'),
            b'x' => code_length = 2,
            b'u' => code_length = 4,
            b'U' => code_length = 8,
            _ => {
                return Err(TokenizerError::new_str(
                    self.mark,
                    "While parsing a quoted scalar, found unknown escape character",
                ));
            }
        }
        self.skip_non_blank(2);

        if code_length > 0 {
            let mut value = 0u32;
            for i in 0..code_length {
                let c = self.src.peekz_arbitrary(i);
                if !is_hex(c) {
                    return Err(TokenizerError::new_str(
                        self.mark,
                        "While parsing a quoted scalar, did not find expected hexadecimal number",
                    ));
                }
                value = (value << 4) + as_hex(c);
            }
            let ch = char::from_u32(value).ok_or_else(|| {
                TokenizerError::new_str(
                    self.mark,
                    "While parsing a quoted scalar, found invalid Unicode character escape code",
                )
            })?;
            scalar.write_unicode_codepoint(ch);
            self.skip_non_blank(code_length);
        }
        Ok(())
    }

    fn fetch_plain_scalar(&mut self) -> ScanResult {
        self.save_simple_key()?;
        self.simple_key_allowed = false;

        let start_mark = self.mark;
        let indent = self.indent + 1;
        let mut scalar = self.pool.checkout();
        let mut whitespaces = mem::take(&mut self.buf_whitespaces);
        let mut trailing_breaks = mem::take(&mut self.buf_trailing_breaks);
        whitespaces.clear();
        trailing_breaks.clear();

        let mut leading_break = LineBreak::None;
        let mut leading_blanks = false;
        let mut tab_in_indent = None;

        loop {
            if self.mark.col == 0 && self.src.next_is_document_indicator() {
                break;
            }
            if self.src.peekz() == b'#' {
                break;
            }

            while !self.src.buf_is_empty() && !self.src.next_is_blank_or_break() {
                let c = self.src.peekz();
                if c == b':' {
                    let nc = self.src.peek_check(1);
                    if nc.map_or(true, is_blank_or_break)
                        || (self.flow_level > 0 && nc.map_or(false, is_flow))
                    {
                        break;
                    }
                } else if self.flow_level > 0 && is_flow(c) {
                    break;
                }

                if leading_blanks {
                    join_folded_lines(&mut scalar, &mut leading_break, &mut trailing_breaks);
                    leading_blanks = false;
                } else if !whitespaces.is_empty() {
                    scalar.write_slice(&whitespaces);
                    whitespaces.clear();
                }

                scalar.write(c);
                self.skip_non_blank(1);
            }

            if self.src.buf_is_empty() || !self.src.next_is_blank_or_break() {
                break;
            }

            while self.src.next_is_blank_or_break() {
                if self.src.next_is_blank() {
                    if leading_blanks && self.col() < indent && self.src.peekz() == TAB {
                        tab_in_indent = Some(self.mark);
                        break;
                    }
                    if !leading_blanks {
                        whitespaces.push(self.src.peekz());
                    }
                    self.skip_non_blank(1);
                } else if leading_blanks {
                    let line_break = self.consume_line_break();
                    trailing_breaks.extend_from_slice(line_break.as_bytes());
                } else {
                    leading_break = self.consume_line_break();
                    leading_blanks = true;
                    whitespaces.clear();
                }
            }

            if tab_in_indent.is_some() || (self.flow_level == 0 && self.col() < indent) {
                break;
            }
        }

        whitespaces.clear();
        trailing_breaks.clear();
        self.buf_whitespaces = whitespaces;
        self.buf_trailing_breaks = trailing_breaks;

        if let Some(mark) = tab_in_indent {
            self.pool.checkin(scalar);
            return Err(TokenizerError::new_str(
                mark,
                "While scanning a plain scalar, found a tab",
            ));
        }
        if scalar.is_empty() {
            self.pool.checkin(scalar);
            return Err(TokenizerError::new_str(
                start_mark,
                "While scanning a plain scalar, found unexpected character",
            ));
        }

        if leading_blanks {
            self.simple_key_allowed = true;
        }
        self.enqueue(TokenType::PlainScalar(scalar), start_mark);
        Ok(())
    }

    fn skip_to_next_token(&mut self) -> ScanResult {
        loop {
            if self.src.buf_is_empty() {
                return Ok(());
            }
            match self.src.peekz() {
                SPACE => self.skip_non_blank(1),
                TAB if self.flow_level > 0 || !self.simple_key_allowed => self.skip_non_blank(1),
                b'\r' | b'\n' => {
                    self.consume_line_break();
                    if self.flow_level == 0 {
                        self.simple_key_allowed = true;
                    }
                }
                b'#' => self.skip_comment(),
                0xEF if self.src.next_is_bom() => self.skip_bom()?,
                _ => return Ok(()),
            }
        }
    }

    /// A byte order mark may open the stream or a document.
    fn skip_bom(&mut self) -> ScanResult {
        let at_stream_start = self.mark.pos == 0;
        self.src.skip(3);
        self.mark.pos += 3;
        self.mark.col = 0;

        if at_stream_start || self.after_document_end() || self.src.next_is_document_indicator() {
            Ok(())
        } else {
            Err(TokenizerError::new_str(
                self.mark,
                "BOM must be at the beginning of the stream or document.",
            ))
        }
    }

    fn after_document_end(&self) -> bool {
        let last = match self.tokens.peek_back() {
            Some(token) => Some(&token.token_type),
            None => self.current_token_type(),
        };
        matches!(last, Some(TokenType::DocumentEnd))
    }

    fn skip_comment(&mut self) {
        let len = self.src.count_until_break();
        self.skip_non_blank(len);
    }

    fn skip_blanks(&mut self) {
        while self.src.next_is_blank() {
            self.skip_non_blank(1);
        }
    }

    /// Skips `count` bytes that are known not to be line breaks.
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn skip_non_blank(&mut self, count: usize) {
        let before = self.src.pos();
        self.src.skip(count);
        let skipped = self.src.pos() - before;
        self.mark.pos += skipped;
        self.mark.col += skipped;
    }

    fn consume_line_break(&mut self) -> LineBreak {
        let line_break = match (self.src.peekz(), self.src.peekz_n1()) {
            (b'\r', b'\n') => LineBreak::CrLf,
            (b'\r', _) => LineBreak::Cr,
            (b'\n', _) => LineBreak::Lf,
            _ => return LineBreak::None,
        };
        let len = line_break.as_bytes().len();
        self.src.skip(len);
        self.mark.pos += len;
        self.mark.line += 1;
        self.mark.col = 0;
        line_break
    }

    fn stale_simple_keys(&mut self) -> ScanResult {
        let mark = self.mark;
        for sk in self.simple_keys.as_mut_slice() {
            if sk.possible
                && (sk.mark.line < mark.line || sk.mark.pos + SIMPLE_KEY_WINDOW < mark.pos)
            {
                if sk.required {
                    return Err(TokenizerError::new_str(mark, "Simple key expect ':'"));
                }
                sk.possible = false;
            }
        }
        Ok(())
    }

    fn save_simple_key(&mut self) -> ScanResult {
        if !self.simple_key_allowed {
            return Ok(());
        }

        let sk = SimpleKey {
            possible: true,
            required: self.flow_level == 0 && self.indent == self.col(),
            token_number: self.tokens_parsed + self.tokens.len(),
            mark: self.mark,
        };

        self.remove_simple_key()?;
        if let Some(last) = self.simple_keys.peek_mut() {
            *last = sk;
        }
        Ok(())
    }

    fn remove_simple_key(&mut self) -> ScanResult {
        if let Some(last) = self.simple_keys.peek_mut() {
            if last.possible && last.required {
                return Err(TokenizerError::new_str(self.mark, "Simple key expected"));
            }
            last.possible = false;
        }
        Ok(())
    }

    fn roll_indent(
        &mut self,
        col: usize,
        number: Option<usize>,
        token_type: TokenType,
        mark: Marker,
    ) -> ScanResult {
        let col = isize::try_from(col).unwrap_or(isize::MAX);
        if self.flow_level > 0 || self.indent >= col {
            return Ok(());
        }

        self.indents.push(self.indent);
        self.indent = col;
        match number {
            Some(number) => self.insert_token(number, Token::new(token_type, mark)),
            None => {
                self.enqueue(token_type, mark);
                Ok(())
            }
        }
    }

    fn unroll_indent(&mut self, col: isize) {
        if self.flow_level > 0 {
            return;
        }
        while self.indent > col {
            self.enqueue(TokenType::BlockEnd, self.mark);
            self.indent = self.indents.try_pop().unwrap_or(-1);
        }
    }

    fn increase_flow_level(&mut self) {
        self.simple_keys.push(SimpleKey::default());
        self.flow_level += 1;
    }

    fn decrease_flow_level(&mut self) {
        if self.flow_level > 0 {
            self.flow_level -= 1;
            self.simple_keys.try_pop();
        }
    }

    fn enqueue(&mut self, token_type: TokenType, mark: Marker) {
        self.tokens.enqueue(Token::new(token_type, mark));
    }

    /// Inserts a token before the one that was the `number`-th produced.
    fn insert_token(&mut self, number: usize, token: Token) -> ScanResult {
        let position = number.checked_sub(self.tokens_parsed).ok_or_else(|| {
            TokenizerError::new_str(self.mark, "Simple key refers to a consumed token")
        })?;
        self.tokens
            .insert(position, token)
            .map_err(|err| TokenizerError::new_str(self.mark, &err.to_string()))
    }

    fn col(&self) -> isize {
        isize::try_from(self.mark.col).unwrap_or(isize::MAX)
    }

    /// First column that belongs to the content of the current block.
    fn content_col(&self) -> usize {
        usize::try_from(self.indent + 1).unwrap_or(0)
    }

    fn utf8_string(&self, bytes: Vec<u8>) -> TokenizerResult<String> {
        String::from_utf8(bytes)
            .map_err(|_| TokenizerError::new_str(self.mark, "Tag is not valid UTF-8"))
    }
}

fn chomp_indicator(c: u8) -> ChompIndicator {
    if c == b'+' {
        ChompIndicator::Keep
    } else {
        ChompIndicator::Strip
    }
}

/// Folds the line breaks collected between two content runs of a flow or
/// plain scalar: a single break becomes a space, further breaks are kept.
fn join_folded_lines(scalar: &mut Scalar, leading_break: &mut LineBreak, trailing_breaks: &mut Vec<u8>) {
    if *leading_break == LineBreak::None {
        scalar.write_slice(trailing_breaks);
    } else {
        if trailing_breaks.is_empty() {
            scalar.write(SPACE);
        } else {
            scalar.write_slice(trailing_breaks);
        }
        *leading_break = LineBreak::None;
    }
    trailing_breaks.clear();
}

impl Iterator for Tokenizer<'_> {
    type Item = TokenizerResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read() {
            Ok(true) => self.take_current_token().map(Ok),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Tokenizer;
    use crate::tokenizer::TokenType;
    use liteyaml_common::{Tag, VersionDirective};

    fn tokens(input: &str) -> Vec<String> {
        Tokenizer::new(input.as_bytes())
            .map(|tok| tok.map(|tok| tok.token_type.to_string()))
            .collect::<Result<_, _>>()
            .unwrap()
    }

    fn first_error(input: &str) -> String {
        Tokenizer::new(input.as_bytes())
            .find_map(Result::err)
            .map(|err| err.message)
            .unwrap_or_default()
    }

    #[test]
    fn block_mapping_gets_key_inserted() {
        assert_eq!(
            tokens("a: 1"),
            vec![
                "StreamStart",
                "BlockMappingStart",
                "KeyStart",
                "PlainScalar(a)",
                "ValueStart",
                "PlainScalar(1)",
                "BlockEnd",
                "StreamEnd",
            ]
        );
    }

    #[test]
    fn block_sequence_in_mapping() {
        assert_eq!(
            tokens("k:\n  - x\n  - y\n"),
            vec![
                "StreamStart",
                "BlockMappingStart",
                "KeyStart",
                "PlainScalar(k)",
                "ValueStart",
                "BlockSequenceStart",
                "BlockEntryStart",
                "PlainScalar(x)",
                "BlockEntryStart",
                "PlainScalar(y)",
                "BlockEnd",
                "BlockEnd",
                "StreamEnd",
            ]
        );
    }

    #[test]
    fn flow_mapping_keys() {
        assert_eq!(
            tokens("{a: [b, c]}"),
            vec![
                "StreamStart",
                "FlowMappingStart",
                "KeyStart",
                "PlainScalar(a)",
                "ValueStart",
                "FlowSequenceStart",
                "PlainScalar(b)",
                "FlowEntryStart",
                "PlainScalar(c)",
                "FlowSequenceEnd",
                "FlowMappingEnd",
                "StreamEnd",
            ]
        );
    }

    #[test]
    fn json_like_key_allows_adjacent_value() {
        assert_eq!(
            tokens(r#"{"a":b}"#),
            vec![
                "StreamStart",
                "FlowMappingStart",
                "KeyStart",
                "DoubleQuotedScalar(a)",
                "ValueStart",
                "PlainScalar(b)",
                "FlowMappingEnd",
                "StreamEnd",
            ]
        );
    }

    #[test]
    fn directives() {
        let mut tokenizer = Tokenizer::new(b"%YAML 1.2\n%TAG !e! tag:example.com,2000:\n---\n");
        assert!(tokenizer.read().unwrap());
        assert!(tokenizer.read().unwrap());
        assert_eq!(
            tokenizer.current_token_type(),
            Some(&TokenType::VersionDirective(VersionDirective { major: 1, minor: 2 }))
        );
        assert!(tokenizer.read().unwrap());
        assert_eq!(
            tokenizer.current_token_type(),
            Some(&TokenType::TagDirective(Tag::new("!e!", "tag:example.com,2000:")))
        );
        assert!(tokenizer.read().unwrap());
        assert_eq!(tokenizer.current_token_type(), Some(&TokenType::DocumentStart));
    }

    #[test]
    fn unknown_directive_is_lenient() {
        assert_eq!(
            tokens("%FOO bar baz\n--- a"),
            vec![
                "StreamStart",
                "TagDirective( )",
                "DocumentStart",
                "PlainScalar(a)",
                "StreamEnd",
            ]
        );
    }

    #[test]
    fn tags() {
        assert_eq!(
            tokens("- !!str a\n- !local b\n- !<tag:x> c\n- ! d\n- !e!%21 f"),
            vec![
                "StreamStart",
                "BlockSequenceStart",
                "BlockEntryStart",
                "Tag(!! str)",
                "PlainScalar(a)",
                "BlockEntryStart",
                "Tag(! local)",
                "PlainScalar(b)",
                "BlockEntryStart",
                "Tag( tag:x)",
                "PlainScalar(c)",
                "BlockEntryStart",
                "Tag( !)",
                "PlainScalar(d)",
                "BlockEntryStart",
                "Tag(!e! !)",
                "PlainScalar(f)",
                "BlockEnd",
                "StreamEnd",
            ]
        );
    }

    #[test]
    fn anchors_and_aliases() {
        assert_eq!(
            tokens("- &a x\n- *a"),
            vec![
                "StreamStart",
                "BlockSequenceStart",
                "BlockEntryStart",
                "Anchor(a)",
                "PlainScalar(x)",
                "BlockEntryStart",
                "Alias(a)",
                "BlockEnd",
                "StreamEnd",
            ]
        );
        assert!(first_error("&").contains("anchor or alias"));
        assert!(first_error("*a#").contains("anchor or alias"));
    }

    #[test]
    fn plain_scalar_folding() {
        assert_eq!(
            tokens("a\n  b\n\n  c"),
            vec!["StreamStart", "PlainScalar(a b\nc)", "StreamEnd"]
        );
    }

    #[test]
    fn quoted_scalars() {
        assert_eq!(
            tokens(r#"- 'it''s'
- "tab\tnl\n\x41\u00e9"
- "line
  folded\
  joined""#),
            vec![
                "StreamStart",
                "BlockSequenceStart",
                "BlockEntryStart",
                "SingleQuotedScalar(it's)",
                "BlockEntryStart",
                "DoubleQuotedScalar(tab\tnl\nA\u{e9})",
                "BlockEntryStart",
                "DoubleQuotedScalar(line foldedjoined)",
                "BlockEnd",
                "StreamEnd",
            ]
        );
    }

    #[test]
    fn block_scalars() {
        assert_eq!(
            tokens("a: |\n  x\n  y\n\nb: >-\n  p\n  q\n"),
            vec![
                "StreamStart",
                "BlockMappingStart",
                "KeyStart",
                "PlainScalar(a)",
                "ValueStart",
                "LiteralScalar(x\ny\n)",
                "KeyStart",
                "PlainScalar(b)",
                "ValueStart",
                "FoldedScalar(p q)",
                "BlockEnd",
                "StreamEnd",
            ]
        );
    }

    #[test]
    fn block_scalar_keep_and_eof() {
        assert_eq!(
            tokens("|+\n  a\n\n"),
            vec!["StreamStart", "LiteralScalar(a\n\n)", "StreamEnd"]
        );
        assert_eq!(
            tokens("|\n  a"),
            vec!["StreamStart", "LiteralScalar(a\n)", "StreamEnd"]
        );
    }

    #[test]
    fn errors() {
        assert!(first_error("|0\n a").contains("indentation indicator equal to 0"));
        assert!(first_error("\"abc").contains("unexpected end of stream"));
        assert!(first_error("'abc\n---\n'").contains("document indicator"));
        assert!(first_error("\"\\q\"").contains("unknown escape character"));
        assert!(first_error("[- a]").contains("only valid inside a block"));
        assert!(first_error("@a").contains("Unexpected character"));
        assert!(first_error("|\n \tx").contains("tab character"));
        assert!(first_error("key: value\nplain\n").contains("Simple key"));
    }

    #[test]
    fn bom_positions() {
        assert_eq!(tokens("\u{feff}a"), vec!["StreamStart", "PlainScalar(a)", "StreamEnd"]);
        assert_eq!(
            tokens("a\n...\n\u{feff}--- b"),
            vec![
                "StreamStart",
                "PlainScalar(a)",
                "DocumentEnd",
                "DocumentStart",
                "PlainScalar(b)",
                "StreamEnd",
            ]
        );
        assert!(first_error("- a\n\u{feff}- b").contains("BOM"));
    }

    #[test]
    fn markers_track_lines_and_columns() {
        let mut tokenizer = Tokenizer::new(b"a:\n  b: c");
        let mut marks = Vec::new();
        while tokenizer.read().unwrap() {
            if let Some(tok) = tokenizer.current_token() {
                if let TokenType::PlainScalar(_) = tok.token_type {
                    marks.push((tok.mark.line, tok.mark.col, tok.mark.pos));
                }
            }
        }
        assert_eq!(marks, vec![(1, 0, 0), (2, 2, 5), (2, 5, 8)]);
    }

    #[test]
    fn pool_is_reused_across_reads() {
        let mut tokenizer = Tokenizer::new(b"[a, b, c, d]");
        while tokenizer.read().unwrap() {}
        let pool = tokenizer.into_pool();
        assert!(pool.available() >= 1);
    }
}
