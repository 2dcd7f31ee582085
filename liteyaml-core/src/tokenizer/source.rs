use crate::char_utils::{is_blank, is_blank_or_break, is_break, is_flow, BOM, CR, LF};

/// Cursor over a complete UTF-8 byte buffer.
///
/// Peeks past the end of the input yield `b'\0'`. Callers that must tell a
/// literal NUL byte from the end of input use [`Source::buf_is_empty`] or
/// [`Source::peek_check`].
#[derive(Debug, Clone)]
pub struct Source<'input> {
    input: &'input [u8],
    pos: usize,
}

impl<'input> Source<'input> {
    #[must_use]
    pub fn new(input: &'input [u8]) -> Self {
        Source { input, pos: 0 }
    }

    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    #[must_use]
    pub fn peek_check(&self, n: usize) -> Option<u8> {
        self.input.get(self.pos + n).copied()
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    #[must_use]
    pub fn peekz_arbitrary(&self, n: usize) -> u8 {
        self.peek_check(n).unwrap_or(0)
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    #[must_use]
    pub fn peekz(&self) -> u8 {
        self.peekz_arbitrary(0)
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    #[must_use]
    pub fn peekz_n1(&self) -> u8 {
        self.peekz_arbitrary(1)
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    #[must_use]
    pub fn peekz_n2(&self) -> u8 {
        self.peekz_arbitrary(2)
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    #[must_use]
    pub fn buf_is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Bytes not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &'input [u8] {
        &self.input[self.pos.min(self.input.len())..]
    }

    /// Number of bytes before the next `\r`, `\n` or the end of input.
    #[must_use]
    pub fn count_until_break(&self) -> usize {
        let haystack = self.remaining();
        memchr::memchr2(CR, LF, haystack).unwrap_or(haystack.len())
    }

    /// Blank, break or end of input at offset `n`.
    #[cfg_attr(not(feature = "no-inline"), inline)]
    #[must_use]
    pub fn is_blank_or_breakz_at(&self, n: usize) -> bool {
        self.peek_check(n).map_or(true, is_blank_or_break)
    }

    #[must_use]
    pub fn next_is_blank(&self) -> bool {
        is_blank(self.peekz())
    }

    #[must_use]
    pub fn next_is_break(&self) -> bool {
        is_break(self.peekz())
    }

    #[must_use]
    pub fn next_is_blank_or_break(&self) -> bool {
        is_blank_or_break(self.peekz())
    }

    #[must_use]
    pub fn next_is_flow(&self) -> bool {
        is_flow(self.peekz())
    }

    #[must_use]
    pub fn next_is_three(&self, chr: u8) -> bool {
        self.peekz() == chr && self.peekz_n1() == chr && self.peekz_n2() == chr
    }

    /// `---` followed by a blank, a break or the end of input.
    #[must_use]
    pub fn next_is_document_start(&self) -> bool {
        self.next_is_three(b'-') && self.is_blank_or_breakz_at(3)
    }

    /// `...` followed by a blank, a break or the end of input.
    #[must_use]
    pub fn next_is_document_end(&self) -> bool {
        self.next_is_three(b'.') && self.is_blank_or_breakz_at(3)
    }

    #[must_use]
    pub fn next_is_document_indicator(&self) -> bool {
        self.next_is_document_start() || self.next_is_document_end()
    }

    #[must_use]
    pub fn next_is_bom(&self) -> bool {
        self.remaining().starts_with(&BOM)
    }
}
