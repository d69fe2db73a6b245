//! Pull-based lexer driver.
//!
//! One [`Lexer`] is one lexing session: a cursor over an immutable buffer,
//! a borrowed [`Composer`], and the current packed state. Every call to
//! [`next_token()`](Lexer::next_token) produces exactly one [`Token`]; there
//! is no lookahead buffer and no background work.

use crate::{CodepointCursor, Composer, LexerState, TokenKind, Utf16Buffer};

/// A scanned token.
///
/// `start..end` are UTF-16 offsets. `state` is the packed state *after* the
/// token, i.e. the state to resume with at `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub start: u32,
    pub end: u32,
    pub state: LexerState,
}

impl Token {
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Lexing session.
#[derive(Debug)]
pub struct Lexer<'a> {
    composer: &'a Composer,
    cursor: CodepointCursor<'a>,
    state: LexerState,
}

impl<'a> Lexer<'a> {
    /// Lex the whole buffer from the initial state.
    pub fn new(composer: &'a Composer, buffer: &'a Utf16Buffer) -> Self {
        Lexer {
            composer,
            cursor: buffer.cursor(),
            state: LexerState::INITIAL,
        }
    }

    /// Lex `units[offset..end]` starting in `state`.
    ///
    /// `state` must be a value previously reported at `offset` by a session
    /// over the same text (or [`LexerState::INITIAL`]). The tokens produced
    /// are then identical to those of a full session from offset 0.
    ///
    /// # Panics
    ///
    /// Panics unless `offset <= end <= units.len()`.
    pub fn resume(
        composer: &'a Composer,
        units: &'a [u16],
        offset: u32,
        end: u32,
        state: LexerState,
    ) -> Self {
        Lexer {
            composer,
            cursor: CodepointCursor::new(units, offset, end),
            state,
        }
    }

    /// State at the current position.
    #[inline]
    pub fn state(&self) -> LexerState {
        self.state
    }

    /// Current UTF-16 offset.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.cursor.token_end()
    }

    /// Scan the next token.
    ///
    /// Once the input is exhausted (and any embedded region has been closed)
    /// this keeps returning a zero-width [`TokenKind::EndOfBuffer`] without
    /// changing the state.
    pub fn next_token(&mut self) -> Token {
        self.cursor.flush();
        let start = self.cursor.token_start();

        if self.cursor.is_at_end() && self.state.is_host() {
            return Token {
                kind: TokenKind::EndOfBuffer,
                start,
                end: start,
                state: self.state,
            };
        }

        let before = self.state;
        let (kind, next) = self.composer.advance(&mut self.cursor, before);
        let end = self.cursor.token_end();

        debug_assert_eq!(
            self.cursor.save_depth(),
            0,
            "{kind} left cursor snapshots behind"
        );
        debug_assert!(
            end > start || (!before.is_host() && next.is_host()),
            "zero-width {kind} at {start} does not close an embedded region"
        );

        self.state = next;
        Token {
            kind,
            start,
            end,
            state: next,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::EndOfBuffer).then_some(token)
    }
}

/// Lex `source` in full. The trailing `EndOfBuffer` is not included.
pub fn tokenize(composer: &Composer, source: &str) -> Vec<Token> {
    let buffer = Utf16Buffer::new(source);
    Lexer::new(composer, &buffer).collect()
}
