//! `(: ... :)` comment body.
//!
//! The host has already consumed `(:`. Nested comments are balanced inside
//! a single `CONTENTS` token, so the machine needs no depth in its state.

use xq_lexer_core::{CodepointCursor, StateMachine, Step, TokenKind, END_OF_BUFFER};

use crate::char_class::is_whitespace;
use crate::xquery::lookahead;

const LEADING: u16 = 0;
const BODY: u16 = 1;

#[derive(Clone, Copy, Debug, Default)]
pub struct CommentMachine;

impl StateMachine for CommentMachine {
    fn advance(&self, cursor: &mut CodepointCursor<'_>, state: u16) -> Step {
        let cp = cursor.codepoint();
        if cp == END_OF_BUFFER {
            return Step::exit(TokenKind::UnexpectedEndOfBlock);
        }
        if lookahead(cursor, ":)") {
            cursor.advance();
            cursor.advance();
            return Step::exit(TokenKind::CommentEndTag);
        }
        if state == LEADING && is_whitespace(cp) {
            cursor.advance_while(is_whitespace);
            return Step::stay(TokenKind::WhiteSpace, BODY);
        }
        skip_body(cursor);
        Step::stay(TokenKind::Contents, BODY)
    }
}

/// Advance to the `:)` that closes the current comment, or to the end.
/// Leaves the closing `:)` unconsumed and returns whether it was found.
pub(crate) fn skip_body(cursor: &mut CodepointCursor<'_>) -> bool {
    let mut depth = 0u32;
    loop {
        if cursor.is_at_end() {
            return false;
        }
        if lookahead(cursor, ":)") {
            if depth == 0 {
                return true;
            }
            depth -= 1;
            cursor.advance();
            cursor.advance();
        } else if lookahead(cursor, "(:") {
            depth += 1;
            cursor.advance();
            cursor.advance();
        } else {
            cursor.advance();
        }
    }
}
