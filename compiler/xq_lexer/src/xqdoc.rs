//! xqDoc comment body: `(:~ ... :)`.
//!
//! The host has consumed `(:`; this machine starts on the `~`. Line breaks
//! together with the following indentation and optional `:` continuation
//! marker are `TRIM` tokens, so a consumer can strip the comment decoration
//! without re-scanning. A `@` at the start of a line opens a tag; `@param`
//! is followed by the parameter's `$name`.
//!
//! Nested comments are not recognized inside xqDoc; the first `:)` closes.

use xq_lexer_core::{CodepointCursor, StateMachine, Step, TokenKind, END_OF_BUFFER};

use crate::char_class::{is_name_char, is_name_start_char, is_newline, is_whitespace};
use crate::xquery::lookahead;

const MARKER: u16 = 0;
const TEXT: u16 = 1;
const LINE_START: u16 = 2;
const TAG: u16 = 3;
const AFTER_TAG: u16 = 4;
const AFTER_PARAM: u16 = 5;
const PARAM_VARIABLE: u16 = 6;
const PARAM_NAME: u16 = 7;

#[derive(Clone, Copy, Debug, Default)]
pub struct XqDocMachine;

impl StateMachine for XqDocMachine {
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
        if is_newline(cp) {
            return trim(cursor);
        }

        match state {
            MARKER if cursor.advance_if('~') => {
                return Step::stay(TokenKind::XqDocCommentMarker, TEXT);
            }
            LINE_START if is_inline_space(cp) => {
                cursor.advance_while(is_inline_space);
                return Step::stay(TokenKind::WhiteSpace, LINE_START);
            }
            LINE_START if cursor.advance_if('@') => {
                return Step::stay(TokenKind::TagMarker, TAG);
            }
            TAG if is_name_start_char(cp) => {
                cursor.advance_while(is_name_char);
                let next = if cursor.token_text_eq("param") {
                    AFTER_PARAM
                } else {
                    AFTER_TAG
                };
                return Step::stay(TokenKind::Tag, next);
            }
            AFTER_TAG | AFTER_PARAM if is_inline_space(cp) => {
                cursor.advance_while(is_inline_space);
                let next = if state == AFTER_PARAM { PARAM_VARIABLE } else { TEXT };
                return Step::stay(TokenKind::WhiteSpace, next);
            }
            AFTER_PARAM | PARAM_VARIABLE if cursor.advance_if('$') => {
                return Step::stay(TokenKind::VariableIndicator, PARAM_NAME);
            }
            PARAM_NAME if is_name_start_char(cp) => {
                cursor.advance_while(is_name_char);
                return Step::stay(TokenKind::NcName, TEXT);
            }
            _ => {}
        }

        contents(cursor);
        Step::stay(TokenKind::Contents, TEXT)
    }
}

fn is_inline_space(cp: u32) -> bool {
    is_whitespace(cp) && !is_newline(cp)
}

/// Line break, indentation, and a `:` continuation marker unless that `:`
/// starts the closing `:)`.
fn trim(cursor: &mut CodepointCursor<'_>) -> Step {
    if cursor.advance_if('\r') {
        cursor.advance_if('\n');
    } else {
        cursor.advance();
    }
    cursor.advance_while(is_inline_space);
    if u32::from(b':') == cursor.codepoint() && !lookahead(cursor, ":)") {
        cursor.advance();
    }
    Step::stay(TokenKind::Trim, LINE_START)
}

/// Text up to the end of the line or the closing `:)`.
fn contents(cursor: &mut CodepointCursor<'_>) {
    loop {
        cursor.advance();
        let cp = cursor.codepoint();
        if cp == END_OF_BUFFER || is_newline(cp) || lookahead(cursor, ":)") {
            return;
        }
    }
}

/// Advance to the first `:)`, or to the end. Leaves the `:)` unconsumed
/// and returns whether it was found.
pub(crate) fn skip_body(cursor: &mut CodepointCursor<'_>) -> bool {
    while !cursor.is_at_end() {
        if lookahead(cursor, ":)") {
            return true;
        }
        cursor.advance();
    }
    false
}
