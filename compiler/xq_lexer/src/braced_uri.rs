//! Body of a `Q{uri}` literal; the host has consumed `Q{`.

use xq_lexer_core::{CodepointCursor, StateMachine, Step, TokenKind, END_OF_BUFFER};

const OPEN: u32 = 0x7B;
const CLOSE: u32 = 0x7D;

#[derive(Clone, Copy, Debug, Default)]
pub struct BracedUriMachine;

impl StateMachine for BracedUriMachine {
    fn advance(&self, cursor: &mut CodepointCursor<'_>, _state: u16) -> Step {
        match cursor.codepoint() {
            END_OF_BUFFER => Step::exit(TokenKind::UnexpectedEndOfBlock),
            CLOSE => {
                cursor.advance();
                Step::exit(TokenKind::BracedUriLiteralEnd)
            }
            OPEN => {
                cursor.advance();
                Step::stay(TokenKind::BadCharacter, 0)
            }
            _ => {
                cursor.advance_while(|cp| cp != OPEN && cp != CLOSE);
                Step::stay(TokenKind::StringLiteralContents, 0)
            }
        }
    }
}

/// Advance past the closing `}` of a braced URI literal. Stops without
/// consuming at a `{` or the end of input, and then returns `false`.
pub(crate) fn skip_body(cursor: &mut CodepointCursor<'_>) -> bool {
    cursor.advance_while(|cp| cp != OPEN && cp != CLOSE);
    cursor.advance_if('}')
}
