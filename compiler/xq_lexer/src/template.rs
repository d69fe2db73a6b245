//! Attribute value templates: literal text with `{expr}` holes.
//!
//! [`ValueTemplateMachine`] is the host. `{` hands over to
//! [`TemplateExpressionMachine`] on [`TEMPLATE_EXPRESSION`], which scans
//! XQuery until the `}` that balances the opening brace.
//!
//! Embedded channels do not nest, so inside an expression a comment or a
//! braced URI literal is scanned whole, as one `COMMENT` or
//! `BRACED_URI_LITERAL` token. An xqDoc comment closes at its first `:)` as
//! it does in the host. Cut off by the end of input, these become
//! `UNTERMINATED_COMMENT` or `UNTERMINATED_BRACED_URI_LITERAL`.

use xq_lexer_core::{
    Channel, CodepointCursor, StateMachine, Step, TokenKind, Transition, END_OF_BUFFER,
};

use crate::xquery::{self, XQueryMachine};
use crate::{braced_uri, comment, xqdoc, BRACED_URI, TEMPLATE_EXPRESSION, XQDOC};

const OPEN: u32 = 0x7B;
const CLOSE: u32 = 0x7D;

/// Host scanner for value template text.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueTemplateMachine;

impl StateMachine for ValueTemplateMachine {
    fn advance(&self, cursor: &mut CodepointCursor<'_>, _state: u16) -> Step {
        let cp = cursor.codepoint();
        match cp {
            OPEN | CLOSE => {
                cursor.advance();
                if cursor.codepoint() == cp {
                    cursor.advance();
                    Step::stay(TokenKind::EscapedCharacter, 0)
                } else if cp == OPEN {
                    Step::enter(TokenKind::ValueTemplateOpen, TEMPLATE_EXPRESSION, 0, 0)
                } else {
                    Step::stay(TokenKind::BadCharacter, 0)
                }
            }
            _ => {
                cursor.advance_while(|cp| cp != OPEN && cp != CLOSE);
                Step::stay(TokenKind::ValueContents, 0)
            }
        }
    }
}

/// Packs `{}` nesting depth (bits 8-15) and the XQuery private state
/// (bits 0-7).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ExprState {
    depth: u8,
    inner: u8,
}

impl ExprState {
    fn unpack(state: u16) -> Self {
        let [depth, inner] = state.to_be_bytes();
        ExprState { depth, inner }
    }

    fn pack(self) -> u16 {
        u16::from_be_bytes([self.depth, self.inner])
    }
}

/// Scanner for the expression inside `{ ... }` of a value template.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateExpressionMachine;

impl StateMachine for TemplateExpressionMachine {
    fn advance(&self, cursor: &mut CodepointCursor<'_>, state: u16) -> Step {
        let ExprState { depth, inner } = ExprState::unpack(state);
        let cp = cursor.codepoint();

        if cp == END_OF_BUFFER {
            return Step::exit(TokenKind::UnexpectedEndOfBlock);
        }
        if cp == CLOSE && depth == 0 && u16::from(inner) == xquery::DEFAULT {
            cursor.advance();
            return Step::exit(TokenKind::ValueTemplateClose);
        }

        let step = XQueryMachine.advance(cursor, u16::from(inner));
        let (kind, inner) = match step.next {
            Transition::Stay(next) => (step.kind, next),
            Transition::Exit => (step.kind, xquery::DEFAULT),
            Transition::Enter {
                channel, resume, ..
            } => (inline_region(cursor, channel), resume),
        };

        let depth = match kind {
            TokenKind::BlockOpen => depth.saturating_add(1),
            TokenKind::BlockClose => depth.saturating_sub(1),
            _ => depth,
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "XQuery private states fit in eight bits"
        )]
        let inner = inner as u8;
        Step::stay(kind, ExprState { depth, inner }.pack())
    }
}

/// Scan the rest of a comment or braced URI literal whose opening the
/// XQuery machine has just consumed.
fn inline_region(cursor: &mut CodepointCursor<'_>, channel: Channel) -> TokenKind {
    if channel == BRACED_URI {
        return if braced_uri::skip_body(cursor) {
            TokenKind::BracedUriLiteral
        } else {
            TokenKind::UnterminatedBracedUriLiteral
        };
    }
    let closed = if channel == XQDOC {
        xqdoc::skip_body(cursor)
    } else {
        comment::skip_body(cursor)
    };
    if closed {
        cursor.advance();
        cursor.advance();
        TokenKind::Comment
    } else {
        TokenKind::UnterminatedComment
    }
}
