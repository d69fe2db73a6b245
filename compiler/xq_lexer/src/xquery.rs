//! XQuery host scanner.
//!
//! Private states:
//!
//! | state | meaning |
//! |---|---|
//! | [`DEFAULT`] | between tokens |
//! | [`STRING_QUOT`] | inside a `"` string literal |
//! | [`STRING_APOS`] | inside a `'` string literal |
//! | [`XML_COMMENT`] | inside a direct `<!-- -->` comment |
//!
//! Comments and braced URI literals are handed to their own channels.

use xq_lexer_core::{CodepointCursor, StateMachine, Step, TokenKind, END_OF_BUFFER};

use crate::char_class::{is_digit, is_hex_digit, is_name_char, is_name_start_char, is_whitespace};
use crate::{BRACED_URI, COMMENT, XQDOC};

pub(crate) const DEFAULT: u16 = 0;
pub(crate) const STRING_QUOT: u16 = 1;
pub(crate) const STRING_APOS: u16 = 2;
pub(crate) const XML_COMMENT: u16 = 3;

/// Scanner for XQuery expressions and prologs.
#[derive(Clone, Copy, Debug, Default)]
pub struct XQueryMachine;

impl StateMachine for XQueryMachine {
    fn advance(&self, cursor: &mut CodepointCursor<'_>, state: u16) -> Step {
        match state {
            STRING_QUOT => string(cursor, '"', state),
            STRING_APOS => string(cursor, '\'', state),
            XML_COMMENT => xml_comment(cursor),
            _ => default(cursor),
        }
    }
}

#[inline]
fn is(cp: u32, c: char) -> bool {
    cp == u32::from(c)
}

/// Returns `true` if the text at the cursor spells `text`. Consumes nothing.
pub(crate) fn lookahead(cursor: &mut CodepointCursor<'_>, text: &str) -> bool {
    cursor.save();
    let matched = text.chars().all(|c| cursor.advance_if(c));
    cursor.restore();
    matched
}

fn default(cursor: &mut CodepointCursor<'_>) -> Step {
    let cp = cursor.codepoint();

    if is_whitespace(cp) {
        cursor.advance_while(is_whitespace);
        return Step::stay(TokenKind::WhiteSpace, DEFAULT);
    }
    if is(cp, 'Q') && is(cursor.peek(), '{') {
        cursor.advance();
        cursor.advance();
        return Step::enter(TokenKind::BracedUriLiteralStart, BRACED_URI, 0, DEFAULT);
    }
    if is_name_start_char(cp) {
        cursor.advance_while(is_name_char);
        return Step::stay(TokenKind::NcName, DEFAULT);
    }
    if is_digit(cp) || (is(cp, '.') && is_digit(cursor.peek())) {
        return Step::stay(number(cursor), DEFAULT);
    }

    cursor.advance();
    let kind = match char::from_u32(cp) {
        Some('"') => return Step::stay(TokenKind::StringLiteralStart, STRING_QUOT),
        Some('\'') => return Step::stay(TokenKind::StringLiteralStart, STRING_APOS),
        Some('(') => {
            if cursor.advance_if(':') {
                let channel = if is(cursor.codepoint(), '~') { XQDOC } else { COMMENT };
                return Step::enter(TokenKind::CommentStartTag, channel, 0, DEFAULT);
            }
            TokenKind::ParenthesisOpen
        }
        Some('<') => {
            cursor.save();
            if cursor.advance_if('!') && cursor.advance_if('-') && cursor.advance_if('-') {
                cursor.discard();
                return Step::stay(TokenKind::XmlCommentStartTag, XML_COMMENT);
            }
            cursor.restore();
            if cursor.advance_if('=') {
                TokenKind::LessEqual
            } else if cursor.advance_if('<') {
                TokenKind::NodeBefore
            } else {
                TokenKind::LessThan
            }
        }
        Some('>') => {
            if cursor.advance_if('=') {
                TokenKind::GreaterEqual
            } else if cursor.advance_if('>') {
                TokenKind::NodeAfter
            } else {
                TokenKind::GreaterThan
            }
        }
        Some(')') => TokenKind::ParenthesisClose,
        Some('[') => TokenKind::SquareOpen,
        Some(']') => TokenKind::SquareClose,
        Some('{') => TokenKind::BlockOpen,
        Some('}') => TokenKind::BlockClose,
        Some(',') => TokenKind::Comma,
        Some(';') => TokenKind::Separator,
        Some('@') => TokenKind::At,
        Some('$') => TokenKind::VariableIndicator,
        Some('%') => TokenKind::Annotation,
        Some('#') => TokenKind::Hash,
        Some('*') => TokenKind::Star,
        Some('+') => TokenKind::Plus,
        Some('-') => TokenKind::Minus,
        Some('?') => {
            if cursor.advance_if(':') {
                TokenKind::Elvis
            } else {
                TokenKind::Question
            }
        }
        Some('|') => {
            if cursor.advance_if('|') {
                TokenKind::Concatenation
            } else {
                TokenKind::Union
            }
        }
        Some('/') => {
            if cursor.advance_if('/') {
                TokenKind::DoubleSlash
            } else {
                TokenKind::Slash
            }
        }
        Some(':') => {
            if cursor.advance_if(':') {
                TokenKind::AxisSeparator
            } else if cursor.advance_if('=') {
                TokenKind::Assign
            } else {
                TokenKind::Colon
            }
        }
        Some('=') => {
            if cursor.advance_if('>') {
                TokenKind::Arrow
            } else {
                TokenKind::Equal
            }
        }
        Some('!') => {
            if cursor.advance_if('=') {
                TokenKind::NotEqual
            } else {
                TokenKind::Bang
            }
        }
        Some('.') => {
            if cursor.advance_if('.') {
                TokenKind::DotDot
            } else {
                TokenKind::Dot
            }
        }
        _ => TokenKind::BadCharacter,
    };
    Step::stay(kind, DEFAULT)
}

/// `IntegerLiteral`, `DecimalLiteral` or `DoubleLiteral`.
///
/// A `.` followed by another `.` is a range operator, not a fraction, and an
/// exponent marker without digits is not part of the number; both are
/// scanned speculatively and rolled back.
fn number(cursor: &mut CodepointCursor<'_>) -> TokenKind {
    let mut kind = TokenKind::IntegerLiteral;
    cursor.advance_while(is_digit);

    if is(cursor.codepoint(), '.') {
        cursor.save();
        cursor.advance();
        if is(cursor.codepoint(), '.') {
            cursor.restore();
            return kind;
        }
        cursor.discard();
        cursor.advance_while(is_digit);
        kind = TokenKind::DecimalLiteral;
    }

    let cp = cursor.codepoint();
    if is(cp, 'e') || is(cp, 'E') {
        cursor.save();
        cursor.advance();
        if !cursor.advance_if('+') {
            cursor.advance_if('-');
        }
        if is_digit(cursor.codepoint()) {
            cursor.discard();
            cursor.advance_while(is_digit);
            kind = TokenKind::DoubleLiteral;
        } else {
            cursor.restore();
        }
    }
    kind
}

fn string(cursor: &mut CodepointCursor<'_>, quote: char, state: u16) -> Step {
    let cp = cursor.codepoint();
    if is(cp, quote) {
        cursor.advance();
        if cursor.advance_if(quote) {
            return Step::stay(TokenKind::EscapedCharacter, state);
        }
        return Step::stay(TokenKind::StringLiteralEnd, DEFAULT);
    }
    if is(cp, '&') {
        return Step::stay(entity_reference(cursor), state);
    }
    let q = u32::from(quote);
    cursor.advance_while(|cp| cp != q && cp != u32::from(b'&'));
    Step::stay(TokenKind::StringLiteralContents, state)
}

const PREDEFINED_ENTITIES: &[&str] = &["&lt;", "&gt;", "&amp;", "&quot;", "&apos;"];

/// Scan a reference starting at `&`.
fn entity_reference(cursor: &mut CodepointCursor<'_>) -> TokenKind {
    cursor.advance();

    if cursor.advance_if(';') {
        return TokenKind::EmptyEntityReference;
    }

    if cursor.advance_if('#') {
        let before = cursor.token_end();
        if cursor.advance_if('x') {
            let digits = cursor.token_end();
            cursor.advance_while(is_hex_digit);
            if cursor.token_end() == digits {
                return TokenKind::PartialEntityReference;
            }
        } else {
            cursor.advance_while(is_digit);
            if cursor.token_end() == before {
                return TokenKind::PartialEntityReference;
            }
        }
        return if cursor.advance_if(';') {
            TokenKind::CharacterReference
        } else {
            TokenKind::PartialEntityReference
        };
    }

    if !is_name_start_char(cursor.codepoint()) {
        return TokenKind::PartialEntityReference;
    }
    cursor.advance_while(is_name_char);
    if !cursor.advance_if(';') {
        return TokenKind::PartialEntityReference;
    }
    if PREDEFINED_ENTITIES.iter().any(|e| cursor.token_text_eq(e)) {
        TokenKind::PredefinedEntityReference
    } else {
        TokenKind::PartialEntityReference
    }
}

fn xml_comment(cursor: &mut CodepointCursor<'_>) -> Step {
    if lookahead(cursor, "-->") {
        for _ in 0..3 {
            cursor.advance();
        }
        return Step::stay(TokenKind::XmlCommentEndTag, DEFAULT);
    }
    loop {
        cursor.advance();
        let cp = cursor.codepoint();
        if cp == END_OF_BUFFER || (is(cp, '-') && lookahead(cursor, "-->")) {
            break;
        }
    }
    Step::stay(TokenKind::XmlComment, XML_COMMENT)
}

#[cfg(test)]
mod tests;
