//! Toy bracket language shared by the composer and lexer tests.
//!
//! Host: letters are names, `!` toggles private state 0/1, `[` opens the
//! bracket channel. Bracket channel: text up to `]`, `]` closes, `<` asks
//! for a nested channel (illegal).

use crate::{
    Channel, CodepointCursor, Composer, StateMachine, Step, TokenKind, END_OF_BUFFER,
};

pub(crate) const BRACKET: Channel = Channel::new(1);
pub(crate) const UNUSED: Channel = Channel::new(7);

pub(crate) struct Host;

impl StateMachine for Host {
    fn advance(&self, cursor: &mut CodepointCursor<'_>, state: u16) -> Step {
        let cp = cursor.codepoint();
        cursor.advance();
        match char::from_u32(cp) {
            Some('[') => Step::enter(TokenKind::SquareOpen, BRACKET, 0, state),
            Some('{') => Step::enter(TokenKind::BlockOpen, UNUSED, 0, state),
            Some('!') => Step::stay(TokenKind::Bang, state ^ 1),
            Some(c) if c.is_ascii_alphabetic() => {
                cursor.advance_while(|cp| char::from_u32(cp).is_some_and(|c| c.is_ascii_alphabetic()));
                Step::stay(TokenKind::NcName, state)
            }
            _ => Step::stay(TokenKind::BadCharacter, state),
        }
    }
}

pub(crate) struct Bracket;

impl StateMachine for Bracket {
    fn advance(&self, cursor: &mut CodepointCursor<'_>, _state: u16) -> Step {
        match cursor.codepoint() {
            END_OF_BUFFER => Step::exit(TokenKind::UnexpectedEndOfBlock),
            cp if cp == u32::from(b']') => {
                cursor.advance();
                Step::exit(TokenKind::SquareClose)
            }
            cp if cp == u32::from(b'<') => {
                cursor.advance();
                Step::enter(TokenKind::LessThan, UNUSED, 0, 0)
            }
            _ => {
                cursor.advance_while(|cp| cp != u32::from(b']') && cp != u32::from(b'<'));
                Step::stay(TokenKind::Contents, 0)
            }
        }
    }
}

pub(crate) fn composer() -> Composer {
    Composer::new(Host).with_channel(BRACKET, Bracket)
}
