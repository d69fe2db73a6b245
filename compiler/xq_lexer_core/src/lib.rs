//! Low-level scanning primitives for the XQuery language family.
//!
//! This crate knows nothing about any particular language. It provides:
//!
//! - [`Utf16Buffer`]: the immutable UTF-16 text a lexing session runs over
//! - [`CodepointCursor`]: a bounded view that decodes surrogate pairs and
//!   supports speculative lookahead through `save`/`restore`
//! - [`TokenKind`]: the shared tag set for every scanner in the family
//! - [`LexerState`] / [`Channel`]: the packed `u32` resumption state
//! - [`StateMachine`] / [`Composer`]: per-language transition functions and
//!   the router that hands control between a host and embedded machines
//! - [`Lexer`]: the pull-based driver producing [`Token`]s
//!
//! # Resumption
//!
//! The packed state carried by every token is the entire context needed to
//! continue lexing. An editor can cache `(offset, state)` per line and
//! restart with [`Lexer::resume`]; the tokens produced are identical to a
//! full re-lex from offset 0.

mod buffer;
mod composer;
mod cursor;
mod lexer;
mod machine;
mod state;
mod tag;
#[cfg(test)]
mod testing;

pub use buffer::Utf16Buffer;
pub use composer::Composer;
pub use cursor::{CodepointCursor, END_OF_BUFFER};
pub use lexer::{tokenize, Lexer, Token};
pub use machine::{StateMachine, Step, Transition};
pub use state::{Channel, LexerState, MAX_PARKED_STATE};
pub use tag::TokenKind;
