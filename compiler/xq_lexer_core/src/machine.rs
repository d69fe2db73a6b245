//! Scanner state machines.
//!
//! A [`StateMachine`] is a pure transition function: given the cursor
//! positioned at the start of a token and the machine's own private state,
//! it consumes one token and reports what it scanned and where to go next.
//! Machines hold no per-session data, so one instance can serve any number
//! of independent lexing sessions.

use crate::{Channel, CodepointCursor, TokenKind};

/// Where a machine goes after emitting a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Keep scanning with this machine in the given private state.
    Stay(u16),
    /// Hand control to the machine registered on `channel`, starting it in
    /// `state`. The current machine resumes in `resume` once that region
    /// closes.
    Enter {
        channel: Channel,
        state: u16,
        resume: u16,
    },
    /// The machine's region is closed; return control to whoever embedded it.
    Exit,
}

/// One scanned token and the resulting transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub kind: TokenKind,
    pub next: Transition,
}

impl Step {
    #[inline]
    pub const fn stay(kind: TokenKind, state: u16) -> Self {
        Step {
            kind,
            next: Transition::Stay(state),
        }
    }

    #[inline]
    pub const fn enter(kind: TokenKind, channel: Channel, state: u16, resume: u16) -> Self {
        Step {
            kind,
            next: Transition::Enter {
                channel,
                state,
                resume,
            },
        }
    }

    #[inline]
    pub const fn exit(kind: TokenKind) -> Self {
        Step {
            kind,
            next: Transition::Exit,
        }
    }
}

/// A per-language transition function `(state) -> (TokenKind, next state)`.
///
/// # Contract
///
/// - Called with `cursor.token_start() == cursor.token_end()`.
/// - When running as the host, never called at the end of the range, and
///   must consume at least one codepoint.
/// - When running embedded, may be called at the end of the range and must
///   then close its region with a zero-width token and [`Transition::Exit`].
/// - Must leave no outstanding cursor snapshots.
/// - Must depend only on the text at and after `token_start` and on
///   `state`; this is what makes resumption from `(offset, state)` exact.
pub trait StateMachine: Send + Sync {
    fn advance(&self, cursor: &mut CodepointCursor<'_>, state: u16) -> Step;
}
