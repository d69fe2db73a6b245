//! Routing between a host machine and embedded sub-language machines.
//!
//! The composer is the only component that reads or writes the channel and
//! parked bits of a [`LexerState`]. Machines see nothing but their own
//! 16-bit private state, so an embedded machine cannot tell whether it runs
//! standalone or inside a host.
//!
//! # Hand-off
//!
//! ```text
//! host: Step::enter(OPEN, ch, s0, resume)  ->  state = (ch, resume, s0)
//! ch:   Step::stay(KIND, s1)               ->  state = (ch, resume, s1)
//! ch:   Step::exit(CLOSE)                  ->  state = (host, resume)
//! ```
//!
//! Machines are registered up front; there is no global registry.

use smallvec::SmallVec;
use tracing::trace;

use crate::{Channel, CodepointCursor, LexerState, StateMachine, TokenKind, Transition};

/// A host machine plus the embedded machines it may hand control to.
pub struct Composer {
    host: Box<dyn StateMachine>,
    embedded: SmallVec<[(Channel, Box<dyn StateMachine>); 4]>,
}

impl Composer {
    /// Create a composer that scans with `host` on channel 0.
    pub fn new(host: impl StateMachine + 'static) -> Self {
        Composer {
            host: Box::new(host),
            embedded: SmallVec::new(),
        }
    }

    /// Register `machine` as the owner of `channel`.
    ///
    /// # Panics
    ///
    /// Panics if `channel` is the host channel or is already registered.
    #[must_use]
    pub fn with_channel(mut self, channel: Channel, machine: impl StateMachine + 'static) -> Self {
        assert!(
            !channel.is_host(),
            "the host channel cannot be registered as embedded"
        );
        assert!(
            !self.has_channel(channel),
            "channel {} is already registered",
            channel.id()
        );
        self.embedded.push((channel, Box::new(machine)));
        self
    }

    pub fn has_channel(&self, channel: Channel) -> bool {
        self.embedded.iter().any(|(ch, _)| *ch == channel)
    }

    fn machine(&self, channel: Channel) -> Option<&dyn StateMachine> {
        self.embedded
            .iter()
            .find(|(ch, _)| *ch == channel)
            .map(|(_, machine)| machine.as_ref())
    }

    /// Scan one token with whichever machine `state` selects.
    ///
    /// # Panics
    ///
    /// Panics when `state` (or a host transition) names an unregistered
    /// channel, or when an embedded machine tries to open a channel of its
    /// own. Both mean the composition itself is wrong.
    pub fn advance(&self, cursor: &mut CodepointCursor<'_>, state: LexerState) -> (TokenKind, LexerState) {
        let channel = state.channel();
        if channel.is_host() {
            let step = self.host.advance(cursor, state.private());
            let next = match step.next {
                Transition::Stay(private) => LexerState::host(private),
                Transition::Exit => LexerState::INITIAL,
                Transition::Enter {
                    channel: target,
                    state: inner,
                    resume,
                } => {
                    assert!(
                        self.has_channel(target),
                        "host requested unregistered channel {}",
                        target.id()
                    );
                    trace!(
                        channel = target.id(),
                        resume,
                        offset = cursor.token_end(),
                        "enter embedded channel"
                    );
                    LexerState::embedded(target, inner, resume)
                }
            };
            (step.kind, next)
        } else {
            let Some(machine) = self.machine(channel) else {
                panic!("lexer state {state:?} selects unregistered channel {}", channel.id());
            };
            let step = machine.advance(cursor, state.private());
            let next = match step.next {
                Transition::Stay(private) => LexerState::embedded(channel, private, state.parked()),
                Transition::Exit => {
                    trace!(
                        channel = channel.id(),
                        resume = state.parked(),
                        offset = cursor.token_end(),
                        "exit embedded channel"
                    );
                    LexerState::host(state.parked())
                }
                Transition::Enter { channel: target, .. } => panic!(
                    "channel {} tried to open channel {}; embedded channels do not nest",
                    channel.id(),
                    target.id()
                ),
            };
            (step.kind, next)
        }
    }
}

impl std::fmt::Debug for Composer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composer")
            .field(
                "channels",
                &self.embedded.iter().map(|(ch, _)| *ch).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
