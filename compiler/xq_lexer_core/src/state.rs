//! Packed lexer state.
//!
//! The state handed to editors between tokens is a single `u32`:
//!
//! ```text
//!  31      28 27               16 15                0
//! +----------+-------------------+-------------------+
//! | channel  |  parked host state |  active private   |
//! +----------+-------------------+-------------------+
//! ```
//!
//! - `channel == 0`: the host machine owns scanning; the low 16 bits are its
//!   private state and the parked bits are zero.
//! - `channel != 0`: the embedded machine registered on that channel owns
//!   scanning; the low 16 bits are its private state and bits 16-27 hold the
//!   host state to resume with once the embedded region closes.
//!
//! Only one channel is ever active, so channels are mutually exclusive by
//! construction. `LexerState(0)` is the initial state of every session.

use std::fmt;

const CHANNEL_SHIFT: u32 = 28;
const PARKED_SHIFT: u32 = 16;
const PARKED_MASK: u32 = 0x0FFF;
const PRIVATE_MASK: u32 = 0xFFFF;

/// Largest host private state that can be parked across an embedded region.
pub const MAX_PARKED_STATE: u16 = 0x0FFF;

/// Identifier of the machine that owns scanning.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Channel(u8);

impl Channel {
    /// The host machine.
    pub const HOST: Channel = Channel(0);

    /// Create a channel id.
    ///
    /// # Panics
    ///
    /// Panics unless `id` fits in the four channel bits.
    pub const fn new(id: u8) -> Self {
        assert!(id < 16, "channel id must fit in four bits");
        Channel(id)
    }

    #[inline]
    pub const fn id(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_host(self) -> bool {
        self.0 == 0
    }

    /// The channel's bits within a packed state.
    #[inline]
    pub const fn mask(self) -> u32 {
        (self.0 as u32) << CHANNEL_SHIFT
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_host() {
            write!(f, "Channel::HOST")
        } else {
            write!(f, "Channel({})", self.0)
        }
    }
}

/// Packed resumption state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct LexerState(u32);

impl LexerState {
    /// Host channel, private state 0.
    pub const INITIAL: LexerState = LexerState(0);

    /// Host channel with the given private state.
    #[inline]
    pub const fn host(private: u16) -> Self {
        LexerState(private as u32)
    }

    /// Embedded channel with its private state and the parked host state.
    ///
    /// # Panics
    ///
    /// Panics if `channel` is the host channel or `parked` exceeds
    /// [`MAX_PARKED_STATE`]; both are defects in the composing lexer.
    #[inline]
    pub fn embedded(channel: Channel, private: u16, parked: u16) -> Self {
        assert!(
            !channel.is_host(),
            "embedded state requires a non-host channel"
        );
        assert!(
            parked <= MAX_PARKED_STATE,
            "host state {parked:#x} cannot be parked in twelve bits"
        );
        LexerState(channel.mask() | (u32::from(parked) << PARKED_SHIFT) | u32::from(private))
    }

    /// Reinterpret a state previously obtained from [`raw()`](Self::raw).
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        LexerState(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn channel(self) -> Channel {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "shifted value is at most four bits"
        )]
        let id = (self.0 >> CHANNEL_SHIFT) as u8;
        Channel(id)
    }

    /// Private state of the machine that currently owns scanning.
    #[inline]
    pub const fn private(self) -> u16 {
        #[allow(clippy::cast_possible_truncation, reason = "masked to sixteen bits")]
        let private = (self.0 & PRIVATE_MASK) as u16;
        private
    }

    /// Host state parked while an embedded channel is active.
    #[inline]
    pub const fn parked(self) -> u16 {
        #[allow(clippy::cast_possible_truncation, reason = "masked to twelve bits")]
        let parked = ((self.0 >> PARKED_SHIFT) & PARKED_MASK) as u16;
        parked
    }

    #[inline]
    pub const fn is_host(self) -> bool {
        self.channel().is_host()
    }
}

impl fmt::Debug for LexerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_host() {
            write!(f, "LexerState(host {})", self.private())
        } else {
            write!(
                f,
                "LexerState(channel {} state {} parked {})",
                self.channel().id(),
                self.private(),
                self.parked()
            )
        }
    }
}

impl fmt::Display for LexerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
