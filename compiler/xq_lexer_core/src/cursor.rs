//! Codepoint cursor over a bounded range of UTF-16 units.
//!
//! The cursor tracks the extent of the token being scanned as a
//! `(start, end)` pair of UTF-16 offsets:
//!
//! - `end` moves only through [`advance()`](CodepointCursor::advance),
//!   one codepoint (one or two units) at a time;
//! - `start` moves only through [`flush()`](CodepointCursor::flush) or
//!   [`restore()`](CodepointCursor::restore).
//!
//! # Surrogates
//!
//! A high surrogate followed by a low surrogate inside the range decodes to
//! a single scalar `>= 0x10000`. Any other surrogate (lone high, lone low,
//! or a high whose low half lies past the range end) is reported as its raw
//! 16-bit value and consumed as one unit. Decoding never fails.
//!
//! # Backtracking
//!
//! [`save()`](CodepointCursor::save) pushes a snapshot of `(start, end)`.
//! A speculative scan then either rolls back with
//! [`restore()`](CodepointCursor::restore) or keeps its progress with
//! [`discard()`](CodepointCursor::discard). Snapshots form a stack with
//! inline storage, so typical lookahead never allocates.

use smallvec::SmallVec;

/// Sentinel returned by [`CodepointCursor::codepoint`] at the end of the range.
///
/// Not a valid Unicode scalar, and distinct from every raw surrogate value.
pub const END_OF_BUFFER: u32 = u32::MAX;

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Snapshot of the token extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Mark {
    start: u32,
    end: u32,
}

/// Bounded codepoint cursor.
///
/// Not `Sync` by intent of use: one cursor belongs to one lexing session.
#[derive(Clone, Debug)]
pub struct CodepointCursor<'a> {
    units: &'a [u16],
    start: u32,
    end: u32,
    buffer_end: u32,
    saves: SmallVec<[Mark; 4]>,
}

impl<'a> CodepointCursor<'a> {
    /// Create a cursor over `units[range_start..range_end]`.
    ///
    /// # Panics
    ///
    /// Panics unless `range_start <= range_end <= units.len()`. A bad range
    /// is a defect in the calling lexer, not a property of the input.
    pub fn new(units: &'a [u16], range_start: u32, range_end: u32) -> Self {
        check_range(units, range_start, range_end);
        Self {
            units,
            start: range_start,
            end: range_start,
            buffer_end: range_end,
            saves: SmallVec::new(),
        }
    }

    /// Rebind the cursor to a new range, resetting `start = end = range_start`
    /// and dropping any outstanding snapshots.
    ///
    /// # Panics
    ///
    /// Panics unless `range_start <= range_end <= units.len()`.
    pub fn start(&mut self, units: &'a [u16], range_start: u32, range_end: u32) {
        check_range(units, range_start, range_end);
        self.units = units;
        self.start = range_start;
        self.end = range_start;
        self.buffer_end = range_end;
        self.saves.clear();
    }

    /// The codepoint at `end`, or [`END_OF_BUFFER`].
    #[inline]
    pub fn codepoint(&self) -> u32 {
        self.decode_at(self.end).0
    }

    /// The codepoint following the current one, or [`END_OF_BUFFER`].
    ///
    /// Pure lookahead: does not touch `start`, `end` or the snapshot stack.
    #[inline]
    pub fn peek(&self) -> u32 {
        let (_, width) = self.decode_at(self.end);
        self.decode_at(self.end + width).0
    }

    /// Consume the current codepoint. No-op at the end of the range.
    #[inline]
    pub fn advance(&mut self) {
        let (_, width) = self.decode_at(self.end);
        self.end += width;
    }

    /// Consume the current codepoint if it equals `cp`.
    #[inline]
    pub fn advance_if(&mut self, cp: char) -> bool {
        if self.codepoint() == cp as u32 {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume codepoints while `pred` holds.
    ///
    /// `pred` is never called with [`END_OF_BUFFER`].
    #[inline]
    pub fn advance_while(&mut self, pred: impl Fn(u32) -> bool) {
        loop {
            let cp = self.codepoint();
            if cp == END_OF_BUFFER || !pred(cp) {
                break;
            }
            self.advance();
        }
    }

    /// Commit the scanned extent: `start := end`.
    #[inline]
    pub fn flush(&mut self) {
        self.start = self.end;
    }

    /// Push a snapshot of `(start, end)`.
    #[inline]
    pub fn save(&mut self) {
        self.saves.push(Mark {
            start: self.start,
            end: self.end,
        });
    }

    /// Pop the latest snapshot and roll back to it.
    ///
    /// # Panics
    ///
    /// Panics if there is no outstanding snapshot.
    #[inline]
    pub fn restore(&mut self) {
        let Some(mark) = self.saves.pop() else {
            panic!("CodepointCursor::restore called without a matching save");
        };
        self.start = mark.start;
        self.end = mark.end;
    }

    /// Pop the latest snapshot, keeping the current position.
    ///
    /// # Panics
    ///
    /// Panics if there is no outstanding snapshot.
    #[inline]
    pub fn discard(&mut self) {
        let popped = self.saves.pop();
        assert!(
            popped.is_some(),
            "CodepointCursor::discard called without a matching save"
        );
    }

    /// Number of outstanding snapshots.
    #[inline]
    pub fn save_depth(&self) -> usize {
        self.saves.len()
    }

    /// Start of the token being scanned.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.start
    }

    /// End of the scanned extent (exclusive).
    #[inline]
    pub fn token_end(&self) -> u32 {
        self.end
    }

    /// Length of the scanned extent in UTF-16 units.
    #[inline]
    pub fn token_len(&self) -> u32 {
        self.end - self.start
    }

    /// End of the bound range.
    #[inline]
    pub fn buffer_end(&self) -> u32 {
        self.buffer_end
    }

    /// The whole underlying unit sequence (not just the bound range).
    #[inline]
    pub fn units(&self) -> &'a [u16] {
        self.units
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.end >= self.buffer_end
    }

    /// Returns `true` if the scanned extent spells `text` exactly.
    pub fn token_text_eq(&self, text: &str) -> bool {
        let extent = &self.units[self.start as usize..self.end as usize];
        extent.iter().copied().eq(text.encode_utf16())
    }

    /// Decode the codepoint at `pos`, returning it with its width in units.
    #[inline]
    fn decode_at(&self, pos: u32) -> (u32, u32) {
        if pos >= self.buffer_end {
            return (END_OF_BUFFER, 0);
        }
        let unit = self.units[pos as usize];
        if HIGH_SURROGATES.contains(&unit) && pos + 1 < self.buffer_end {
            let low = self.units[pos as usize + 1];
            if LOW_SURROGATES.contains(&low) {
                let scalar =
                    0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                return (scalar, 2);
            }
        }
        (u32::from(unit), 1)
    }
}

fn check_range(units: &[u16], range_start: u32, range_end: u32) {
    assert!(
        range_start <= range_end && range_end as usize <= units.len(),
        "cursor range {range_start}..{range_end} is outside a buffer of {} units",
        units.len()
    );
}
