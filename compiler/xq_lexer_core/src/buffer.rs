//! Immutable UTF-16 text for one lexing session.
//!
//! Offsets throughout the scanner are UTF-16 code unit indices, matching
//! the editor documents the front end is driven from. The buffer keeps the
//! raw units rather than a `String` so that unpaired surrogates (which a
//! document can legitimately hold mid-edit) survive untouched.

use crate::CodepointCursor;

/// UTF-16 source buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Utf16Buffer {
    units: Vec<u16>,
}

impl Utf16Buffer {
    /// Encode `source` as UTF-16.
    pub fn new(source: &str) -> Self {
        Self {
            units: source.encode_utf16().collect(),
        }
    }

    /// Wrap raw UTF-16 units. Unpaired surrogates are allowed.
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    /// Number of UTF-16 code units.
    ///
    /// # File Size
    ///
    /// Buffers longer than `u32::MAX` units saturate; the scanner never
    /// addresses beyond that.
    #[inline]
    pub fn len(&self) -> u32 {
        u32::try_from(self.units.len()).unwrap_or(u32::MAX)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    #[inline]
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Cursor over the whole buffer.
    pub fn cursor(&self) -> CodepointCursor<'_> {
        CodepointCursor::new(&self.units, 0, self.len())
    }

    /// Cursor over `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= self.len()`.
    pub fn cursor_range(&self, start: u32, end: u32) -> CodepointCursor<'_> {
        CodepointCursor::new(&self.units, start, end)
    }

    /// Decode `[start, end)` into a `String`, replacing unpaired surrogates
    /// with U+FFFD.
    pub fn text(&self, start: u32, end: u32) -> String {
        let end = (end as usize).min(self.units.len());
        let start = (start as usize).min(end);
        String::from_utf16_lossy(&self.units[start..end])
    }
}

impl From<&str> for Utf16Buffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}
