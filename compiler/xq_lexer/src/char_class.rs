//! XML character classes, on decoded codepoints.
//!
//! Ranges follow XML 1.0 (fifth edition). Every predicate returns `false`
//! for [`END_OF_BUFFER`](xq_lexer_core::END_OF_BUFFER), which lies outside
//! all of them.

const NAME_START_RANGES: &[(u32, u32)] = &[
    (0x41, 0x5A),
    (0x5F, 0x5F),
    (0x61, 0x7A),
    (0xC0, 0xD6),
    (0xD8, 0xF6),
    (0xF8, 0x2FF),
    (0x370, 0x37D),
    (0x37F, 0x1FFF),
    (0x200C, 0x200D),
    (0x2070, 0x218F),
    (0x2C00, 0x2FEF),
    (0x3001, 0xD7FF),
    (0xF900, 0xFDCF),
    (0xFDF0, 0xFFFD),
    (0x1_0000, 0xE_FFFF),
];

const NAME_EXTRA_RANGES: &[(u32, u32)] = &[
    (0x2D, 0x2E),
    (0x30, 0x39),
    (0xB7, 0xB7),
    (0x300, 0x36F),
    (0x203F, 0x2040),
];

fn in_ranges(ranges: &[(u32, u32)], cp: u32) -> bool {
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// `NameStartChar` without `:`.
#[inline]
pub fn is_name_start_char(cp: u32) -> bool {
    if cp < 0x80 {
        return matches!(cp, 0x41..=0x5A | 0x5F | 0x61..=0x7A);
    }
    in_ranges(NAME_START_RANGES, cp)
}

/// `NameChar` without `:`.
#[inline]
pub fn is_name_char(cp: u32) -> bool {
    is_name_start_char(cp) || in_ranges(NAME_EXTRA_RANGES, cp)
}

/// `S`: space, tab, carriage return, line feed.
#[inline]
pub fn is_whitespace(cp: u32) -> bool {
    matches!(cp, 0x20 | 0x09 | 0x0D | 0x0A)
}

#[inline]
pub fn is_newline(cp: u32) -> bool {
    matches!(cp, 0x0D | 0x0A)
}

#[inline]
pub fn is_digit(cp: u32) -> bool {
    (0x30..=0x39).contains(&cp)
}

#[inline]
pub fn is_hex_digit(cp: u32) -> bool {
    is_digit(cp) || (0x41..=0x46).contains(&cp) || (0x61..=0x66).contains(&cp)
}

/// `Char`: a codepoint allowed in an XML document.
#[inline]
pub fn is_xml_char(cp: u32) -> bool {
    matches!(cp, 0x09 | 0x0A | 0x0D | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x1_0000..=0x10_FFFF)
}
