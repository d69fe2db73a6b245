//! W3C error codes reported by the front end.
//!
//! Codes follow the `err:` namespace naming of the XQuery specifications:
//! `XP` codes come from XPath, `XQ` codes from XQuery; `ST` marks static
//! errors.

use std::fmt;

/// Error codes for front-end diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Static syntax error, including constructs the dialect does not support
    XPST0003,
    /// Unsupported version in a version declaration
    XQST0031,
    /// Character reference to a non-XML character
    XQST0090,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] =
        &[ErrorCode::XPST0003, ErrorCode::XQST0031, ErrorCode::XQST0090];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::XPST0003 => "XPST0003",
            ErrorCode::XQST0031 => "XQST0031",
            ErrorCode::XQST0090 => "XQST0090",
        }
    }

    /// One-line summary.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::XPST0003 => "the expression is not valid in the configured dialect",
            ErrorCode::XQST0031 => "the version number is not supported",
            ErrorCode::XQST0090 => "the character reference does not identify a valid XML character",
        }
    }

    /// Longer text for `xqc explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::XPST0003 => {
                "It is a static error if an expression is not a valid instance of the grammar. \
                 This also covers constructs the grammar accepts only in a later version of the \
                 language, or only in a vendor extension that the configured dialect does not \
                 enable, as well as malformed tokens such as a stray character, an unterminated \
                 comment or string, or an incomplete entity reference."
            }
            ErrorCode::XQST0031 => {
                "It is a static error if the version number specified in a version declaration \
                 is not supported by the implementation. Check the dialect the query is \
                 validated against."
            }
            ErrorCode::XQST0090 => {
                "It is a static error if a character reference does not identify a valid \
                 character in the version of XML that is in use, for example `&#0;` or a \
                 reference to a surrogate code point."
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned by [`ErrorCode::from_str`](std::str::FromStr::from_str) for an
/// unrecognized code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code `{0}`")]
pub struct UnknownErrorCode(pub String);

/// Parse a code like `"XPST0003"`, optionally prefixed with `err:`.
/// Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed
            .strip_prefix("err:")
            .or_else(|| trimmed.strip_prefix("ERR:"))
            .unwrap_or(trimmed);
        let upper = bare.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or_else(|| UnknownErrorCode(s.to_owned()))
    }
}
