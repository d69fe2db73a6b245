//! Token tags shared by every scanner in the language family.
//!
//! `TokenKind` is a fieldless `#[repr(u8)]` enum partitioned into semantic
//! ranges, so a new sub-language claims a fresh range without disturbing the
//! existing discriminants:
//!
//! | Range   | Category                          |
//! |---------|-----------------------------------|
//! | 0-15    | Names and literals                |
//! | 16-31   | String and URI literal internals  |
//! | 32-47   | Comments and xqDoc                |
//! | 48-63   | Value templates                   |
//! | 64-95   | Operators                         |
//! | 96-111  | Delimiters                        |
//! | 112-127 | Trivia                            |
//! | 240-254 | Malformed input                   |
//! | 255     | Control                           |

use std::fmt;

/// Kind of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Names and literals (0-15) ===
    /// `NCName`: an XML name without a colon.
    NcName = 0,
    IntegerLiteral = 1,
    DecimalLiteral = 2,
    DoubleLiteral = 3,
    /// A whole `Q{...}` literal, scanned in one token where channels cannot nest.
    BracedUriLiteral = 4,

    // === String and URI literal internals (16-31) ===
    StringLiteralStart = 16,
    StringLiteralContents = 17,
    StringLiteralEnd = 18,
    /// Doubled quote in a string, or `{{` / `}}` in a value template.
    EscapedCharacter = 19,
    /// `&lt;`, `&gt;`, `&amp;`, `&quot;`, `&apos;`
    PredefinedEntityReference = 20,
    /// `&#123;` or `&#x7B;`
    CharacterReference = 21,
    /// `Q{`
    BracedUriLiteralStart = 22,
    /// `}` closing a braced URI literal.
    BracedUriLiteralEnd = 23,

    // === Comments and xqDoc (32-47) ===
    /// `(:`
    CommentStartTag = 32,
    /// `:)`
    CommentEndTag = 33,
    /// A whole `(: ... :)` comment, scanned in one token where channels cannot nest.
    Comment = 34,
    /// Free text inside a comment or xqDoc comment.
    Contents = 35,
    /// `~` opening an xqDoc comment.
    XqDocCommentMarker = 36,
    /// Line break plus leading whitespace and continuation `:` in xqDoc.
    Trim = 37,
    /// `@` introducing an xqDoc tag.
    TagMarker = 38,
    /// xqDoc tag name, e.g. `param`.
    Tag = 39,
    /// `$`, both in expressions and after `@param`.
    VariableIndicator = 40,
    /// `<!--`
    XmlCommentStartTag = 41,
    /// Text of a direct XML comment.
    XmlComment = 42,
    /// `-->`
    XmlCommentEndTag = 43,

    // === Value templates (48-63) ===
    /// Literal text of an attribute value template.
    ValueContents = 48,
    /// `{` opening an embedded expression.
    ValueTemplateOpen = 49,
    /// `}` closing an embedded expression.
    ValueTemplateClose = 50,

    // === Operators (64-95) ===
    Equal = 64,
    NotEqual = 65,
    LessThan = 66,
    LessEqual = 67,
    NodeBefore = 68,
    GreaterThan = 69,
    GreaterEqual = 70,
    NodeAfter = 71,
    Plus = 72,
    Minus = 73,
    Star = 74,
    Slash = 75,
    DoubleSlash = 76,
    Union = 77,
    Concatenation = 78,
    Bang = 79,
    Arrow = 80,
    Assign = 81,
    AxisSeparator = 82,
    Colon = 83,
    Dot = 84,
    DotDot = 85,
    Question = 86,
    Elvis = 87,
    At = 88,
    Annotation = 89,
    Hash = 90,

    // === Delimiters (96-111) ===
    ParenthesisOpen = 96,
    ParenthesisClose = 97,
    SquareOpen = 98,
    SquareClose = 99,
    BlockOpen = 100,
    BlockClose = 101,
    Comma = 102,
    Separator = 103,

    // === Trivia (112-127) ===
    WhiteSpace = 112,

    // === Malformed input (240-254) ===
    /// A codepoint that cannot start any token.
    BadCharacter = 240,
    /// `&` not followed by a complete reference.
    PartialEntityReference = 241,
    /// `&;`
    EmptyEntityReference = 242,
    /// Zero-width implicit close of an embedded region cut off by the end of input.
    UnexpectedEndOfBlock = 243,
    /// A comment scanned whole inside a template expression that reaches the
    /// end of input before its closing `:)`.
    UnterminatedComment = 244,
    /// A braced URI literal scanned whole inside a template expression that
    /// has no closing `}`.
    UnterminatedBracedUriLiteral = 245,

    // === Control (255) ===
    /// Input exhausted. Zero-width; repeated indefinitely.
    EndOfBuffer = 255,
}

impl TokenKind {
    /// Stable upper-snake name used in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NcName => "NCNAME",
            Self::IntegerLiteral => "INTEGER_LITERAL",
            Self::DecimalLiteral => "DECIMAL_LITERAL",
            Self::DoubleLiteral => "DOUBLE_LITERAL",
            Self::BracedUriLiteral => "BRACED_URI_LITERAL",
            Self::StringLiteralStart => "STRING_LITERAL_START",
            Self::StringLiteralContents => "STRING_LITERAL_CONTENTS",
            Self::StringLiteralEnd => "STRING_LITERAL_END",
            Self::EscapedCharacter => "ESCAPED_CHARACTER",
            Self::PredefinedEntityReference => "PREDEFINED_ENTITY_REFERENCE",
            Self::CharacterReference => "CHARACTER_REFERENCE",
            Self::BracedUriLiteralStart => "BRACED_URI_LITERAL_START",
            Self::BracedUriLiteralEnd => "BRACED_URI_LITERAL_END",
            Self::CommentStartTag => "COMMENT_START_TAG",
            Self::CommentEndTag => "COMMENT_END_TAG",
            Self::Comment => "COMMENT",
            Self::Contents => "CONTENTS",
            Self::XqDocCommentMarker => "XQDOC_COMMENT_MARKER",
            Self::Trim => "TRIM",
            Self::TagMarker => "TAG_MARKER",
            Self::Tag => "TAG",
            Self::VariableIndicator => "VARIABLE_INDICATOR",
            Self::XmlCommentStartTag => "XML_COMMENT_START_TAG",
            Self::XmlComment => "XML_COMMENT",
            Self::XmlCommentEndTag => "XML_COMMENT_END_TAG",
            Self::ValueContents => "VALUE_CONTENTS",
            Self::ValueTemplateOpen => "VALUE_TEMPLATE_OPEN",
            Self::ValueTemplateClose => "VALUE_TEMPLATE_CLOSE",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::LessThan => "LESS_THAN",
            Self::LessEqual => "LESS_EQUAL",
            Self::NodeBefore => "NODE_BEFORE",
            Self::GreaterThan => "GREATER_THAN",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::NodeAfter => "NODE_AFTER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::DoubleSlash => "DOUBLE_SLASH",
            Self::Union => "UNION",
            Self::Concatenation => "CONCATENATION",
            Self::Bang => "BANG",
            Self::Arrow => "ARROW",
            Self::Assign => "ASSIGN",
            Self::AxisSeparator => "AXIS_SEPARATOR",
            Self::Colon => "COLON",
            Self::Dot => "DOT",
            Self::DotDot => "DOT_DOT",
            Self::Question => "QUESTION",
            Self::Elvis => "ELVIS",
            Self::At => "AT",
            Self::Annotation => "ANNOTATION",
            Self::Hash => "HASH",
            Self::ParenthesisOpen => "PARENTHESIS_OPEN",
            Self::ParenthesisClose => "PARENTHESIS_CLOSE",
            Self::SquareOpen => "SQUARE_OPEN",
            Self::SquareClose => "SQUARE_CLOSE",
            Self::BlockOpen => "BLOCK_OPEN",
            Self::BlockClose => "BLOCK_CLOSE",
            Self::Comma => "COMMA",
            Self::Separator => "SEPARATOR",
            Self::WhiteSpace => "WHITE_SPACE",
            Self::BadCharacter => "BAD_CHARACTER",
            Self::PartialEntityReference => "PARTIAL_ENTITY_REFERENCE",
            Self::EmptyEntityReference => "EMPTY_ENTITY_REFERENCE",
            Self::UnexpectedEndOfBlock => "UNEXPECTED_END_OF_BLOCK",
            Self::UnterminatedComment => "UNTERMINATED_COMMENT",
            Self::UnterminatedBracedUriLiteral => "UNTERMINATED_BRACED_URI_LITERAL",
            Self::EndOfBuffer => "END_OF_BUFFER",
        }
    }

    /// Fixed source text for kinds that always spell the same thing.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            Self::BracedUriLiteralStart => "Q{",
            Self::BracedUriLiteralEnd | Self::ValueTemplateClose | Self::BlockClose => "}",
            Self::CommentStartTag => "(:",
            Self::CommentEndTag => ":)",
            Self::XqDocCommentMarker => "~",
            Self::TagMarker | Self::At => "@",
            Self::VariableIndicator => "$",
            Self::XmlCommentStartTag => "<!--",
            Self::XmlCommentEndTag => "-->",
            Self::ValueTemplateOpen | Self::BlockOpen => "{",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessEqual => "<=",
            Self::NodeBefore => "<<",
            Self::GreaterThan => ">",
            Self::GreaterEqual => ">=",
            Self::NodeAfter => ">>",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::DoubleSlash => "//",
            Self::Union => "|",
            Self::Concatenation => "||",
            Self::Bang => "!",
            Self::Arrow => "=>",
            Self::Assign => ":=",
            Self::AxisSeparator => "::",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::DotDot => "..",
            Self::Question => "?",
            Self::Elvis => "?:",
            Self::Annotation => "%",
            Self::Hash => "#",
            Self::ParenthesisOpen => "(",
            Self::ParenthesisClose => ")",
            Self::SquareOpen => "[",
            Self::SquareClose => "]",
            Self::Comma => ",",
            Self::Separator => ";",
            Self::EmptyEntityReference => "&;",
            _ => return None,
        })
    }

    /// Malformed-input kinds.
    #[inline]
    pub const fn is_error(self) -> bool {
        (self as u8) >= 240 && (self as u8) < 255
    }

    /// Tokens with no syntactic meaning (whitespace and comment material).
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WhiteSpace
                | Self::Comment
                | Self::CommentStartTag
                | Self::CommentEndTag
                | Self::Contents
                | Self::XqDocCommentMarker
                | Self::Trim
                | Self::TagMarker
                | Self::Tag
        )
    }

    /// Operators and delimiters.
    #[inline]
    pub const fn is_punctuation(self) -> bool {
        (self as u8) >= 64 && (self as u8) < 112
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
