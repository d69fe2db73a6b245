use pretty_assertions::assert_eq;
use xq_lexer_core::{LexerState, TokenKind, Utf16Buffer};

use crate::{tokenize_xquery, BRACED_URI, COMMENT, XQDOC};

use super::{STRING_APOS, STRING_QUOT, XML_COMMENT};

fn lex(source: &str) -> Vec<(TokenKind, String)> {
    let buffer = Utf16Buffer::new(source);
    tokenize_xquery(source)
        .into_iter()
        .map(|t| (t.kind, buffer.text(t.start, t.end)))
        .collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize_xquery(source).into_iter().map(|t| t.kind).collect()
}

fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_owned())
}

#[test]
fn names_and_whitespace() {
    assert_eq!(
        lex("for $x in\t\r\nfn:abc-d.e"),
        vec![
            tok(TokenKind::NcName, "for"),
            tok(TokenKind::WhiteSpace, " "),
            tok(TokenKind::VariableIndicator, "$"),
            tok(TokenKind::NcName, "x"),
            tok(TokenKind::WhiteSpace, " "),
            tok(TokenKind::NcName, "in"),
            tok(TokenKind::WhiteSpace, "\t\r\n"),
            tok(TokenKind::NcName, "fn"),
            tok(TokenKind::Colon, ":"),
            tok(TokenKind::NcName, "abc-d.e"),
        ]
    );
}

#[test]
fn non_bmp_name() {
    // U+10907 is a name start character outside the BMP.
    let source = "\u{10907}x";
    let tokens = tokenize_xquery(source);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::NcName);
    assert_eq!(tokens[0].end, 3);
}

#[test]
fn numbers() {
    assert_eq!(
        lex("1 2.5 .5 3. 1e3 2.5E-2"),
        vec![
            tok(TokenKind::IntegerLiteral, "1"),
            tok(TokenKind::WhiteSpace, " "),
            tok(TokenKind::DecimalLiteral, "2.5"),
            tok(TokenKind::WhiteSpace, " "),
            tok(TokenKind::DecimalLiteral, ".5"),
            tok(TokenKind::WhiteSpace, " "),
            tok(TokenKind::DecimalLiteral, "3."),
            tok(TokenKind::WhiteSpace, " "),
            tok(TokenKind::DoubleLiteral, "1e3"),
            tok(TokenKind::WhiteSpace, " "),
            tok(TokenKind::DoubleLiteral, "2.5E-2"),
        ]
    );
}

#[test]
fn number_backtracking() {
    assert_eq!(
        lex("1..2"),
        vec![
            tok(TokenKind::IntegerLiteral, "1"),
            tok(TokenKind::DotDot, ".."),
            tok(TokenKind::IntegerLiteral, "2"),
        ]
    );
    assert_eq!(
        lex("1e+x"),
        vec![
            tok(TokenKind::IntegerLiteral, "1"),
            tok(TokenKind::NcName, "e"),
            tok(TokenKind::Plus, "+"),
            tok(TokenKind::NcName, "x"),
        ]
    );
}

#[test]
fn operators() {
    assert_eq!(
        kinds("( ) [ ] { } , ; @ % ? ?: # * + - | || / // : :: := = => ! != < <= << > >= >> . .."),
        [
            TokenKind::ParenthesisOpen,
            TokenKind::ParenthesisClose,
            TokenKind::SquareOpen,
            TokenKind::SquareClose,
            TokenKind::BlockOpen,
            TokenKind::BlockClose,
            TokenKind::Comma,
            TokenKind::Separator,
            TokenKind::At,
            TokenKind::Annotation,
            TokenKind::Question,
            TokenKind::Elvis,
            TokenKind::Hash,
            TokenKind::Star,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Union,
            TokenKind::Concatenation,
            TokenKind::Slash,
            TokenKind::DoubleSlash,
            TokenKind::Colon,
            TokenKind::AxisSeparator,
            TokenKind::Assign,
            TokenKind::Equal,
            TokenKind::Arrow,
            TokenKind::Bang,
            TokenKind::NotEqual,
            TokenKind::LessThan,
            TokenKind::LessEqual,
            TokenKind::NodeBefore,
            TokenKind::GreaterThan,
            TokenKind::GreaterEqual,
            TokenKind::NodeAfter,
            TokenKind::Dot,
            TokenKind::DotDot,
        ]
        .into_iter()
        .flat_map(|k| [k, TokenKind::WhiteSpace])
        .take(69)
        .collect::<Vec<_>>()
    );
}

#[test]
fn bad_character_is_one_codepoint() {
    assert_eq!(
        lex("a\u{1F600}&"),
        vec![
            tok(TokenKind::NcName, "a"),
            tok(TokenKind::BadCharacter, "\u{1F600}"),
            tok(TokenKind::BadCharacter, "&"),
        ]
    );
}

#[test]
fn string_literals() {
    assert_eq!(
        lex(r#""a""b&lt;&#65;&#x41;&;&foo;&x" 'c''d'"#),
        vec![
            tok(TokenKind::StringLiteralStart, "\""),
            tok(TokenKind::StringLiteralContents, "a"),
            tok(TokenKind::EscapedCharacter, "\"\""),
            tok(TokenKind::StringLiteralContents, "b"),
            tok(TokenKind::PredefinedEntityReference, "&lt;"),
            tok(TokenKind::CharacterReference, "&#65;"),
            tok(TokenKind::CharacterReference, "&#x41;"),
            tok(TokenKind::EmptyEntityReference, "&;"),
            tok(TokenKind::PartialEntityReference, "&foo;"),
            tok(TokenKind::PartialEntityReference, "&x"),
            tok(TokenKind::StringLiteralEnd, "\""),
            tok(TokenKind::WhiteSpace, " "),
            tok(TokenKind::StringLiteralStart, "'"),
            tok(TokenKind::StringLiteralContents, "c"),
            tok(TokenKind::EscapedCharacter, "''"),
            tok(TokenKind::StringLiteralContents, "d"),
            tok(TokenKind::StringLiteralEnd, "'"),
        ]
    );
}

#[test]
fn other_quote_is_contents() {
    assert_eq!(
        lex(r#""it's""#),
        vec![
            tok(TokenKind::StringLiteralStart, "\""),
            tok(TokenKind::StringLiteralContents, "it's"),
            tok(TokenKind::StringLiteralEnd, "\""),
        ]
    );
}

#[test]
fn unterminated_string_stays_in_string_state() {
    let tokens = tokenize_xquery("'abc");
    let last = tokens.last().map(|t| t.state);
    assert_eq!(last, Some(LexerState::host(STRING_APOS)));
    let tokens = tokenize_xquery("\"");
    assert_eq!(tokens[0].state, LexerState::host(STRING_QUOT));
}

#[test]
fn comment_channel() {
    let tokens = tokenize_xquery("(: Test :)");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::CommentStartTag,
            TokenKind::WhiteSpace,
            TokenKind::Contents,
            TokenKind::CommentEndTag,
        ]
    );
    assert_eq!(tokens[0].state.channel(), COMMENT);
    assert_eq!(tokens[1].state.channel(), COMMENT);
    assert_eq!(tokens[3].state, LexerState::INITIAL);
}

#[test]
fn xqdoc_lookahead() {
    let tokens = tokenize_xquery("(:~x:)");
    assert_eq!(tokens[0].kind, TokenKind::CommentStartTag);
    assert_eq!(tokens[0].end, 2);
    assert_eq!(tokens[0].state.channel(), XQDOC);
    assert_eq!(tokens[1].kind, TokenKind::XqDocCommentMarker);
}

#[test]
fn braced_uri_channel() {
    let tokens = tokenize_xquery("Q{urn:x}local");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::BracedUriLiteralStart,
            TokenKind::StringLiteralContents,
            TokenKind::BracedUriLiteralEnd,
            TokenKind::NcName,
        ]
    );
    assert_eq!(tokens[0].state.channel(), BRACED_URI);
    assert!(tokens[2].state.is_host());
}

#[test]
fn xml_comment() {
    assert_eq!(
        lex("<!-- a - b --><!-"),
        vec![
            tok(TokenKind::XmlCommentStartTag, "<!--"),
            tok(TokenKind::XmlComment, " a - b "),
            tok(TokenKind::XmlCommentEndTag, "-->"),
            tok(TokenKind::LessThan, "<"),
            tok(TokenKind::Bang, "!"),
            tok(TokenKind::Minus, "-"),
        ]
    );
}

#[test]
fn empty_xml_comment() {
    let tokens = tokenize_xquery("<!---->");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::XmlCommentStartTag, TokenKind::XmlCommentEndTag]
    );
}

#[test]
fn unterminated_xml_comment() {
    let tokens = tokenize_xquery("<!-- x");
    assert_eq!(tokens.last().map(|t| t.state), Some(LexerState::host(XML_COMMENT)));
}
