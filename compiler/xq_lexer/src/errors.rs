//! Diagnostics for malformed input.
//!
//! Scanning never fails; problems are encoded as token kinds (and, for an
//! unterminated string or XML comment, as the host state left at the end).
//! This module turns them into [`Diagnostic`]s after the fact.

use tracing::debug;
use xq_diagnostic::{Diagnostic, ErrorCode};
use xq_ir::Span;
use xq_lexer_core::{LexerState, Token, TokenKind, Utf16Buffer};

use crate::char_class::is_xml_char;
use crate::{channel_name, xquery, Language};

/// Lexical diagnostics for `tokens`, a complete token stream of `buffer`
/// scanned as `language`.
pub fn lex_errors(language: Language, buffer: &Utf16Buffer, tokens: &[Token]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut previous = LexerState::INITIAL;

    for &token in tokens {
        if let Some(diag) = token_error(buffer, token, previous) {
            diagnostics.push(diag);
        }
        previous = token.state;
    }

    if language == Language::XQuery && previous.is_host() {
        let end = Span::point(buffer.len());
        let open = match previous.private() {
            xquery::STRING_QUOT | xquery::STRING_APOS => Some("string literal"),
            xquery::XML_COMMENT => Some("XML comment"),
            _ => None,
        };
        if let Some(what) = open {
            diagnostics.push(
                Diagnostic::error(ErrorCode::XPST0003)
                    .with_message(format!("unterminated {what}"))
                    .with_label(end, "input ends here"),
            );
        }
    }

    debug!(
        language = language.name(),
        tokens = tokens.len(),
        errors = diagnostics.len(),
        "lexical diagnostics"
    );
    diagnostics
}

fn token_error(buffer: &Utf16Buffer, token: Token, previous: LexerState) -> Option<Diagnostic> {
    let span = Span::from(token);
    let text = || buffer.text(token.start, token.end);
    let syntax = |message: String, label: &str| {
        Diagnostic::error(ErrorCode::XPST0003)
            .with_message(message)
            .with_label(span, label)
    };

    match token.kind {
        TokenKind::BadCharacter => Some(syntax(
            format!("unexpected character `{}`", text().escape_debug()),
            "not valid here",
        )),
        TokenKind::PartialEntityReference => Some(syntax(
            format!("incomplete entity reference `{}`", text()),
            "expected `&lt;`, `&gt;`, `&amp;`, `&quot;`, `&apos;` or a character reference",
        )),
        TokenKind::EmptyEntityReference => Some(syntax(
            "empty entity reference".to_owned(),
            "expected an entity name",
        )),
        TokenKind::UnexpectedEndOfBlock => Some(syntax(
            format!("unterminated {}", channel_name(previous.channel())),
            "input ends here",
        )),
        TokenKind::UnterminatedComment => Some(syntax(
            "unterminated comment".to_owned(),
            "input ends here",
        )),
        TokenKind::UnterminatedBracedUriLiteral => Some(syntax(
            "unterminated braced URI literal".to_owned(),
            "missing `}`",
        )),
        TokenKind::CharacterReference => {
            let text = text();
            let valid = character_reference_value(&text).is_some_and(is_xml_char);
            (!valid).then(|| {
                Diagnostic::error(ErrorCode::XQST0090)
                    .with_message(format!("`{text}` does not reference an XML character"))
                    .with_label(span, "invalid character reference")
            })
        }
        _ => None,
    }
}

/// Value of `&#123;` or `&#x7B;`; `None` if it does not fit a `u32`.
fn character_reference_value(text: &str) -> Option<u32> {
    let body = text.strip_prefix("&#")?.strip_suffix(';')?;
    match body.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => body.parse().ok(),
    }
}
