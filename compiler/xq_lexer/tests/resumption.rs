#![allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]

//! Restarting a scanner from any `(offset, state)` it reported must produce
//! exactly the tokens a full scan produces from that point on.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use xq_lexer::{Language, BRACED_URI, COMMENT, XQDOC};
use xq_lexer_core::{tokenize, Composer, Lexer, Token, TokenKind, Utf16Buffer};

fn resumed_suffix(composer: &Composer, buffer: &Utf16Buffer, from: Token) -> Vec<Token> {
    Lexer::resume(composer, buffer.as_units(), from.end, buffer.len(), from.state).collect()
}

fn assert_resumable(language: Language, source: &str) {
    let composer = language.composer();
    let buffer = Utf16Buffer::new(source);
    let full = tokenize(&composer, source);
    for (i, &token) in full.iter().enumerate() {
        assert_eq!(
            resumed_suffix(&composer, &buffer, token),
            full[i + 1..].to_vec(),
            "resuming after token {i} ({}) of {source:?}",
            token.kind
        );
    }
}

#[test]
fn xquery_samples() {
    for source in [
        "xquery version \"3.1\"; (: header :) declare function local:f($a) { $a?b };",
        "(:~\n : Module docs.\n : @param $x the input\n :)\nQ{http://x}y || 'it''s &amp; &#65;'",
        "<!-- direct --> 1.5e3 ..2 `bad`",
        "'unterminated &",
        "(: nested (: deep :) still open",
    ] {
        assert_resumable(Language::XQuery, source);
    }
}

#[test]
fn value_template_samples() {
    for source in [
        "a{{b}}{map{'k':1}?k}c",
        "x{ (: c :) Q{u}n }y{'}'}",
        "{1 + ",
    ] {
        assert_resumable(Language::ValueTemplate, source);
    }
}

#[test]
fn xqdoc_samples() {
    assert_resumable(Language::XqDoc, "~ Summary\n : @param $p text\n@return x");
}

/// After an embedded region closes, the host continues exactly as if it
/// had been started fresh in the state it parked.
#[test]
fn embedded_regions_return_to_parked_state() {
    let composer = Language::XQuery.composer();
    for (source, channel) in [
        ("a(: c :)b", COMMENT),
        ("a(:~ d :)b", XQDOC),
        ("aQ{u}b", BRACED_URI),
    ] {
        let buffer = Utf16Buffer::new(source);
        let tokens = tokenize(&composer, source);
        let open = tokens
            .iter()
            .position(|t| t.state.channel() == channel)
            .unwrap_or_else(|| panic!("{source:?} never entered channel {channel:?}"));
        let close = tokens
            .iter()
            .skip(open)
            .position(|t| t.state.is_host())
            .map(|offset| open + offset)
            .unwrap_or_else(|| panic!("{source:?} never left channel {channel:?}"));

        let parked = tokens[open - 1].state;
        assert_eq!(tokens[close].state, parked);

        let fresh: Vec<Token> =
            Lexer::resume(&composer, buffer.as_units(), tokens[close].end, buffer.len(), parked)
                .collect();
        assert_eq!(fresh, tokens[close + 1..].to_vec());
        assert_eq!(fresh.first().map(|t| t.kind), Some(TokenKind::NcName));
    }
}

fn xquery_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("(:"),
            Just(":)"),
            Just("~"),
            Just("@param"),
            Just("$"),
            Just("Q{"),
            Just("{"),
            Just("}"),
            Just("\""),
            Just("'"),
            Just("&"),
            Just("&lt;"),
            Just("&#x"),
            Just(";"),
            Just("<!--"),
            Just("-->"),
            Just("1"),
            Just("."),
            Just("e"),
            Just("ab"),
            Just(" "),
            Just("\n"),
            Just(":"),
            Just("\u{10907}"),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn xquery_resumes_anywhere(source in xquery_text(), pick in any::<prop::sample::Index>()) {
        let composer = Language::XQuery.composer();
        let buffer = Utf16Buffer::new(&source);
        let full = tokenize(&composer, &source);
        prop_assume!(!full.is_empty());
        let i = pick.index(full.len());
        prop_assert_eq!(resumed_suffix(&composer, &buffer, full[i]), full[i + 1..].to_vec());
    }

    #[test]
    fn value_template_resumes_anywhere(source in xquery_text(), pick in any::<prop::sample::Index>()) {
        let composer = Language::ValueTemplate.composer();
        let buffer = Utf16Buffer::new(&source);
        let full = tokenize(&composer, &source);
        prop_assume!(!full.is_empty());
        let i = pick.index(full.len());
        prop_assert_eq!(resumed_suffix(&composer, &buffer, full[i]), full[i + 1..].to_vec());
    }

    #[test]
    fn tokens_tile_the_input(source in xquery_text()) {
        for language in Language::ALL {
            let buffer = Utf16Buffer::new(&source);
            let tokens = tokenize(&language.composer(), &source);
            let mut offset = 0;
            for token in &tokens {
                prop_assert_eq!(token.start, offset);
                offset = token.end;
            }
            prop_assert_eq!(offset, buffer.len());
        }
    }
}
