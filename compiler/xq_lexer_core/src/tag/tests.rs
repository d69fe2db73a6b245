use super::*;

// === TokenKind discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(TokenKind::NcName as u8, 0);
    assert_eq!(TokenKind::BracedUriLiteral as u8, 4);

    assert_eq!(TokenKind::StringLiteralStart as u8, 16);
    assert_eq!(TokenKind::BracedUriLiteralEnd as u8, 23);

    assert_eq!(TokenKind::CommentStartTag as u8, 32);
    assert_eq!(TokenKind::XmlCommentEndTag as u8, 43);

    assert_eq!(TokenKind::ValueContents as u8, 48);
    assert_eq!(TokenKind::ValueTemplateClose as u8, 50);

    assert_eq!(TokenKind::Equal as u8, 64);
    assert_eq!(TokenKind::ParenthesisOpen as u8, 96);
    assert_eq!(TokenKind::WhiteSpace as u8, 112);

    assert_eq!(TokenKind::BadCharacter as u8, 240);
    assert_eq!(TokenKind::UnexpectedEndOfBlock as u8, 243);
    assert_eq!(TokenKind::UnterminatedBracedUriLiteral as u8, 245);
    assert_eq!(TokenKind::EndOfBuffer as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

// === Classification ===

#[test]
fn error_kinds() {
    assert!(TokenKind::BadCharacter.is_error());
    assert!(TokenKind::PartialEntityReference.is_error());
    assert!(TokenKind::EmptyEntityReference.is_error());
    assert!(TokenKind::UnexpectedEndOfBlock.is_error());
    assert!(TokenKind::UnterminatedComment.is_error());
    assert!(TokenKind::UnterminatedBracedUriLiteral.is_error());
    assert!(!TokenKind::UnterminatedComment.is_trivia());
    assert!(!TokenKind::EndOfBuffer.is_error());
    assert!(!TokenKind::NcName.is_error());
}

#[test]
fn trivia_kinds() {
    assert!(TokenKind::WhiteSpace.is_trivia());
    assert!(TokenKind::Comment.is_trivia());
    assert!(TokenKind::Contents.is_trivia());
    assert!(!TokenKind::StringLiteralContents.is_trivia());
    assert!(!TokenKind::ValueContents.is_trivia());
}

#[test]
fn punctuation_range() {
    assert!(TokenKind::Arrow.is_punctuation());
    assert!(TokenKind::Separator.is_punctuation());
    assert!(!TokenKind::WhiteSpace.is_punctuation());
    assert!(!TokenKind::ValueTemplateOpen.is_punctuation());
}

// === Lexeme and names ===

#[test]
fn fixed_lexemes() {
    assert_eq!(TokenKind::CommentStartTag.lexeme(), Some("(:"));
    assert_eq!(TokenKind::CommentEndTag.lexeme(), Some(":)"));
    assert_eq!(TokenKind::BracedUriLiteralStart.lexeme(), Some("Q{"));
    assert_eq!(TokenKind::Elvis.lexeme(), Some("?:"));
    assert_eq!(TokenKind::Assign.lexeme(), Some(":="));
    assert_eq!(TokenKind::Arrow.lexeme(), Some("=>"));
    assert_eq!(TokenKind::XmlCommentStartTag.lexeme(), Some("<!--"));
}

#[test]
fn variable_kinds_have_no_lexeme() {
    assert_eq!(TokenKind::NcName.lexeme(), None);
    assert_eq!(TokenKind::Contents.lexeme(), None);
    assert_eq!(TokenKind::WhiteSpace.lexeme(), None);
    assert_eq!(TokenKind::EndOfBuffer.lexeme(), None);
}

#[test]
fn display_uses_upper_snake_name() {
    assert_eq!(TokenKind::CommentStartTag.to_string(), "COMMENT_START_TAG");
    assert_eq!(TokenKind::XqDocCommentMarker.to_string(), "XQDOC_COMMENT_MARKER");
    assert_eq!(TokenKind::EndOfBuffer.to_string(), "END_OF_BUFFER");
}
