//! The `lex` command: dump the token stream of a file.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;
use xq_diagnostic::Diagnostic;
use xq_lexer::{lex_errors, Language};
use xq_lexer_core::{Lexer, Token, Utf16Buffer};

use super::CommandError;

/// Tokens of one source text, with lexical diagnostics.
#[derive(Debug)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
    /// One line per token: span, kind, exit state, and text.
    pub listing: String,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

pub fn lex_source(language: Language, source: &str) -> LexOutput {
    let buffer = Utf16Buffer::new(source);
    let composer = language.composer();
    let tokens: Vec<Token> = Lexer::new(&composer, &buffer).collect();
    let diagnostics = lex_errors(language, &buffer, &tokens);

    let mut listing = String::new();
    for token in &tokens {
        let span = format!("{}..{}", token.start, token.end);
        // Writing to a String cannot fail.
        let _ = writeln!(
            listing,
            "{span:<12} {:<28} {} {:?}",
            token.kind.name(),
            token.state,
            buffer.text(token.start, token.end),
        );
    }
    LexOutput {
        tokens,
        diagnostics,
        listing,
    }
}

pub fn lex_file(path: &Path, language: Language) -> Result<LexOutput, CommandError> {
    let source = std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_owned(),
        source,
    })?;
    let output = lex_source(language, &source);
    debug!(
        path = %path.display(),
        %language,
        tokens = output.tokens.len(),
        diagnostics = output.diagnostics.len(),
        "lexed"
    );
    Ok(output)
}
