//! Ready-made compositions of the scanners in this crate.

use std::fmt;
use std::str::FromStr;

use xq_lexer_core::{tokenize, Composer, Token};

use crate::{
    BracedUriMachine, CommentMachine, TemplateExpressionMachine, ValueTemplateMachine,
    XQueryMachine, XqDocMachine, BRACED_URI, COMMENT, TEMPLATE_EXPRESSION, XQDOC,
};

/// XQuery with comment, xqDoc and braced URI channels.
pub fn xquery_composer() -> Composer {
    Composer::new(XQueryMachine)
        .with_channel(COMMENT, CommentMachine)
        .with_channel(XQDOC, XqDocMachine)
        .with_channel(BRACED_URI, BracedUriMachine)
}

/// The text of an xqDoc comment on its own, e.g. an editor injection.
pub fn xqdoc_composer() -> Composer {
    Composer::new(XqDocMachine)
}

/// Attribute value template text with embedded expressions.
pub fn value_template_composer() -> Composer {
    Composer::new(ValueTemplateMachine).with_channel(TEMPLATE_EXPRESSION, TemplateExpressionMachine)
}

pub fn tokenize_xquery(source: &str) -> Vec<Token> {
    tokenize(&xquery_composer(), source)
}

pub fn tokenize_xqdoc(source: &str) -> Vec<Token> {
    tokenize(&xqdoc_composer(), source)
}

pub fn tokenize_value_template(source: &str) -> Vec<Token> {
    tokenize(&value_template_composer(), source)
}

/// Languages that have a scanner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    XQuery,
    XqDoc,
    ValueTemplate,
}

impl Language {
    pub const ALL: &'static [Language] = &[Language::XQuery, Language::XqDoc, Language::ValueTemplate];

    pub fn composer(self) -> Composer {
        match self {
            Language::XQuery => xquery_composer(),
            Language::XqDoc => xqdoc_composer(),
            Language::ValueTemplate => value_template_composer(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::XQuery => "xquery",
            Language::XqDoc => "xqdoc",
            Language::ValueTemplate => "template",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown language `{0}` (expected xquery, xqdoc or template)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xquery" | "xq" => Ok(Language::XQuery),
            "xqdoc" => Ok(Language::XqDoc),
            "template" | "avt" => Ok(Language::ValueTemplate),
            _ => Err(UnknownLanguage(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests;
