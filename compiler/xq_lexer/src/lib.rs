//! Scanners for the XQuery language family.
//!
//! Each language is a [`StateMachine`](xq_lexer_core::StateMachine); the
//! presets in this crate register them on a
//! [`Composer`](xq_lexer_core::Composer):
//!
//! | channel | machine | opened by |
//! |---|---|---|
//! | host | [`XQueryMachine`] or [`ValueTemplateMachine`] | |
//! | [`COMMENT`] | [`CommentMachine`] | `(:` |
//! | [`XQDOC`] | [`XqDocMachine`] | `(:~` |
//! | [`BRACED_URI`] | [`BracedUriMachine`] | `Q{` |
//! | [`TEMPLATE_EXPRESSION`] | [`TemplateExpressionMachine`] | `{` in a value template |
//!
//! Malformed input never fails; it shows up as error token kinds, which
//! [`lex_errors`] turns into diagnostics.

mod braced_uri;
pub mod char_class;
mod comment;
mod errors;
mod language;
mod template;
mod xqdoc;
mod xquery;

use xq_lexer_core::Channel;

pub use braced_uri::BracedUriMachine;
pub use comment::CommentMachine;
pub use errors::lex_errors;
pub use language::{
    tokenize_value_template, tokenize_xqdoc, tokenize_xquery, value_template_composer,
    xqdoc_composer, xquery_composer, Language, UnknownLanguage,
};
pub use template::{TemplateExpressionMachine, ValueTemplateMachine};
pub use xqdoc::XqDocMachine;
pub use xquery::XQueryMachine;

/// `(: ... :)` comment.
pub const COMMENT: Channel = Channel::new(1);
/// `(:~ ... :)` xqDoc comment.
pub const XQDOC: Channel = Channel::new(2);
/// Body of a `Q{...}` literal.
pub const BRACED_URI: Channel = Channel::new(3);
/// Expression between `{` and `}` in a value template.
pub const TEMPLATE_EXPRESSION: Channel = Channel::new(4);

/// Human-readable name of an embedded region, for diagnostics.
pub fn channel_name(channel: Channel) -> &'static str {
    match channel {
        COMMENT => "comment",
        XQDOC => "xqDoc comment",
        BRACED_URI => "braced URI literal",
        TEMPLATE_EXPRESSION => "value template expression",
        _ => "embedded region",
    }
}
