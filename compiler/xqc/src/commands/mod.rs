//! Command handlers for the `xqc` CLI.
//!
//! Handlers return their output instead of printing it.

use std::path::PathBuf;

use xq_conformance::DialectError;
use xq_diagnostic::UnknownErrorCode;
use xq_lexer::UnknownLanguage;

mod dialect;
mod explain;
mod lex;

pub use dialect::describe_dialect;
pub use explain::explain_error;
pub use lex::{lex_file, lex_source, LexOutput};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Language(#[from] UnknownLanguage),
    #[error(transparent)]
    ErrorCode(#[from] UnknownErrorCode),
    #[error("invalid dialect: {0}")]
    Dialect(#[from] DialectError),
}
