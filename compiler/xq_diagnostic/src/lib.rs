//! Diagnostics for the XQuery front end.
//!
//! Every diagnostic carries a W3C error code (`XPST0003`, ...), a message,
//! and labeled UTF-16 spans. Codes are searchable with `xqc explain`.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, UnknownErrorCode};
