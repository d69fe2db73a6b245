//! The `explain` command: documentation for an error code.

use xq_diagnostic::ErrorCode;

use super::CommandError;

/// Accepts `XPST0003`, `xpst0003` or `err:XPST0003`.
pub fn explain_error(code: &str) -> Result<String, CommandError> {
    let code: ErrorCode = code.parse()?;
    Ok(format!(
        "{code}: {}\n\n{}",
        code.description(),
        code.explanation()
    ))
}
