//! The `dialect` command: what a dialect string resolves to.

use std::fmt::Write as _;

use xq_conformance::Dialect;

use super::CommandError;

pub fn describe_dialect(text: &str) -> Result<String, CommandError> {
    let dialect: Dialect = text.parse()?;
    let mut out = format!("{dialect}\n");
    for (i, spec) in dialect.specs().iter().enumerate() {
        let role = if i == 0 { "product" } else { "supports" };
        let w3c = if spec.spec.is_w3c() { "W3C" } else { "vendor" };
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  {role:<9} {spec} ({w3c})");
    }
    Ok(out)
}
