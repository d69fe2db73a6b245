//! Dialect and version conformance checking for XQuery syntax trees.
//!
//! Every XQuery processor speaks its own dialect: some W3C version plus a
//! set of extension specifications and vendor syntax. This crate decides,
//! node by node, whether a syntax tree stays inside the configured
//! [`Dialect`].
//!
//! Checking is split in two:
//!
//! - [`ConformanceValidator`]s know which constructs need which
//!   specifications. They report a [`Requirement`] per node and never see
//!   the dialect.
//! - The [`ConformanceAggregator`] walks the tree, merges every validator's
//!   report for a node, and emits at most one [`ConformanceDiagnostic`] per
//!   node when the merged requirement is not met.
//!
//! Merging makes the outcome independent of validator order: a construct
//! that is standard XQuery 3.0 but also a MarkLogic 6 extension is accepted
//! under either, whichever validator happens to run first.
//!
//! ```text
//! let aggregator = ConformanceAggregator::new("marklogic/6.0".parse()?)
//!     .with_validators(default_validators());
//! aggregator.check(&tree, |diagnostic| report(diagnostic.into_diagnostic()));
//! ```

mod aggregator;
mod dialect;
mod requirement;
mod spec;
mod validator;
pub mod validators;

pub use aggregator::{Cancelled, ConformanceAggregator, ConformanceDiagnostic};
pub use dialect::{Dialect, DialectError};
pub use requirement::Requirement;
pub use spec::{SpecId, SpecIdError, SpecVersion, Version, VersionError};
pub use validator::{ConformanceReporter, ConformanceValidator, ValidatorError};
pub use validators::default_validators;
