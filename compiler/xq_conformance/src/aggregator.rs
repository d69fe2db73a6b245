//! Merging validator reports into one diagnostic per node.
//!
//! For every checkable node the aggregator runs all validators against a
//! fresh accumulator. Each report is merged into the node's requirement with
//! [`Requirement::or`]; if the merged requirement is still unsatisfied the
//! report becomes the node's offending candidate, replacing any earlier one,
//! and if it is satisfied the candidate is dropped. A candidate left after
//! the last validator yields exactly one diagnostic.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace, warn};
use xq_diagnostic::{Diagnostic, ErrorCode};
use xq_ir::{NodeId, NodeKind, Span, SyntaxTree};

use crate::{ConformanceReporter, ConformanceValidator, Dialect, Requirement};

/// One conformance problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConformanceDiagnostic {
    /// The offending element: the checked node or one of its descendants.
    pub element: NodeId,
    pub span: Span,
    pub code: ErrorCode,
    pub message: String,
    /// Everything the node's validators asked for, merged.
    pub requirement: Requirement,
}

impl ConformanceDiagnostic {
    pub fn into_diagnostic(self) -> Diagnostic {
        let label = format!("requires {}", self.requirement);
        let diag = Diagnostic::error(self.code).with_message(self.message);
        if self.requirement.is_empty() {
            diag.with_label(self.span, "")
        } else {
            diag.with_label(self.span, label)
        }
    }
}

/// Returned when a walk is cancelled between node visits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("conformance check cancelled")]
pub struct Cancelled;

/// Per-node accumulator.
struct NodeReport<'a> {
    dialect: &'a Dialect,
    merged: Requirement,
    candidate: Option<(NodeId, Option<String>)>,
}

impl ConformanceReporter for NodeReport<'_> {
    fn requires(&mut self, element: NodeId, requirement: Requirement, message: Option<String>) {
        self.merged = std::mem::take(&mut self.merged).or(&requirement);
        if self.merged.satisfied_by(self.dialect) {
            self.candidate = None;
        } else {
            self.candidate = Some((element, message));
        }
    }
}

/// Walks a syntax tree and checks each node against the active dialect.
pub struct ConformanceAggregator {
    dialect: Dialect,
    validators: Vec<Box<dyn ConformanceValidator>>,
}

impl ConformanceAggregator {
    pub fn new(dialect: Dialect) -> Self {
        ConformanceAggregator {
            dialect,
            validators: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl ConformanceValidator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    #[must_use]
    pub fn with_validators(
        mut self,
        validators: impl IntoIterator<Item = Box<dyn ConformanceValidator>>,
    ) -> Self {
        self.validators.extend(validators);
        self
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Run every validator on `node` and merge their reports.
    pub fn check_node(&self, tree: &SyntaxTree, node: NodeId) -> Option<ConformanceDiagnostic> {
        let mut report = NodeReport {
            dialect: &self.dialect,
            merged: Requirement::none(),
            candidate: None,
        };

        for validator in &self.validators {
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                validator.validate(tree, node, &mut report)
            }));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(error)) => warn!(
                    validator = validator.name(),
                    ?node,
                    %error,
                    "validator failed; keeping its earlier reports"
                ),
                Err(payload) => warn!(
                    validator = validator.name(),
                    ?node,
                    panic = panic_message(payload.as_ref()),
                    "validator panicked; keeping its earlier reports"
                ),
            }
        }

        let (element, message) = report.candidate?;
        let requirement = report.merged;
        let code = if tree.kind(node) == NodeKind::VersionDecl {
            ErrorCode::XQST0031
        } else {
            ErrorCode::XPST0003
        };
        let message = message.unwrap_or_else(|| format!("requires {requirement}"));
        trace!(?node, ?element, %requirement, "unsatisfied");
        Some(ConformanceDiagnostic {
            element,
            span: tree.span(element),
            code,
            message,
            requirement,
        })
    }

    /// Check every checkable node in pre-order, streaming diagnostics to
    /// `sink`.
    pub fn check(&self, tree: &SyntaxTree, sink: impl FnMut(ConformanceDiagnostic)) {
        let never = AtomicBool::new(false);
        // Without a cancellation flag the walk always completes.
        let _ = self.check_cancellable(tree, &never, sink);
    }

    /// Like [`check`](Self::check), but stops before the next node once
    /// `cancel` is set. A node's validators always run to completion.
    #[tracing::instrument(level = "debug", skip_all, fields(
        dialect = %self.dialect,
        nodes = tree.len(),
        validators = self.validators.len(),
    ))]
    pub fn check_cancellable(
        &self,
        tree: &SyntaxTree,
        cancel: &AtomicBool,
        mut sink: impl FnMut(ConformanceDiagnostic),
    ) -> Result<(), Cancelled> {
        let mut visited = 0usize;
        let mut reported = 0usize;
        for node in tree.preorder() {
            if !tree.kind(node).is_checkable() {
                continue;
            }
            if cancel.load(Ordering::Relaxed) {
                debug!(visited, reported, "cancelled");
                return Err(Cancelled);
            }
            visited += 1;
            if let Some(diagnostic) = self.check_node(tree, node) {
                reported += 1;
                sink(diagnostic);
            }
        }
        debug!(visited, reported, "conformance check finished");
        Ok(())
    }

    /// Collect all diagnostics.
    pub fn collect(&self, tree: &SyntaxTree) -> Vec<ConformanceDiagnostic> {
        let mut out = Vec::new();
        self.check(tree, |d| out.push(d));
        out
    }
}

impl std::fmt::Debug for ConformanceAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConformanceAggregator")
            .field("dialect", &self.dialect)
            .field(
                "validators",
                &self.validators.iter().map(|v| v.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "<non-string panic>"
    }
}
