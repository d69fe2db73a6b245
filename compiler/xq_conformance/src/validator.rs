//! The validator seam.
//!
//! A validator inspects one node and reports the requirements that node
//! imposes. It does not know the active dialect and never emits
//! diagnostics itself; the [`ConformanceAggregator`](crate::ConformanceAggregator)
//! merges what every validator reported and decides.

use xq_ir::{NodeId, NodeKind, SyntaxTree};

use crate::Requirement;

/// Sink for requirements found while validating one node.
pub trait ConformanceReporter {
    /// `element` (the node or one of its descendants) needs `requirement`.
    /// `message` replaces the generic "requires ..." text if this report
    /// ends up as the diagnostic.
    fn requires(&mut self, element: NodeId, requirement: Requirement, message: Option<String>);
}

/// A rule provider for one family of constructs.
///
/// Validators must be pure and independent: the result of a walk may not
/// depend on which validators run or in which order.
pub trait ConformanceValidator: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn validate(
        &self,
        tree: &SyntaxTree,
        node: NodeId,
        reporter: &mut dyn ConformanceReporter,
    ) -> Result<(), ValidatorError>;
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    #[error("{kind} node {node:?} is missing its {expected}")]
    UnexpectedShape {
        node: NodeId,
        kind: NodeKind,
        expected: &'static str,
    },
    #[error("cannot interpret `{text}` in {kind} node {node:?}")]
    UnrecognizedText {
        node: NodeId,
        kind: NodeKind,
        text: String,
    },
}

impl ValidatorError {
    pub fn missing(tree: &SyntaxTree, node: NodeId, expected: &'static str) -> Self {
        ValidatorError::UnexpectedShape {
            node,
            kind: tree.kind(node),
            expected,
        }
    }
}
