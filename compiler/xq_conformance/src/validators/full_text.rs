use xq_ir::{NodeId, NodeKind, SyntaxTree};

use super::require;
use crate::{ConformanceReporter, ConformanceValidator, SpecVersion, ValidatorError};

/// `contains text` selections.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullTextValidator;

impl ConformanceValidator for FullTextValidator {
    fn name(&self) -> &'static str {
        "full-text"
    }

    fn validate(
        &self,
        tree: &SyntaxTree,
        node: NodeId,
        reporter: &mut dyn ConformanceReporter,
    ) -> Result<(), ValidatorError> {
        if tree.kind(node) == NodeKind::FtContainsExpr {
            require(tree, node, reporter, SpecVersion::FULL_TEXT_1_0, None);
        }
        Ok(())
    }
}
