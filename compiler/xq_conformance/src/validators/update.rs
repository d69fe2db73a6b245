use xq_ir::{NodeId, NodeKind, SyntaxTree};

use super::require;
use crate::{ConformanceReporter, ConformanceValidator, SpecVersion, ValidatorError};

/// XQuery Update Facility expressions.
#[derive(Clone, Copy, Debug, Default)]
pub struct UpdateFacilityValidator;

impl ConformanceValidator for UpdateFacilityValidator {
    fn name(&self) -> &'static str {
        "update-facility"
    }

    fn validate(
        &self,
        tree: &SyntaxTree,
        node: NodeId,
        reporter: &mut dyn ConformanceReporter,
    ) -> Result<(), ValidatorError> {
        let required = match tree.kind(node) {
            NodeKind::InsertExpr
            | NodeKind::DeleteExpr
            | NodeKind::ReplaceExpr
            | NodeKind::RenameExpr
            | NodeKind::CopyModifyExpr => SpecVersion::UPDATE_1_0,
            NodeKind::TransformWithExpr => SpecVersion::UPDATE_3_0,
            _ => return Ok(()),
        };
        require(tree, node, reporter, required, None);
        Ok(())
    }
}
