use xq_ir::{NodeId, NodeKind, SyntaxTree};
use xq_lexer_core::TokenKind;

use super::require;
use crate::{ConformanceReporter, ConformanceValidator, SpecVersion, ValidatorError};

/// XQuery Scripting Extension statements.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptingValidator;

impl ConformanceValidator for ScriptingValidator {
    fn name(&self) -> &'static str {
        "scripting"
    }

    fn validate(
        &self,
        tree: &SyntaxTree,
        node: NodeId,
        reporter: &mut dyn ConformanceReporter,
    ) -> Result<(), ValidatorError> {
        let operator = match tree.kind(node) {
            NodeKind::AssignmentExpr => Some(TokenKind::Assign),
            NodeKind::BlockExpr | NodeKind::WhileStatement | NodeKind::ExitExpr => None,
            _ => return Ok(()),
        };
        require(tree, node, reporter, SpecVersion::SCRIPTING_1_0, operator);
        Ok(())
    }
}
