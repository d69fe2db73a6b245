use xq_ir::{NodeId, NodeKind, SyntaxTree};
use xq_lexer_core::TokenKind;

use super::require;
use crate::{ConformanceReporter, ConformanceValidator, SpecId, SpecVersion, ValidatorError};

/// Product extensions, plus products that shipped a standard construct
/// ahead of the standard itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct VendorExtensionValidator;

impl ConformanceValidator for VendorExtensionValidator {
    fn name(&self) -> &'static str {
        "vendor-extensions"
    }

    fn validate(
        &self,
        tree: &SyntaxTree,
        node: NodeId,
        reporter: &mut dyn ConformanceReporter,
    ) -> Result<(), ValidatorError> {
        let (required, operator) = match tree.kind(node) {
            // `binary { "DEADBEEF" }`
            NodeKind::BinaryConstructor => (SpecVersion::new(SpecId::MarkLogic, 4, 0), None),
            // MarkLogic 6 accepts try/catch in its 1.0-ml dialect.
            NodeKind::TryCatchExpr => (SpecVersion::new(SpecId::MarkLogic, 6, 0), None),
            // `$node update { delete node a }`
            NodeKind::UpdateExpr => (SpecVersion::new(SpecId::BaseX, 7, 8), None),
            NodeKind::ElvisExpr => (
                SpecVersion::new(SpecId::BaseX, 9, 1),
                Some(TokenKind::Elvis),
            ),
            // `.{ . + 1 }`
            NodeKind::ContextItemFunctionExpr => (SpecVersion::new(SpecId::Saxon, 10, 0), None),
            // `declare type my:int = xs:integer;`
            NodeKind::TypeAlias => (SpecVersion::new(SpecId::Saxon, 9, 8), None),
            _ => return Ok(()),
        };
        require(tree, node, reporter, required, operator);
        Ok(())
    }
}
