use xq_ir::{NodeId, NodeKind, SyntaxTree};
use xq_lexer_core::TokenKind;

use super::require;
use crate::{ConformanceReporter, ConformanceValidator, SpecVersion, ValidatorError};

/// Constructs introduced by XQuery 3.0.
#[derive(Clone, Copy, Debug, Default)]
pub struct XQuery30Validator;

impl ConformanceValidator for XQuery30Validator {
    fn name(&self) -> &'static str {
        "xquery-3.0"
    }

    fn validate(
        &self,
        tree: &SyntaxTree,
        node: NodeId,
        reporter: &mut dyn ConformanceReporter,
    ) -> Result<(), ValidatorError> {
        let operator = match tree.kind(node) {
            NodeKind::StringConcatExpr => Some(TokenKind::Concatenation),
            NodeKind::SimpleMapExpr => Some(TokenKind::Bang),
            NodeKind::NamedFunctionRef => Some(TokenKind::Hash),
            NodeKind::Annotation => Some(TokenKind::Annotation),
            NodeKind::SwitchExpr
            | NodeKind::TryCatchExpr
            | NodeKind::GroupByClause
            | NodeKind::WindowClause
            | NodeKind::CountClause
            | NodeKind::InlineFunctionExpr
            | NodeKind::BracedUriLiteral
            | NodeKind::UriQualifiedName => None,
            _ => return Ok(()),
        };
        require(tree, node, reporter, SpecVersion::XQUERY_3_0, operator);
        Ok(())
    }
}
