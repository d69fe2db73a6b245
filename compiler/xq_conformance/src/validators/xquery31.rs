use xq_ir::{NodeId, NodeKind, SyntaxTree};
use xq_lexer_core::TokenKind;

use super::require;
use crate::{
    ConformanceReporter, ConformanceValidator, SpecId, SpecVersion, ValidatorError,
};

/// Maps and arrays as drafted before XQuery 3.1: `map { "a" := 1 }`.
const DRAFT_MAPS_SAXON: SpecVersion = SpecVersion::new(SpecId::Saxon, 9, 4);
const DRAFT_MAPS_BASEX: SpecVersion = SpecVersion::new(SpecId::BaseX, 7, 8);

/// Constructs introduced by XQuery 3.1.
///
/// Map constructors predate 3.1 in Saxon and BaseX, with `:=` separating
/// key and value. That separator was replaced by `:` in the final
/// recommendation, so an entry using it needs one of those vendors even
/// under XQuery 3.1.
#[derive(Clone, Copy, Debug, Default)]
pub struct XQuery31Validator;

impl ConformanceValidator for XQuery31Validator {
    fn name(&self) -> &'static str {
        "xquery-3.1"
    }

    fn validate(
        &self,
        tree: &SyntaxTree,
        node: NodeId,
        reporter: &mut dyn ConformanceReporter,
    ) -> Result<(), ValidatorError> {
        match tree.kind(node) {
            NodeKind::MapConstructor => require(
                tree,
                node,
                reporter,
                SpecVersion::XQUERY_3_1 | DRAFT_MAPS_SAXON | DRAFT_MAPS_BASEX,
                None,
            ),
            NodeKind::MapConstructorEntry => {
                if tree.child_token(node, TokenKind::Assign).is_some() {
                    require(
                        tree,
                        node,
                        reporter,
                        DRAFT_MAPS_SAXON | DRAFT_MAPS_BASEX,
                        Some(TokenKind::Assign),
                    );
                } else if tree.child_token(node, TokenKind::Colon).is_some() {
                    require(
                        tree,
                        node,
                        reporter,
                        SpecVersion::XQUERY_3_1,
                        Some(TokenKind::Colon),
                    );
                } else {
                    return Err(ValidatorError::missing(tree, node, "key/value separator"));
                }
            }
            NodeKind::ArrowExpr => require(
                tree,
                node,
                reporter,
                SpecVersion::XQUERY_3_1,
                Some(TokenKind::Arrow),
            ),
            NodeKind::Lookup | NodeKind::UnaryLookup => require(
                tree,
                node,
                reporter,
                SpecVersion::XQUERY_3_1,
                Some(TokenKind::Question),
            ),
            NodeKind::SquareArrayConstructor | NodeKind::CurlyArrayConstructor => {
                require(tree, node, reporter, SpecVersion::XQUERY_3_1, None);
            }
            _ => {}
        }
        Ok(())
    }
}
