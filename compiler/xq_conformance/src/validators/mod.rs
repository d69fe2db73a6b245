//! Built-in validators, one per construct family.

mod full_text;
mod scripting;
mod update;
mod vendor;
mod version_decl;
mod xquery30;
mod xquery31;

pub use full_text::FullTextValidator;
pub use scripting::ScriptingValidator;
pub use update::UpdateFacilityValidator;
pub use vendor::VendorExtensionValidator;
pub use version_decl::VersionDeclValidator;
pub use xquery30::XQuery30Validator;
pub use xquery31::XQuery31Validator;

use xq_ir::{NodeId, NodeKind, SyntaxTree};
use xq_lexer_core::TokenKind;

use crate::{ConformanceReporter, ConformanceValidator, Requirement};

/// Every built-in validator.
pub fn default_validators() -> Vec<Box<dyn ConformanceValidator>> {
    vec![
        Box::new(VersionDeclValidator),
        Box::new(XQuery30Validator),
        Box::new(XQuery31Validator),
        Box::new(UpdateFacilityValidator),
        Box::new(FullTextValidator),
        Box::new(ScriptingValidator),
        Box::new(VendorExtensionValidator),
    ]
}

/// What diagnostics call a construct.
pub(crate) fn construct_name(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::VersionDecl => "version declaration",
        NodeKind::Annotation => "annotation",
        NodeKind::SwitchExpr => "switch expression",
        NodeKind::TryCatchExpr => "try/catch expression",
        NodeKind::GroupByClause => "group by clause",
        NodeKind::WindowClause => "window clause",
        NodeKind::CountClause => "count clause",
        NodeKind::NamedFunctionRef => "named function reference",
        NodeKind::InlineFunctionExpr => "inline function expression",
        NodeKind::StringConcatExpr => "string concatenation operator",
        NodeKind::SimpleMapExpr => "simple map operator",
        NodeKind::BracedUriLiteral => "braced URI literal",
        NodeKind::UriQualifiedName => "URI qualified name",
        NodeKind::ArrowExpr => "arrow operator",
        NodeKind::MapConstructor => "map constructor",
        NodeKind::MapConstructorEntry => "map constructor entry",
        NodeKind::SquareArrayConstructor | NodeKind::CurlyArrayConstructor => "array constructor",
        NodeKind::Lookup => "lookup operator",
        NodeKind::UnaryLookup => "unary lookup operator",
        NodeKind::InsertExpr => "insert expression",
        NodeKind::DeleteExpr => "delete expression",
        NodeKind::ReplaceExpr => "replace expression",
        NodeKind::RenameExpr => "rename expression",
        NodeKind::CopyModifyExpr => "copy/modify expression",
        NodeKind::TransformWithExpr => "transform with expression",
        NodeKind::FtContainsExpr => "full-text contains expression",
        NodeKind::BlockExpr => "block expression",
        NodeKind::WhileStatement => "while statement",
        NodeKind::AssignmentExpr => "assignment expression",
        NodeKind::ExitExpr => "exit expression",
        NodeKind::BinaryConstructor => "binary node constructor",
        NodeKind::UpdateExpr => "update expression",
        NodeKind::ElvisExpr => "elvis operator",
        NodeKind::ContextItemFunctionExpr => "context item function",
        NodeKind::TypeAlias => "type alias",
        _ => "construct",
    }
}

/// Report that `node` needs `requirement`.
///
/// The offending element is the node's `operator` token when it has one,
/// otherwise the node itself. All validators use the same wording for the
/// same node so the surviving message does not depend on validator order.
pub(crate) fn require(
    tree: &SyntaxTree,
    node: NodeId,
    reporter: &mut dyn ConformanceReporter,
    requirement: impl Into<Requirement>,
    operator: Option<TokenKind>,
) {
    let element = operator
        .and_then(|op| tree.child_token(node, op))
        .unwrap_or(node);
    let message = format!(
        "{} is not supported by the configured dialect",
        construct_name(tree.kind(node))
    );
    reporter.requires(element, requirement.into(), Some(message));
}
