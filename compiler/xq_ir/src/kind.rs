//! Syntax node kinds.

use std::fmt;

use xq_lexer_core::TokenKind;

/// Kind of a [`SyntaxTree`](crate::SyntaxTree) node.
///
/// Composite productions are grouped by the specification (or vendor) that
/// introduced them; that grouping is what the conformance validators key on.
/// Leaves are `Token(kind)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Structure
    Module,
    Prolog,
    VersionDecl,
    FunctionDecl,
    VarDecl,
    Annotation,
    FunctionCall,
    ParenthesizedExpr,
    StringLiteral,
    PathExpr,
    Error,

    // XQuery 3.0
    SwitchExpr,
    TryCatchExpr,
    GroupByClause,
    WindowClause,
    CountClause,
    NamedFunctionRef,
    InlineFunctionExpr,
    StringConcatExpr,
    SimpleMapExpr,
    BracedUriLiteral,
    UriQualifiedName,

    // XQuery 3.1
    ArrowExpr,
    MapConstructor,
    MapConstructorEntry,
    SquareArrayConstructor,
    CurlyArrayConstructor,
    Lookup,
    UnaryLookup,

    // Update Facility
    InsertExpr,
    DeleteExpr,
    ReplaceExpr,
    RenameExpr,
    CopyModifyExpr,
    TransformWithExpr,

    // Full Text
    FtContainsExpr,

    // Scripting Extension
    BlockExpr,
    WhileStatement,
    AssignmentExpr,
    ExitExpr,

    // Vendor extensions
    BinaryConstructor,
    UpdateExpr,
    ElvisExpr,
    ContextItemFunctionExpr,
    TypeAlias,

    Token(TokenKind),
}

impl NodeKind {
    #[inline]
    pub const fn is_token(self) -> bool {
        matches!(self, NodeKind::Token(_))
    }

    /// The token kind of a leaf.
    #[inline]
    pub const fn token(self) -> Option<TokenKind> {
        match self {
            NodeKind::Token(kind) => Some(kind),
            _ => None,
        }
    }

    /// Whether the conformance checker visits nodes of this kind.
    ///
    /// Tokens and the structural wrappers never carry a dialect requirement
    /// of their own; their parents do.
    pub const fn is_checkable(self) -> bool {
        !matches!(
            self,
            NodeKind::Token(_)
                | NodeKind::Module
                | NodeKind::Prolog
                | NodeKind::FunctionCall
                | NodeKind::ParenthesizedExpr
                | NodeKind::StringLiteral
                | NodeKind::PathExpr
                | NodeKind::Error
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Token(kind) => write!(f, "{kind}"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl From<TokenKind> for NodeKind {
    fn from(kind: TokenKind) -> Self {
        NodeKind::Token(kind)
    }
}
