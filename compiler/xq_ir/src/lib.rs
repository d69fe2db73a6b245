//! Syntax tree types for the XQuery front end.
//!
//! The parser is not part of this workspace; it builds a [`SyntaxTree`]
//! through [`TreeBuilder`] and hands it to the conformance checker. The tree
//! is a flat arena:
//!
//! - **Flatten everything**: nodes are addressed by [`NodeId`] (`u32`), not
//!   boxed; parent, first-child and next-sibling links are indices
//! - **One kind enum**: every production is a [`NodeKind`] variant, tokens
//!   are `NodeKind::Token(TokenKind)` leaves
//! - **UTF-16 spans**: [`Span`] offsets match the lexer's token offsets

mod kind;
mod node_id;
mod span;
mod tree;

pub use kind::NodeKind;
pub use node_id::NodeId;
pub use span::Span;
pub use tree::{Ancestors, Children, SyntaxTree, TreeBuilder};
