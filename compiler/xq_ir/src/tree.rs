//! Flat syntax tree arena and its builder.
//!
//! Nodes are stored in pre-order: a node's index is smaller than the index
//! of any of its descendants, and siblings appear left to right. Walking the
//! arena front to back is therefore a pre-order traversal.

use rustc_hash::FxHashMap;
use xq_lexer_core::TokenKind;

use crate::{NodeId, NodeKind, Span};

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    span: Span,
    parent: NodeId,
    first_child: NodeId,
    next_sibling: NodeId,
}

/// Immutable syntax tree produced by a parser.
#[derive(Clone, Debug, Default)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
    text: FxHashMap<NodeId, Box<str>>,
}

impl SyntaxTree {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node, if the tree has any nodes.
    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId::new(0))
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    /// # Panics
    ///
    /// Panics if `id` is not a node of this tree.
    #[inline]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.data(id).kind
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.data(id).span
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.data(id).parent.valid()
    }

    /// Source text recorded for a token, if the builder was given any.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.text.get(&id).map(AsRef::as_ref)
    }

    /// Every node, in pre-order.
    pub fn preorder(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|index| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "TreeBuilder refuses more than u32::MAX nodes"
            )]
            let index = index as u32;
            NodeId::new(index)
        })
    }

    /// Direct children of `id`, left to right.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.data(id).first_child,
        }
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.data(id).parent,
        }
    }

    /// First direct child of `id` that is a token of `kind`.
    pub fn child_token(&self, id: NodeId, kind: TokenKind) -> Option<NodeId> {
        self.child_of_kind(id, NodeKind::Token(kind))
    }

    /// First direct child of `id` of the given kind.
    pub fn child_of_kind(&self, id: NodeId, kind: NodeKind) -> Option<NodeId> {
        self.children(id).find(|&child| self.kind(child) == kind)
    }

    /// Whether any descendant of `id` (including itself) has `kind`.
    pub fn contains_kind(&self, id: NodeId, kind: NodeKind) -> bool {
        self.nodes[id.index()..self.subtree_end(id)]
            .iter()
            .any(|node| node.kind == kind)
    }

    /// One past the last arena index of `id`'s subtree: the next node after
    /// `id` that is not its descendant.
    fn subtree_end(&self, id: NodeId) -> usize {
        let mut current = id;
        loop {
            let data = self.data(current);
            if let Some(sibling) = data.next_sibling.valid() {
                return sibling.index();
            }
            match data.parent.valid() {
                Some(parent) => current = parent,
                None => return self.nodes.len(),
            }
        }
    }
}

/// Iterator over the children of a node.
#[derive(Clone, Debug)]
pub struct Children<'a> {
    tree: &'a SyntaxTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next.valid()?;
        self.next = self.tree.data(current).next_sibling;
        Some(current)
    }
}

/// Iterator over the ancestors of a node.
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    next: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next.valid()?;
        self.next = self.tree.data(current).parent;
        Some(current)
    }
}

/// Builds a [`SyntaxTree`] from a parser's start/token/finish events.
///
/// A composite node's span runs from its first child's start to its last
/// child's end; a childless node is zero-width at the end of the previous
/// token.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: SyntaxTree,
    /// Open composite nodes, innermost last.
    open: Vec<NodeId>,
    /// Last child of each node, parallel to `tree.nodes`.
    last_child: Vec<NodeId>,
    offset: u32,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let Ok(index) = u32::try_from(self.tree.nodes.len()) else {
            panic!("syntax tree exceeds u32::MAX nodes");
        };
        let id = NodeId::new(index);
        let parent = self.open.last().copied().unwrap_or(NodeId::INVALID);
        assert!(
            parent.is_valid() || self.tree.nodes.is_empty(),
            "syntax tree already has a root"
        );
        assert!(
            parent.is_valid() || !kind.is_token(),
            "tokens must be added inside a node"
        );

        self.tree.nodes.push(NodeData {
            kind,
            span,
            parent,
            first_child: NodeId::INVALID,
            next_sibling: NodeId::INVALID,
        });
        self.last_child.push(NodeId::INVALID);

        if let Some(parent) = parent.valid() {
            let previous = self.last_child[parent.index()];
            if let Some(previous) = previous.valid() {
                self.tree.nodes[previous.index()].next_sibling = id;
            } else {
                self.tree.nodes[parent.index()].first_child = id;
            }
            self.last_child[parent.index()] = id;
        }
        id
    }

    /// Open a composite node; children added until the matching
    /// [`finish_node`](Self::finish_node) belong to it.
    ///
    /// # Panics
    ///
    /// Panics when opening a second root.
    pub fn start_node(&mut self, kind: NodeKind) -> NodeId {
        let id = self.push(kind, Span::point(self.offset));
        self.open.push(id);
        id
    }

    /// Add a token leaf to the innermost open node.
    pub fn token(&mut self, kind: TokenKind, span: Span) -> NodeId {
        self.offset = span.end;
        self.push(NodeKind::Token(kind), span)
    }

    /// Add a token leaf and record its source text.
    pub fn token_with_text(&mut self, kind: TokenKind, span: Span, text: &str) -> NodeId {
        let id = self.token(kind, span);
        self.tree.text.insert(id, text.into());
        id
    }

    /// Close the innermost open node and compute its span.
    ///
    /// # Panics
    ///
    /// Panics if no node is open.
    pub fn finish_node(&mut self) -> NodeId {
        let Some(id) = self.open.pop() else {
            panic!("finish_node called without a matching start_node");
        };
        let first = self.tree.nodes[id.index()].first_child;
        let last = self.last_child[id.index()];
        if let (Some(first), Some(last)) = (first.valid(), last.valid()) {
            let span = Span {
                start: self.tree.nodes[first.index()].span.start,
                end: self.tree.nodes[last.index()].span.end,
            };
            self.tree.nodes[id.index()].span = span;
        }
        id
    }

    /// Finish building.
    ///
    /// # Panics
    ///
    /// Panics if a node is still open.
    pub fn finish(self) -> SyntaxTree {
        assert!(
            self.open.is_empty(),
            "{} syntax node(s) left open",
            self.open.len()
        );
        self.tree
    }
}

#[cfg(test)]
mod tests;
