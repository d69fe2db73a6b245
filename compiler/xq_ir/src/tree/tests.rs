use super::*;
use pretty_assertions::assert_eq;

/// `map { "a" : 1 }`
fn map_tree() -> SyntaxTree {
    let mut b = TreeBuilder::new();
    b.start_node(NodeKind::Module);
    b.start_node(NodeKind::MapConstructor);
    b.token_with_text(TokenKind::NcName, Span::new(0, 3), "map");
    b.token(TokenKind::BlockOpen, Span::new(4, 5));
    b.start_node(NodeKind::MapConstructorEntry);
    b.start_node(NodeKind::StringLiteral);
    b.token(TokenKind::StringLiteralStart, Span::new(6, 7));
    b.token(TokenKind::StringLiteralContents, Span::new(7, 8));
    b.token(TokenKind::StringLiteralEnd, Span::new(8, 9));
    b.finish_node();
    b.token(TokenKind::Colon, Span::new(10, 11));
    b.token_with_text(TokenKind::IntegerLiteral, Span::new(12, 13), "1");
    b.finish_node();
    b.token(TokenKind::BlockClose, Span::new(14, 15));
    b.finish_node();
    b.finish_node();
    b.finish()
}

#[test]
fn nodes_are_stored_in_preorder() {
    let tree = map_tree();
    let kinds: Vec<NodeKind> = tree.preorder().map(|id| tree.kind(id)).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Module,
            NodeKind::MapConstructor,
            NodeKind::Token(TokenKind::NcName),
            NodeKind::Token(TokenKind::BlockOpen),
            NodeKind::MapConstructorEntry,
            NodeKind::StringLiteral,
            NodeKind::Token(TokenKind::StringLiteralStart),
            NodeKind::Token(TokenKind::StringLiteralContents),
            NodeKind::Token(TokenKind::StringLiteralEnd),
            NodeKind::Token(TokenKind::Colon),
            NodeKind::Token(TokenKind::IntegerLiteral),
            NodeKind::Token(TokenKind::BlockClose),
        ]
    );
    assert_eq!(tree.root(), Some(NodeId::new(0)));
    assert_eq!(tree.len(), 12);
}

#[test]
fn children_and_parents() {
    let tree = map_tree();
    let map = NodeId::new(1);
    let children: Vec<NodeId> = tree.children(map).collect();
    assert_eq!(
        children,
        vec![NodeId::new(2), NodeId::new(3), NodeId::new(4), NodeId::new(11)]
    );
    for child in children {
        assert_eq!(tree.parent(child), Some(map));
    }
    assert_eq!(tree.parent(NodeId::new(0)), None);
}

#[test]
fn ancestors_nearest_first() {
    let tree = map_tree();
    let contents = NodeId::new(7);
    let ancestors: Vec<NodeKind> = tree.ancestors(contents).map(|id| tree.kind(id)).collect();
    assert_eq!(
        ancestors,
        vec![
            NodeKind::StringLiteral,
            NodeKind::MapConstructorEntry,
            NodeKind::MapConstructor,
            NodeKind::Module,
        ]
    );
}

#[test]
fn composite_spans_cover_children() {
    let tree = map_tree();
    assert_eq!(tree.span(NodeId::new(0)), Span::new(0, 15));
    assert_eq!(tree.span(NodeId::new(4)), Span::new(6, 13));
    assert_eq!(tree.span(NodeId::new(5)), Span::new(6, 9));
}

#[test]
fn childless_node_is_zero_width() {
    let mut b = TreeBuilder::new();
    b.start_node(NodeKind::Module);
    b.token(TokenKind::NcName, Span::new(0, 4));
    let empty = b.start_node(NodeKind::BlockExpr);
    b.finish_node();
    b.finish_node();
    let tree = b.finish();
    assert_eq!(tree.span(empty), Span::point(4));
    assert_eq!(tree.children(empty).count(), 0);
}

#[test]
fn token_lookup_and_text() {
    let tree = map_tree();
    let entry = NodeId::new(4);
    assert_eq!(tree.child_token(entry, TokenKind::Colon), Some(NodeId::new(9)));
    assert_eq!(tree.child_token(entry, TokenKind::Assign), None);
    assert_eq!(
        tree.child_of_kind(entry, NodeKind::StringLiteral),
        Some(NodeId::new(5))
    );
    assert_eq!(tree.text(NodeId::new(2)), Some("map"));
    assert_eq!(tree.text(NodeId::new(3)), None);
    assert!(tree.contains_kind(NodeId::new(1), NodeKind::Token(TokenKind::IntegerLiteral)));
    assert!(!tree.contains_kind(NodeId::new(5), NodeKind::Token(TokenKind::Colon)));
}

#[test]
fn contains_kind_stays_inside_subtree() {
    let tree = map_tree();
    let block_close = NodeKind::Token(TokenKind::BlockClose);
    let entry = NodeId::new(4);
    assert!(!tree.contains_kind(entry, block_close));
    assert!(tree.contains_kind(NodeId::new(1), block_close));
    assert!(!tree.contains_kind(NodeId::new(5), NodeKind::Token(TokenKind::IntegerLiteral)));
    assert!(tree.contains_kind(NodeId::new(11), block_close));
}

#[test]
fn contains_kind_on_deep_tree() {
    const DEPTH: usize = 200_000;
    let mut b = TreeBuilder::new();
    for _ in 0..DEPTH {
        b.start_node(NodeKind::ParenthesizedExpr);
    }
    b.token(TokenKind::IntegerLiteral, Span::new(0, 1));
    for _ in 0..DEPTH {
        b.finish_node();
    }
    let tree = b.finish();
    let root = NodeId::new(0);
    assert!(tree.contains_kind(root, NodeKind::Token(TokenKind::IntegerLiteral)));
    assert!(!tree.contains_kind(root, NodeKind::Module));
}

#[test]
fn empty_tree() {
    let tree = TreeBuilder::new().finish();
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert_eq!(tree.preorder().count(), 0);
}

#[test]
#[should_panic(expected = "already has a root")]
fn second_root_panics() {
    let mut b = TreeBuilder::new();
    b.start_node(NodeKind::Module);
    b.finish_node();
    b.start_node(NodeKind::Module);
}

#[test]
#[should_panic(expected = "inside a node")]
fn token_outside_root_panics() {
    let mut b = TreeBuilder::new();
    b.token(TokenKind::NcName, Span::new(0, 1));
}

#[test]
#[should_panic(expected = "without a matching start_node")]
fn unbalanced_finish_panics() {
    let mut b = TreeBuilder::new();
    b.finish_node();
}

#[test]
#[should_panic(expected = "left open")]
fn unfinished_node_panics() {
    let mut b = TreeBuilder::new();
    b.start_node(NodeKind::Module);
    let _ = b.finish();
}
