use super::*;

#[test]
fn later_nodes_win_hit_tests() {
    let mut tree = UiTree::new();
    tree.push(Node::new(
        Rect::new(0, 0, 10, 1),
        Sense::HOVER,
        NodeKind::GridCell { index: 1 },
    ));
    tree.push(Node::new(
        Rect::new(5, 0, 5, 1),
        Sense::HOVER | Sense::CLICK,
        NodeKind::ClearButton,
    ));

    let hit = tree.hit_test(Pos::new(6, 0), Sense::HOVER).map(|n| n.kind);
    assert_eq!(hit, Some(NodeKind::ClearButton));
    let hit = tree.hit_test(Pos::new(2, 0), Sense::HOVER).map(|n| n.kind);
    assert_eq!(hit, Some(NodeKind::GridCell { index: 1 }));
}

#[test]
fn sense_filters_hits() {
    let mut tree = UiTree::new();
    tree.push(Node::new(
        Rect::new(0, 0, 4, 4),
        Sense::HOVER,
        NodeKind::GridCell { index: 7 },
    ));
    assert!(tree.hit_test(Pos::new(1, 1), Sense::CLICK).is_none());
    assert!(tree.hit_test(Pos::new(9, 9), Sense::HOVER).is_none());

    tree.clear();
    assert!(tree.nodes().is_empty());
}
