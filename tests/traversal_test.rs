//! Traversal engine over hand-built shapes, including ones no AVL insert
//! would produce (skewed, sparse, duplicate-valued).

use rstest::rstest;

use avltree::domain::{traverse, traverse_order, AvlTree, DomainError, Node};

fn leaf(value: i32) -> Option<Node> {
    Some(Node::new(value))
}

fn branch(value: i32, left: Option<Node>, right: Option<Node>) -> Option<Node> {
    Some(Node::with_children(value, left, right))
}

fn perfect7() -> Node {
    Node::with_children(
        4,
        branch(2, leaf(1), leaf(3)),
        branch(6, leaf(5), leaf(7)),
    )
}

fn perfect15() -> Node {
    Node::with_children(
        8,
        branch(4, branch(2, leaf(1), leaf(3)), branch(6, leaf(5), leaf(7))),
        branch(12, branch(10, leaf(9), leaf(11)), branch(14, leaf(13), leaf(15))),
    )
}

/// n at the root, n-1 as its left child, down to 1.
fn left_skewed(n: i32) -> Node {
    let mut node = Node::new(1);
    for value in 2..=n {
        node = Node::with_children(value, Some(node), None);
    }
    node
}

/// 1 at the root, 2 as its right child, up to n.
fn right_skewed(n: i32) -> Node {
    let mut node = Node::new(n);
    for value in (1..n).rev() {
        node = Node::with_children(value, None, Some(node));
    }
    node
}

fn sparse() -> Node {
    //      10
    //     /  \
    //    5    20
    //     \     \
    //      7     30
    //           /
    //          25
    Node::with_children(
        10,
        branch(5, None, leaf(7)),
        branch(20, None, branch(30, leaf(25), None)),
    )
}

fn duplicates() -> Node {
    Node::with_children(2, leaf(1), branch(2, leaf(1), None))
}

fn extremes() -> Node {
    Node::with_children(0, leaf(i32::MIN), branch(i32::MAX, leaf(-1), None))
}

/// 1 -left-> 2 -right-> 3 -left-> 4 ... up to n.
fn zigzag(n: i32) -> Node {
    let mut node = Node::new(n);
    for value in (1..n).rev() {
        node = if value % 2 == 1 {
            Node::with_children(value, Some(node), None)
        } else {
            Node::with_children(value, None, Some(node))
        };
    }
    node
}

#[rstest]
#[case::preorder("preorder")]
#[case::inorder("inorder")]
#[case::postorder("postorder")]
#[case::levelorder("levelorder")]
fn given_empty_tree_when_traversing_then_empty(#[case] order: &str) {
    assert_eq!(traverse(None, order), Ok(vec![]));
}

#[rstest]
#[case::preorder("preorder")]
#[case::inorder("inorder")]
#[case::postorder("postorder")]
#[case::levelorder("levelorder")]
fn given_single_node_when_traversing_then_one_value(#[case] order: &str) {
    let root = Node::new(10);
    assert_eq!(traverse(Some(&root), order), Ok(vec![10]));
}

#[rstest]
#[case::preorder(perfect7(), "preorder", vec![4, 2, 1, 3, 6, 5, 7])]
#[case::inorder(perfect7(), "inorder", vec![1, 2, 3, 4, 5, 6, 7])]
#[case::postorder(perfect7(), "postorder", vec![1, 3, 2, 5, 7, 6, 4])]
#[case::levelorder(perfect7(), "levelorder", vec![4, 2, 6, 1, 3, 5, 7])]
#[case::left_skew_pre(left_skewed(5), "preorder", vec![5, 4, 3, 2, 1])]
#[case::left_skew_in(left_skewed(5), "inorder", vec![1, 2, 3, 4, 5])]
#[case::left_skew_post(left_skewed(5), "postorder", vec![1, 2, 3, 4, 5])]
#[case::left_skew_level(left_skewed(5), "levelorder", vec![5, 4, 3, 2, 1])]
#[case::right_skew_pre(right_skewed(5), "preorder", vec![1, 2, 3, 4, 5])]
#[case::right_skew_in(right_skewed(5), "inorder", vec![1, 2, 3, 4, 5])]
#[case::right_skew_post(right_skewed(5), "postorder", vec![5, 4, 3, 2, 1])]
#[case::right_skew_level(right_skewed(5), "levelorder", vec![1, 2, 3, 4, 5])]
#[case::sparse_pre(sparse(), "preorder", vec![10, 5, 7, 20, 30, 25])]
#[case::sparse_in(sparse(), "inorder", vec![5, 7, 10, 20, 25, 30])]
#[case::sparse_post(sparse(), "postorder", vec![7, 5, 25, 30, 20, 10])]
#[case::sparse_level(sparse(), "levelorder", vec![10, 5, 20, 7, 30, 25])]
#[case::dups_pre(duplicates(), "preorder", vec![2, 1, 2, 1])]
#[case::dups_in(duplicates(), "inorder", vec![1, 2, 1, 2])]
#[case::dups_post(duplicates(), "postorder", vec![1, 1, 2, 2])]
#[case::dups_level(duplicates(), "levelorder", vec![2, 1, 2, 1])]
#[case::extreme_pre(extremes(), "preorder", vec![0, i32::MIN, i32::MAX, -1])]
#[case::extreme_in(extremes(), "inorder", vec![i32::MIN, 0, -1, i32::MAX])]
#[case::extreme_post(extremes(), "postorder", vec![i32::MIN, -1, i32::MAX, 0])]
#[case::extreme_level(extremes(), "levelorder", vec![0, i32::MIN, i32::MAX, -1])]
#[case::zigzag_pre(zigzag(8), "preorder", vec![1, 2, 3, 4, 5, 6, 7, 8])]
#[case::zigzag_post(zigzag(8), "postorder", vec![8, 7, 6, 5, 4, 3, 2, 1])]
#[case::zigzag_level(zigzag(8), "levelorder", vec![1, 2, 3, 4, 5, 6, 7, 8])]
#[case::perfect15_pre(perfect15(), "preorder", vec![8, 4, 2, 1, 3, 6, 5, 7, 12, 10, 9, 11, 14, 13, 15])]
#[case::perfect15_in(perfect15(), "inorder", (1..=15).collect())]
#[case::perfect15_post(perfect15(), "postorder", vec![1, 3, 2, 5, 7, 6, 4, 9, 11, 10, 13, 15, 14, 12, 8])]
#[case::perfect15_level(perfect15(), "levelorder", vec![8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15])]
fn given_shape_when_traversing_then_visits_in_strategy_order(
    #[case] root: Node,
    #[case] order: &str,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(traverse(Some(&root), order), Ok(expected));
}

#[rstest]
#[case::preorder("preorder", 300, 1)]
#[case::inorder("inorder", 1, 300)]
#[case::postorder("postorder", 1, 300)]
#[case::levelorder("levelorder", 300, 1)]
fn given_deep_left_spine_when_traversing_then_visits_every_node(
    #[case] order: &str,
    #[case] first: i32,
    #[case] last: i32,
) {
    let root = left_skewed(300);
    let values = traverse(Some(&root), order).unwrap();
    assert_eq!(values.len(), 300);
    assert_eq!(values.first(), Some(&first));
    assert_eq!(values.last(), Some(&last));
}

#[test]
fn given_very_deep_spine_when_traversing_depth_first_then_no_stack_overflow() {
    let root = right_skewed(200_000);
    let values = traverse(Some(&root), "postorder").unwrap();
    assert_eq!(values.len(), 200_000);
    assert_eq!(values.first(), Some(&200_000));
    drop(root);
}

#[test]
fn given_mixed_case_order_when_traversing_then_same_as_lowercase() {
    let root = perfect7();
    assert_eq!(traverse(Some(&root), "InOrDeR"), traverse(Some(&root), "inorder"));
}

#[rstest]
#[case("zigzag")]
#[case("")]
#[case(" inorder")]
#[case("in-order")]
fn given_unknown_order_when_traversing_then_invalid_order_error(#[case] order: &str) {
    let root = perfect7();
    let err = traverse(Some(&root), order).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidTraversalOrder {
            order: order.to_string(),
            valid: "preorder, inorder, postorder, levelorder".to_string(),
        }
    );
}

#[test]
fn given_absent_order_when_traversing_then_invalid_order_error() {
    let tree: AvlTree = [1, 2, 3].into_iter().collect();
    let err = traverse_order(tree.root(), None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid traversal order: <none>. Valid options: preorder, inorder, postorder, levelorder"
    );
    assert_eq!(traverse_order(tree.root(), Some("LEVELORDER")), Ok(vec![2, 1, 3]));
}

#[test]
fn given_traversal_when_done_then_tree_is_unchanged() {
    let tree: AvlTree = [8, 4, 9, 7, 2, 13, 11, 46].into_iter().collect();
    let before = tree.clone();
    for order in ["preorder", "inorder", "postorder", "levelorder"] {
        assert_eq!(traverse(tree.root(), order).unwrap().len(), 8);
    }
    assert_eq!(tree, before);
}
