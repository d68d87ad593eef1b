//! Tree summaries and the build-then-traverse use case.

use std::fmt;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{collect, AvlTree, TraversalOrder};

/// Summary of a non-empty tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeInfo {
    pub root: i32,
    pub node_count: usize,
    pub height: u32,
    pub min: i32,
    pub max: i32,
    pub inorder: Vec<i32>,
    pub preorder: Vec<i32>,
}

impl TreeInfo {
    /// `None` for an empty tree.
    pub fn from_tree(tree: &AvlTree) -> Option<Self> {
        let root = tree.root()?;
        let inorder = collect(Some(root), TraversalOrder::InOrder);
        let preorder = collect(Some(root), TraversalOrder::PreOrder);
        Some(Self {
            root: root.value,
            node_count: inorder.len(),
            height: tree.height(),
            min: *inorder.first()?,
            max: *inorder.last()?,
            inorder,
            preorder,
        })
    }
}

impl fmt::Display for TreeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Root value: {}", self.root)?;
        writeln!(f, "Total nodes: {}", self.node_count)?;
        writeln!(f, "Tree height: {}", self.height)?;
        writeln!(f, "Minimum value: {}", self.min)?;
        writeln!(f, "Maximum value: {}", self.max)?;
        writeln!(f, "{}", format_traversal(&self.inorder, "Sorted"))?;
        write!(f, "{}", format_traversal(&self.preorder, "Preorder"))
    }
}

/// `"<label> Traversal: 1, 2, 3"`
pub fn format_traversal(values: &[i32], label: &str) -> String {
    format!("{} Traversal: {}", label, values.iter().join(", "))
}

/// Result of building a fresh tree and traversing it.
#[derive(Debug, Clone)]
pub struct Traversal {
    pub tree: AvlTree,
    pub order: TraversalOrder,
    pub values: Vec<i32>,
}

/// Builds a tree from `numbers` in order and traverses it.
///
/// The order is validated before the first insertion. `observer` sees the
/// tree after every insertion.
#[instrument(level = "debug", skip(observer))]
pub fn build_and_traverse<F>(
    numbers: &[i32],
    order: Option<&str>,
    mut observer: F,
) -> ApplicationResult<Traversal>
where
    F: FnMut(i32, &AvlTree),
{
    let order = TraversalOrder::from_optional(order)?;

    let mut tree = AvlTree::new();
    for &value in numbers {
        let inserted = tree.insert(value);
        debug!(value, inserted, "insert");
        observer(value, &tree);
    }

    let values = collect(tree.root(), order);
    Ok(Traversal {
        tree,
        order,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::DomainError;

    #[test]
    fn given_tree_when_summarizing_then_reports_extremes() {
        let tree: AvlTree = [8, 4, 9, 7, 2, 13, 11, 46].into_iter().collect();
        let info = TreeInfo::from_tree(&tree).unwrap();
        assert_eq!(info.root, 8);
        assert_eq!(info.node_count, 8);
        assert_eq!(info.height, 4);
        assert_eq!(info.min, 2);
        assert_eq!(info.max, 46);
        assert!(info.to_string().contains("Sorted Traversal: 2, 4, 7, 8, 9, 11, 13, 46"));
    }

    #[test]
    fn given_empty_tree_when_summarizing_then_none() {
        assert_eq!(TreeInfo::from_tree(&AvlTree::new()), None);
    }

    #[test]
    fn given_invalid_order_when_building_then_nothing_is_inserted() {
        let mut calls = 0;
        let result = build_and_traverse(&[1, 2, 3], Some("zigzag"), |_, _| calls += 1);
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidTraversalOrder { .. }))
        ));
        assert_eq!(calls, 0);
    }

    #[test]
    fn given_absent_order_when_building_then_rejected_as_invalid() {
        let mut calls = 0;
        let result = build_and_traverse(&[1, 2, 3], None, |_, _| calls += 1);
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidTraversalOrder { ref order, .. }))
                if order == "<none>"
        ));
        assert_eq!(calls, 0);
    }

    #[test]
    fn given_numbers_when_building_then_observer_sees_each_step() {
        let mut sizes = Vec::new();
        let traversal =
            build_and_traverse(&[3, 2, 1], Some("PreOrder"), |_, t| sizes.push(t.len())).unwrap();
        assert_eq!(sizes, vec![1, 2, 3]);
        assert_eq!(traversal.order, TraversalOrder::PreOrder);
        assert_eq!(traversal.values, vec![2, 1, 3]);
    }

    #[test]
    fn given_values_when_formatting_traversal_then_comma_joined() {
        assert_eq!(format_traversal(&[1, 2], "inorder"), "inorder Traversal: 1, 2");
        assert_eq!(format_traversal(&[], "inorder"), "inorder Traversal: ");
    }
}
