//! Traversal strategies linearizing a tree into its values.
//!
//! Every strategy is an iterator driven by an explicit stack or queue, so
//! arbitrarily deep hand-built shapes never exhaust the call stack.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::error::DomainError;
use super::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Node, left, right
    PreOrder,
    /// Left, node, right: ascending for a valid BST
    InOrder,
    /// Left, right, node
    PostOrder,
    /// Breadth-first, left before right
    LevelOrder,
}

/// Stand-in order name when none was given.
pub const NO_ORDER: &str = "<none>";

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TraversalOrder::PreOrder => "preorder",
            TraversalOrder::InOrder => "inorder",
            TraversalOrder::PostOrder => "postorder",
            TraversalOrder::LevelOrder => "levelorder",
        }
    }

    /// Parses an order that may be absent. Absence is reported as an invalid
    /// order named [`NO_ORDER`].
    pub fn from_optional(order: Option<&str>) -> Result<Self, DomainError> {
        order.unwrap_or(NO_ORDER).parse()
    }

    /// Comma-separated list of the accepted names.
    pub fn valid_options() -> String {
        Self::ALL.iter().map(|o| o.name()).join(", ")
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TraversalOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::InvalidTraversalOrder {
                order: s.to_string(),
                valid: Self::valid_options(),
            })
    }
}

/// Parses `order` case-insensitively and returns the visited values.
#[instrument(level = "debug", skip(root))]
pub fn traverse(root: Option<&Node>, order: &str) -> Result<Vec<i32>, DomainError> {
    let order: TraversalOrder = order.parse()?;
    Ok(collect(root, order))
}

/// Like [`traverse`], but an absent order is rejected before any walk.
pub fn traverse_order(root: Option<&Node>, order: Option<&str>) -> Result<Vec<i32>, DomainError> {
    let order = TraversalOrder::from_optional(order)?;
    Ok(collect(root, order))
}

pub fn collect(root: Option<&Node>, order: TraversalOrder) -> Vec<i32> {
    match order {
        TraversalOrder::PreOrder => PreOrderIter::new(root).map(|n| n.value).collect(),
        TraversalOrder::InOrder => InOrderIter::new(root).map(|n| n.value).collect(),
        TraversalOrder::PostOrder => PostOrderIter::new(root).map(|n| n.value).collect(),
        TraversalOrder::LevelOrder => LevelOrderIter::new(root).map(|n| n.value).collect(),
    }
}

pub struct PreOrderIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrderIter<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so left is popped first
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(node)
    }
}

pub struct InOrderIter<'a> {
    stack: Vec<&'a Node>,
    current: Option<&'a Node>,
}

impl<'a> InOrderIter<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(node)
    }
}

pub struct PostOrderIter<'a> {
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> PostOrderIter<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visited)) = self.stack.pop() {
            if visited {
                return Some(node);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

pub struct LevelOrderIter<'a> {
    queue: VecDeque<&'a Node>,
}

impl<'a> LevelOrderIter<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(node)
    }
}
