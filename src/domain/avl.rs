//! Height-balanced binary search tree over `i32` keys.

use std::cmp::Ordering;

use tracing::{debug, instrument};

use super::node::{height, Link, Node};

/// AVL tree owning its whole node graph through the root link.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AvlTree {
    root: Link,
}

impl AvlTree {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, 0 when empty.
    pub fn height(&self) -> u32 {
        height(self.root())
    }

    /// Inserts `value`, rebalancing on the way back to the root.
    ///
    /// Returns `false` and leaves the tree untouched when `value` is already
    /// present.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, value: i32) -> bool {
        let mut inserted = false;
        self.root = Some(insert_rec(self.root.take(), value, &mut inserted));
        inserted
    }

    pub fn contains(&self, value: i32) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    pub fn min(&self) -> Option<i32> {
        let mut node = self.root()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(node.value)
    }

    pub fn max(&self) -> Option<i32> {
        let mut node = self.root()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node.value)
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = None;
    }
}

impl FromIterator<i32> for AvlTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for AvlTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

fn insert_rec(link: Link, value: i32, inserted: &mut bool) -> Box<Node> {
    let mut node = match link {
        None => {
            *inserted = true;
            return Box::new(Node::new(value));
        }
        Some(node) => node,
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = Some(insert_rec(node.left.take(), value, inserted)),
        Ordering::Greater => node.right = Some(insert_rec(node.right.take(), value, inserted)),
        Ordering::Equal => return node,
    }
    if !*inserted {
        return node;
    }

    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        if let Some(left_value) = node.left.as_ref().map(|l| l.value) {
            if value < left_value {
                debug!(node = node.value, "left-left case");
                return rotate_right(node);
            }
            if value > left_value {
                debug!(node = node.value, "left-right case");
                node.left = node.left.take().map(rotate_left);
                return rotate_right(node);
            }
        }
    } else if balance < -1 {
        if let Some(right_value) = node.right.as_ref().map(|r| r.value) {
            if value > right_value {
                debug!(node = node.value, "right-right case");
                return rotate_left(node);
            }
            if value < right_value {
                debug!(node = node.value, "right-left case");
                node.right = node.right.take().map(rotate_right);
                return rotate_left(node);
            }
        }
    }

    node
}

/// Right rotation at `y`: its left child `x` becomes the subtree root and
/// `x`'s right subtree moves under `y`.
fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    debug!(around = y.value, "right rotation");
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Left rotation at `x`, mirror of [`rotate_right`].
fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    debug!(around = x.value, "left rotation");
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}
