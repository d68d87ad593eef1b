use std::fmt;

/// Owned child link. `None` is an absent subtree.
pub type Link = Option<Box<Node>>;

/// One stored key of the tree.
///
/// Fields are public so renderers and tests can read the shape directly.
/// Only the engine in [`crate::domain::avl`] keeps `height` consistent and
/// the AVL invariant intact; hand-built shapes carry no such guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Ordering key and the only payload
    pub value: i32,
    /// Height of the subtree rooted here, leaf = 1
    pub height: u32,
    pub left: Link,
    pub right: Link,
}

impl Node {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Builds a node over arbitrary children, computing its height from them.
    ///
    /// No ordering or balance is enforced, which makes it suitable for
    /// describing skewed or sparse shapes to traverse.
    pub fn with_children(value: i32, left: Option<Node>, right: Option<Node>) -> Self {
        let mut node = Self {
            value,
            height: 1,
            left: left.map(Box::new),
            right: right.map(Box::new),
        };
        node.update_height();
        node
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recomputes `height` from the children's stored heights.
    pub fn update_height(&mut self) {
        self.height = 1 + height(self.left.as_deref()).max(height(self.right.as_deref()));
    }

    /// `height(left) - height(right)` from stored heights.
    pub fn balance_factor(&self) -> i64 {
        i64::from(height(self.left.as_deref())) - i64::from(height(self.right.as_deref()))
    }
}

/// Frees descendants from an explicit stack, so dropping a skewed shape of
/// any depth never recurses once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Height of a possibly absent subtree: 0 when absent, else the stored height.
pub fn height(node: Option<&Node>) -> u32 {
    node.map_or(0, |n| n.height)
}

/// Balance factor of a possibly absent subtree, 0 when absent.
pub fn balance_factor(node: Option<&Node>) -> i64 {
    node.map_or(0, Node::balance_factor)
}
