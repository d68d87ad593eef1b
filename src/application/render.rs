//! Text renderings of a tree: ASCII picture, termtree outline, balance report.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::domain::traversal::PreOrderIter;
use crate::domain::{AvlTree, Node};

/// Rendering used for the final tree picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Top-down picture with `/` and `\` connectors
    Ascii,
    /// Indented outline
    Tree,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Ascii => f.write_str("ascii"),
            RenderStyle::Tree => f.write_str("tree"),
        }
    }
}

pub fn render(root: Option<&Node>, style: RenderStyle) -> String {
    match style {
        RenderStyle::Ascii => ascii(root),
        RenderStyle::Tree => match root {
            Some(node) => outline(node, measured_depth(Some(node)) as usize),
            None => format!("{}\n", EMPTY_TREE),
        },
    }
}

const EMPTY_TREE: &str = "Tree is empty";

/// Deeper trees are too wide for the ASCII picture and fall back to the outline.
const MAX_ASCII_LEVELS: usize = 10;

/// Deeper shapes are listed level by level instead of as an indented outline.
const MAX_OUTLINE_LEVELS: usize = 64;

fn next_level<'a>(nodes: &[&'a Node]) -> Vec<&'a Node> {
    nodes
        .iter()
        .flat_map(|n| [n.left.as_deref(), n.right.as_deref()])
        .flatten()
        .collect()
}

/// Depth measured by walking the subtree level by level, independent of
/// stored heights.
pub fn measured_depth(node: Option<&Node>) -> u32 {
    let mut depth = 0;
    let mut current: Vec<&Node> = node.into_iter().collect();
    while !current.is_empty() {
        depth += 1;
        current = next_level(&current);
    }
    depth
}

/// Values grouped by depth, root level first.
pub fn levels(root: Option<&Node>) -> Vec<Vec<i32>> {
    let mut rows = Vec::new();
    let mut current: Vec<&Node> = root.into_iter().collect();
    while !current.is_empty() {
        rows.push(current.iter().map(|n| n.value).collect());
        current = next_level(&current);
    }
    rows
}

fn outline(root: &Node, depth: usize) -> String {
    if depth > MAX_OUTLINE_LEVELS {
        return level_listing(root, depth);
    }
    root.to_tree_string().to_string()
}

fn level_listing(root: &Node, depth: usize) -> String {
    let mut out = format!("Tree too deep to draw ({} levels)\n", depth);
    for (i, row) in levels(Some(root)).iter().enumerate() {
        out.push_str(&format!("Level {}: {}\n", i + 1, row.iter().join(", ")));
    }
    out
}

/// Level-by-level picture of the tree.
///
/// Spacing doubles per level so that a complete tree of single-digit values
/// lines up; trailing whitespace is trimmed.
#[instrument(level = "trace", skip(root))]
pub fn ascii(root: Option<&Node>) -> String {
    let Some(root) = root else {
        return format!("{}\n", EMPTY_TREE);
    };

    let max_level = measured_depth(Some(root)) as usize;
    if max_level > MAX_ASCII_LEVELS {
        return outline(root, max_level);
    }
    let mut lines: Vec<String> = Vec::new();
    let mut nodes: Vec<Option<&Node>> = vec![Some(root)];
    let mut level = 1usize;

    while nodes.iter().any(Option::is_some) {
        let floor = max_level.saturating_sub(level);
        let edge_lines = 1usize << floor.saturating_sub(1);
        let first_spaces = (1usize << floor) - 1;
        let between_spaces = (1usize << (floor + 1)) - 1;

        let mut line = " ".repeat(first_spaces);
        let mut next = Vec::with_capacity(nodes.len() * 2);
        for &node in &nodes {
            match node {
                Some(n) => {
                    line.push_str(&n.value.to_string());
                    next.push(n.left.as_deref());
                    next.push(n.right.as_deref());
                }
                None => {
                    line.push(' ');
                    next.push(None);
                    next.push(None);
                }
            }
            line.push_str(&" ".repeat(between_spaces));
        }
        lines.push(line);

        for i in 1..=edge_lines {
            let mut line = String::new();
            for &node in &nodes {
                line.push_str(&" ".repeat(first_spaces.saturating_sub(i)));
                let Some(n) = node else {
                    line.push_str(&" ".repeat(edge_lines * 2 + i + 1));
                    continue;
                };
                line.push(if n.left.is_some() { '/' } else { ' ' });
                line.push_str(&" ".repeat(i * 2 - 1));
                line.push(if n.right.is_some() { '\\' } else { ' ' });
                line.push_str(&" ".repeat(edge_lines * 2 - i + 1));
            }
            lines.push(line);
        }

        nodes = next;
        level += 1;
    }

    let mut out: Vec<&str> = lines.iter().map(|l| l.trim_end()).collect();
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    let mut rendered = out.join("\n");
    rendered.push('\n');
    rendered
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Node {
    fn to_tree_string(&self) -> Tree<String> {
        fn build(node: &Node, label: String) -> Tree<String> {
            let mut leaves = Vec::new();
            if let Some(left) = node.left.as_deref() {
                leaves.push(build(left, format!("L {}", left.value)));
            }
            if let Some(right) = node.right.as_deref() {
                leaves.push(build(right, format!("R {}", right.value)));
            }
            Tree::new(label).with_leaves(leaves)
        }
        build(self, self.value.to_string())
    }
}

impl TreeNodeConvert for AvlTree {
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => root.to_tree_string(),
            None => Tree::new(EMPTY_TREE.to_string()),
        }
    }
}

/// Balance of one node as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceLine {
    pub value: i32,
    pub balance: i64,
}

impl BalanceLine {
    pub fn is_balanced(&self) -> bool {
        self.balance.abs() <= 1
    }
}

impl fmt::Display for BalanceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_balanced() { "BALANCED" } else { "UNBALANCED" };
        write!(f, "Node {}: Balance = {} ({})", self.value, self.balance, status)
    }
}

/// Balance of every node in pre-order, computed from measured depths so
/// hand-built shapes with stale heights still report correctly.
pub fn balance_report(root: Option<&Node>) -> Vec<BalanceLine> {
    let preorder: Vec<&Node> = PreOrderIter::new(root).collect();
    let mut depths: Vec<u32> = Vec::new();
    let mut lines = Vec::with_capacity(preorder.len());

    // Reversed pre-order reaches every subtree before its root: the left
    // child's depth sits on top of the right child's.
    for node in preorder.iter().rev() {
        let left = if node.left.is_some() { depths.pop().unwrap_or(0) } else { 0 };
        let right = if node.right.is_some() { depths.pop().unwrap_or(0) } else { 0 };
        depths.push(1 + left.max(right));
        lines.push(BalanceLine {
            value: node.value,
            balance: i64::from(left) - i64::from(right),
        });
    }
    lines.reverse();
    lines
}
