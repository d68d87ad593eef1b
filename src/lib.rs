//! AVL tree engine with traversal strategies.
//!
//! - [`domain`]: the balanced tree and the four traversals
//! - [`application`]: number parsing, rendering, summaries, interactive shell
//! - [`config`]: layered settings
//! - [`cli`]: the `avltree` command line

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{traverse, AvlTree, DomainError, Node, TraversalOrder};
