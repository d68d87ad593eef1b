//! Domain layer: the balanced tree engine and the traversal engine
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod avl;
pub mod error;
pub mod node;
pub mod traversal;

pub use avl::AvlTree;
pub use error::DomainError;
pub use node::{balance_factor, height, Link, Node};
pub use traversal::{collect, traverse, traverse_order, TraversalOrder, NO_ORDER};
