//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid requests against the tree.
/// Insertion and rotation are total and never produce one; the only
/// failure is a traversal order that is unknown or absent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid traversal order: {order}. Valid options: {valid}")]
    InvalidTraversalOrder { order: String, valid: String },
}
