use thiserror::Error;

/// The recoverable conditions a [`Tree`][crate::Tree] reports to its caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The value is already in the tree.
    #[error("value is already present in the tree")]
    DuplicateValue,

    /// The value is not in the tree.
    #[error("value not found in the tree")]
    NotFound,

    /// The tree has no root.
    #[error("tree is empty")]
    EmptyTree,
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
