use thiserror::Error;

/// The ways [`Tree::remove`][crate::Tree::remove] can fail. Lookups never
/// fail; they return `None` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// `remove` was called on a tree without a root.
    #[error("cannot remove from an empty tree")]
    Empty,
    /// The tree has nodes but none of them holds the requested value.
    #[error("value not found in tree")]
    NotFound,
}
