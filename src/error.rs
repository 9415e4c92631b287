use thiserror::Error;

/// The node storage of an [`AvlTree`](crate::AvlTree) is exhausted.
///
/// Returned by an insert that would grow the tree beyond the limit set with
/// [`AvlTree::with_node_limit()`](crate::AvlTree::with_node_limit). The tree is
/// left unmodified and the rejected value is handed back to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("node storage exhausted (limit of {limit} nodes)")]
pub struct AllocationFailed<T> {
    limit: usize,
    value: T,
}

impl<T> AllocationFailed<T> {
    pub(crate) fn new(limit: usize, value: T) -> Self {
        Self { limit, value }
    }

    /// The configured node limit that was reached.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Borrow the value that could not be inserted.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Take back ownership of the value that could not be inserted.
    pub fn into_value(self) -> T {
        self.value
    }
}
