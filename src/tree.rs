use std::fmt::{Display, Write};

use tracing::debug;

use crate::{
    compare::{Comparator, Natural},
    dump::dump,
    error::AllocationFailed,
    iter::{IntoIter, Iter},
    node::{self, remove_recurse, InsertResult, Node},
};

/// The outcome of a successful insert into an [`AvlTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion<T> {
    /// The value was added to the tree.
    Inserted,

    /// A value with an equal key already exists in the tree and was left in
    /// place. The rejected value is handed back to the caller.
    Duplicate(T),
}

/// A height-balanced binary search tree of `T`, ordered by the
/// [`Comparator`] `C`.
///
/// Every operation descends at most `O(log n)` nodes: after every insert and
/// remove, the heights of the two subtrees of any node differ by at most one.
///
/// ```
/// use avlt::{AvlTree, Insertion};
///
/// let mut t = AvlTree::new();
///
/// assert_eq!(t.insert(42), Ok(Insertion::Inserted));
/// assert_eq!(t.insert(42), Ok(Insertion::Duplicate(42)));
///
/// assert_eq!(t.get(&42), Some(&42));
/// assert_eq!(t.remove(&42), Some(42));
/// assert!(t.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<T, C = Natural> {
    root: Option<Box<Node<T>>>,
    len: usize,

    /// The maximum number of nodes the tree may hold, if limited.
    node_limit: Option<usize>,

    cmp: C,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Construct an empty tree ordered by the [`Ord`] implementation of `T`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> Default for AvlTree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
            node_limit: None,
            cmp: C::default(),
        }
    }
}

impl<T, C> AvlTree<T, C> {
    /// Construct an empty tree ordered by `cmp`.
    ///
    /// The comparator is fixed for the lifetime of the tree.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            node_limit: None,
            cmp,
        }
    }

    /// Limit the tree to holding at most `limit` values.
    ///
    /// Inserting a new value into a full tree fails with
    /// [`AllocationFailed`], leaving the tree unmodified.
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// The [`Comparator`] ordering this tree.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The height of the tree, where an empty tree has a height of 0 and a
    /// tree holding a single value has a height of 1.
    pub fn height(&self) -> usize {
        node::height(self.root.as_deref()) as usize
    }

    /// Iterate over the values in ascending key order.
    ///
    /// The returned [`Iter`] is double ended; call [`Iterator::rev()`] to
    /// iterate in descending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Call `visit` with each value in ascending key order.
    pub fn traverse<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit)
    }

    /// Call `visit` with each value in descending key order.
    pub fn traverse_rev<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().rev().for_each(visit)
    }

    /// The value with the smallest key, if any.
    pub fn first(&self) -> Option<&T> {
        let mut n = self.root.as_deref()?;
        while let Some(v) = n.left() {
            n = v;
        }
        Some(n.value())
    }

    /// The value with the largest key, if any.
    pub fn last(&self) -> Option<&T> {
        let mut n = self.root.as_deref()?;
        while let Some(v) = n.right() {
            n = v;
        }
        Some(n.value())
    }

    /// Remove and drop all values.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Tear down the tree, passing ownership of every value to `release`
    /// exactly once, in ascending key order.
    pub fn destroy<F>(self, release: F)
    where
        F: FnMut(T),
    {
        self.into_iter().for_each(release)
    }

    /// Render the tree structure rotated 90° anticlockwise for debugging.
    ///
    /// Each value is rendered with `render` on its own line, indented by one
    /// tab per level of depth (the root is at level 1). The right subtree is
    /// rendered above a node, and the left subtree below it. The output format
    /// is not stable.
    ///
    /// # Panics
    ///
    /// Panics if the [`Display`] implementation of a rendered value returns an
    /// error. Use [`AvlTree::dump_to()`] to handle it instead.
    ///
    /// ```
    /// use avlt::AvlTree;
    ///
    /// let t = AvlTree::from([1, 2, 3]);
    ///
    /// assert_eq!(t.dump(|v| *v), "\t\t3\n\t2\n\t\t1\n");
    /// ```
    pub fn dump<F, D>(&self, render: F) -> String
    where
        F: Fn(&T) -> D,
        D: Display,
    {
        let mut buf = String::new();
        self.dump_to(&mut buf, render)
            .expect("a Display implementation returned an error unexpectedly");
        buf
    }

    /// Write the output of [`AvlTree::dump()`] to `buf`.
    pub fn dump_to<W, F, D>(&self, buf: &mut W, render: F) -> std::fmt::Result
    where
        W: Write,
        F: Fn(&T) -> D,
        D: Display,
    {
        dump(self.root.as_deref(), buf, &render)
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Comparator<T>,
{
    /// Insert `value` into the tree.
    ///
    /// If a value with an equal key already exists, it is left in place and
    /// `value` is returned in [`Insertion::Duplicate`].
    ///
    /// # Errors
    ///
    /// Returns [`AllocationFailed`] holding `value` if the tree already holds
    /// the number of values set by [`AvlTree::with_node_limit()`].
    pub fn insert(&mut self, value: T) -> Result<Insertion<T>, AllocationFailed<T>> {
        self.insert_with(value, |_| {})
    }

    /// Insert `value` into the tree, calling `on_duplicate` with the existing
    /// value if one with an equal key is already present.
    ///
    /// `on_duplicate` may mutate the existing value, but MUST NOT change its
    /// key.
    ///
    /// ```
    /// use avlt::{compare, AvlTree};
    ///
    /// let mut t = AvlTree::with_comparator(compare::by_key(|v: &(String, usize)| v.0.as_str()));
    ///
    /// for word in ["bananas", "platanos", "bananas"] {
    ///     t.insert_with((word.to_string(), 1), |(_, freq)| *freq += 1).unwrap();
    /// }
    ///
    /// assert_eq!(t.get("bananas").map(|v| v.1), Some(2));
    /// assert_eq!(t.get("platanos").map(|v| v.1), Some(1));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`AllocationFailed`] holding `value` if `value` is not a
    /// duplicate and the tree already holds the number of values set by
    /// [`AvlTree::with_node_limit()`].
    pub fn insert_with<F>(
        &mut self,
        value: T,
        on_duplicate: F,
    ) -> Result<Insertion<T>, AllocationFailed<T>>
    where
        F: FnOnce(&mut T),
    {
        if let Some(limit) = self.node_limit {
            // A duplicate needs no new node, and is merged even when the tree
            // is full.
            if self.len >= limit && !self.contains(self.cmp.key(&value)) {
                debug!(limit, "node limit reached, rejecting insert");
                return Err(AllocationFailed::new(limit, value));
            }
        }

        let root = match self.root {
            Some(ref mut v) => v,
            None => {
                self.root = Some(Box::new(Node::new(value)));
                self.len += 1;
                return Ok(Insertion::Inserted);
            }
        };

        match root.insert(value, &self.cmp, on_duplicate) {
            InsertResult::Linked(_) => {
                self.len += 1;
                Ok(Insertion::Inserted)
            }
            InsertResult::Duplicate(v) => Ok(Insertion::Duplicate(v)),
        }
    }

    /// Return a reference to the value with the given `key`, if any.
    pub fn get(&self, key: &C::Key) -> Option<&T> {
        node::get(self.root.as_deref(), key, &self.cmp)
    }

    /// Returns true if a value with the given `key` is in the tree.
    pub fn contains(&self, key: &C::Key) -> bool {
        self.get(key).is_some()
    }

    /// Remove the value with the given `key` from the tree, returning it if it
    /// was present.
    pub fn remove(&mut self, key: &C::Key) -> Option<T> {
        let v = remove_recurse(&mut self.root, key, &self.cmp)?;
        self.len -= 1;
        Some(v)
    }
}

impl<T, C> IntoIterator for AvlTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Values that cannot be inserted (duplicates, or values beyond the node
/// limit) are dropped.
impl<T, C> Extend<T> for AvlTree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            let _ = self.insert(v);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for AvlTree<T>
where
    T: Ord,
{
    fn from(values: [T; N]) -> Self {
        Self::from_iter(values)
    }
}

/// Duplicate values are dropped, keeping the first occurrence.
impl<T, C> FromIterator<T> for AvlTree<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}
