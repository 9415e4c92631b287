use std::cmp::Ordering;

use tracing::trace;

use crate::compare::Comparator;

/// The child of a [`Node`] an operation descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Debug)]
pub(crate) enum InsertResult<T> {
    /// A new node was linked into the subtree, beneath the returned [`Side`]
    /// of the node that produced this result.
    Linked(Side),

    /// A node holding an equal key already exists. The rejected value is
    /// returned to the caller.
    Duplicate(T),
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Self>>,
    right: Option<Box<Self>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent child a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `value` into the subtree rooted at `self`, rebalancing on the
    /// way back up.
    ///
    /// If a node with an equal key exists, `on_duplicate` is called with the
    /// existing value and the new `value` is returned in
    /// [`InsertResult::Duplicate`] without modifying the tree.
    pub(crate) fn insert<C, F>(
        self: &mut Box<Self>,
        value: T,
        cmp: &C,
        on_duplicate: F,
    ) -> InsertResult<T>
    where
        C: Comparator<T>,
        F: FnOnce(&mut T),
    {
        let side = match cmp.compare(cmp.key(&value), cmp.key(&self.value)) {
            Ordering::Less => Side::Left,
            Ordering::Equal => {
                on_duplicate(&mut self.value);
                return InsertResult::Duplicate(value);
            }
            Ordering::Greater => Side::Right,
        };

        let child = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };

        let landed = match child {
            Some(v) => match v.insert(value, cmp, on_duplicate) {
                InsertResult::Linked(landed) => landed,
                // The tree structure has not been modified, so it does not
                // require rebalancing.
                v @ InsertResult::Duplicate(_) => return v,
            },
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(value)));

                // Inserting this new child node cannot skew the tree in the
                // direction of the new addition such that it requires the tree
                // be rebalanced as, at most, it creates an absolute difference
                // of 1 in this direction (from balanced, or slightly skewed in
                // the opposite direction).
                //
                // Update this node and skip the rebalancing checks.
                update_height(self);
                return InsertResult::Linked(side);
            }
        };

        // Update this node's height.
        update_height(self);

        // Determine the balance factor of the subtree rooted at self and
        // correct it if the absolute difference in height between branches is
        // > 1.
        //
        // The imbalance (if any) is always on the side of the descent, and the
        // rotation case is chosen by which side of that deeper child the new
        // node landed on.
        match (balance(self), side, landed) {
            // Left-left
            (2, Side::Left, Side::Left) => {
                debug_assert!(self.left().map(balance).unwrap_or_default() > 0);
                rotate_right(self);
            }
            // Left-right
            (2, Side::Left, Side::Right) => {
                debug_assert!(self.left().map(balance).unwrap_or_default() < 0);
                if let Some(left) = self.left.as_mut() {
                    rotate_left(left);
                }
                rotate_right(self);
            }
            // Right-right
            (-2, Side::Right, Side::Right) => {
                debug_assert!(self.right().map(balance).unwrap_or_default() < 0);
                rotate_left(self);
            }
            // Right-left
            (-2, Side::Right, Side::Left) => {
                debug_assert!(self.right().map(balance).unwrap_or_default() > 0);
                if let Some(right) = self.right.as_mut() {
                    rotate_right(right);
                }
                rotate_left(self);
            }
            (-1..=1, _, _) => { /* The tree is well balanced */ }
            _ => unreachable!("insert grew the subtree opposite the descent"),
        };

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);

        InsertResult::Linked(side)
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the value it contains.
    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

/// Descend from `root` to the node holding `key`, if any.
pub(crate) fn get<'a, T, C>(root: Option<&'a Node<T>>, key: &C::Key, cmp: &C) -> Option<&'a T>
where
    C: Comparator<T>,
{
    let mut ptr = root;
    while let Some(n) = ptr {
        ptr = match cmp.compare(key, cmp.key(&n.value)) {
            Ordering::Less => n.left(),
            Ordering::Equal => return Some(&n.value),
            Ordering::Greater => n.right(),
        };
    }
    None
}

/// Recurse into `node`, removing the value with the given `key` from the
/// subtree rooted at `node`, if it exists.
///
/// Returns [`None`] if the value is not found.
///
/// After the call `node` holds the (possibly new) root of the rebalanced
/// subtree, or [`None`] if the subtree became empty.
pub(crate) fn remove_recurse<T, C>(
    node: &mut Option<Box<Node<T>>>,
    key: &C::Key,
    cmp: &C,
) -> Option<T>
where
    C: Comparator<T>,
{
    let ord = {
        let n = node.as_deref()?;
        cmp.compare(key, cmp.key(&n.value))
    };

    let n = node.as_mut()?;
    let removed = match ord {
        Ordering::Less => remove_recurse(&mut n.left, key, cmp)?,
        Ordering::Greater => remove_recurse(&mut n.right, key, cmp)?,
        Ordering::Equal => return unlink(node),
    };

    rebalance_after_remove(n);
    Some(removed)
}

/// Remove the node at the root of the subtree in `slot`, returning its value.
///
/// The node may have 0, 1 or 2 child node(s):
///
/// ```text
///                          +----------+
///                          |   slot   |
///                          +----------+
///                                |
///                                v
///                          +----------+
///                     +----|   node   |----+
///                     |    +----------+    |
///                     |                    |
///                     v                    v
///               +-----------+       +------------+
///               | node.left |       | node.right |
///               +-----------+       +------------+
/// ```
///
/// With no children the slot is cleared, and with a single child that child
/// is spliced into the slot. With two children the node stays linked and its
/// value is replaced by the value of the in-order successor, which is removed
/// from the right subtree.
fn unlink<T>(slot: &mut Option<Box<Node<T>>>) -> Option<T> {
    let n = slot.as_mut()?;

    if n.left.is_some() && n.right.is_some() {
        // The minimum of the right subtree is the successor to "n" returned in
        // an in-order traversal. Moving its value into "n" preserves the
        // binary search property.
        let successor = take_subtree_min(&mut n.right)?;
        let old = std::mem::replace(&mut n.value, successor);

        rebalance_after_remove(n);
        return Some(old);
    }

    let mut n = slot.take()?;

    // Invariant: at most one child remains, and it is a balanced subtree of
    // height at most 1.
    *slot = n.take_left().or_else(|| n.take_right());
    debug_assert!(slot.as_deref().map(|v| v.height <= 1).unwrap_or(true));

    Some(n.into_value())
}

/// Remove the node holding the minimum value in the subtree in `slot`, if
/// any, linking the right subtree of the extracted node in its place.
fn take_subtree_min<T>(slot: &mut Option<Box<Node<T>>>) -> Option<T> {
    let n = slot.as_mut()?;

    if n.left.is_none() {
        // "n" is the end of the left edge.
        //
        // ```text
        //                 6
        //                / \
        //    here ->   <4>   7
        //                \
        //                 5
        // ```
        //
        // Its right node (if any) replaces it.
        let mut n = slot.take()?;
        *slot = n.take_right();
        return Some(n.into_value());
    }

    let v = take_subtree_min(&mut n.left);

    rebalance_after_remove(n);
    debug_assert!(balance(n).abs() <= 1);
    v
}

fn rebalance_after_remove<T>(v: &mut Box<Node<T>>) {
    // Recompute the height of the relocated node.
    update_height(v);

    // And rebalance the subtree.
    //
    // Unlike an insert, the child on the heavy side may itself be balanced, in
    // which case a single rotation suffices.
    match balance(v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            rotate_right(v);
        }
        (2..) => {
            if let Some(left) = v.left.as_mut() {
                rotate_left(left);
            }
            rotate_right(v);
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            rotate_left(v);
        }
        (..=-2) => {
            if let Some(right) = v.right.as_mut() {
                rotate_right(right);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(v).abs() <= 1);
}

pub(crate) fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<T>(n: &mut Node<T>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<T>(n: &Node<T>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// Does nothing if `x` has no right pointer (cannot be rotated).
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let Some(mut p) = x.right.take() else {
        return;
    };
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);

    trace!(height = x.height, "rotate left");
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// Does nothing if `y` has no left pointer (cannot be rotated).
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let Some(mut p) = y.left.take() else {
        return;
    };
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);

    trace!(height = y.height, "rotate right");
}
