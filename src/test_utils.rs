use std::fmt::Debug;

use proptest::prelude::*;

use crate::{compare::Comparator, AvlTree};

const KEY_MAX: u16 = 64;

/// A (key, payload) record ordered by its key only.
pub(crate) type Record = (u16, u32);

/// Generate keys from [0..[`KEY_MAX`]).
///
/// A small key domain encourages multiple operations to act on the same key.
pub(crate) fn arbitrary_key() -> impl Strategy<Value = u16> {
    0..KEY_MAX
}

pub(crate) fn arbitrary_record() -> impl Strategy<Value = Record> {
    (arbitrary_key(), any::<u32>())
}

fn record_key(v: &Record) -> &u16 {
    &v.0
}

/// An empty tree of [`Record`] ordered by the record key.
pub(crate) fn record_tree() -> AvlTree<Record, impl Comparator<Record, Key = u16> + Clone> {
    AvlTree::with_comparator(crate::compare::by_key(record_key))
}

/// The worst-case height of an AVL tree holding `n` values.
pub(crate) fn max_height(n: usize) -> usize {
    (1.44 * ((n + 2) as f64).log2()).ceil() as usize
}

/// Assert the BST and AVL properties of tree nodes, ensuring the tree is
/// well-formed.
pub(crate) fn validate_tree_structure<T, C>(t: &AvlTree<T, C>)
where
    C: Comparator<T>,
    T: Debug,
{
    // Invariant 1: an in-order walk yields strictly increasing keys, which
    // holds only if every left subtree is less than, and every right subtree
    // greater than, its parent.
    let values = t.iter().collect::<Vec<_>>();
    for window in values.windows(2) {
        let (a, b) = (t.comparator().key(window[0]), t.comparator().key(window[1]));
        assert_eq!(
            t.comparator().compare(a, b),
            std::cmp::Ordering::Less,
            "out of order: {:?} then {:?}",
            window[0],
            window[1]
        );
    }

    // Invariant 2: the count equals the number of reachable values, and the
    // reverse walk visits the same values backwards.
    assert_eq!(t.len(), values.len());
    assert_eq!(t.iter().rev().count(), values.len());
    assert!(t
        .iter()
        .rev()
        .zip(values.iter().rev())
        .all(|(a, b)| std::ptr::eq(a, *b)));

    let root = match t.root() {
        Some(v) => v,
        None => {
            assert_eq!(t.height(), 0);
            return;
        }
    };

    // Invariant 3: the height is bounded by the AVL worst case.
    assert!(
        t.height() <= max_height(t.len()),
        "height {} exceeds bound for {} values",
        t.height(),
        t.len()
    );

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 4: the height of this node is always +1 of the maximum
        // child height, where an absent child has a height of 0.
        let left_height = n.left().map(|v| v.height()).unwrap_or_default();
        let right_height = n.right().map(|v| v.height()).unwrap_or_default();
        let want_height = left_height.max(right_height) + 1;

        assert_eq!(
            n.height(),
            want_height,
            "expect node with value {:?} to have height {}, has {}",
            n.value(),
            want_height,
            n.height(),
        );

        // Invariant 5: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = (left_height as i64 - right_height as i64).abs();
        assert!(balance <= 1, "balance={balance}, node={:?}", n.value());
    }
}
