use std::iter::FusedIterator;

use crate::node::Node;

/// A borrowing, in-order [`Iterator`] over the values in an
/// [`AvlTree`](crate::AvlTree).
///
/// Values are yielded in ascending key order from the front, and in
/// descending key order from the back ([`Iterator::rev()`]). The iterator is
/// cheap to [`Clone`], and a clone restarts from the current position.
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// The path to the next node to yield from the front, with the next node
    /// at the top of the stack.
    front: Vec<&'a Node<T>>,

    /// The path to the next node to yield from the back.
    back: Vec<&'a Node<T>>,

    /// The number of values not yet yielded from either end.
    ///
    /// The two stacks each cover the whole tree, so this count is what stops
    /// them crossing over.
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut this = Self {
            front: vec![],
            back: vec![],
            remaining: len,
        };

        // Descend down the left side and the right side of the tree.
        this.push_left_edge(root);
        this.push_right_edge(root);

        this
    }

    fn push_left_edge(&mut self, subtree_root: Option<&'a Node<T>>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            self.front.push(v);
            ptr = v.left();
        }
    }

    fn push_right_edge(&mut self, subtree_root: Option<&'a Node<T>>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            self.back.push(v);
            ptr = v.right();
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let v = self.front.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        self.push_left_edge(v.right());

        self.remaining -= 1;
        Some(v.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let v = self.back.pop()?;

        // Descend down the right side of the left hand child of this node, if
        // any.
        self.push_right_edge(v.left());

        self.remaining -= 1;
        Some(v.value())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
