//! Orderings injected into an [`AvlTree`](crate::AvlTree) at construction.

use std::{cmp::Ordering, fmt::Debug, marker::PhantomData};

/// A total order over the keys embedded in values of type `T`.
///
/// A [`Comparator`] extracts a borrowed [`Key`](Comparator::Key) from each
/// stored value and compares keys three-ways. Lookups and removals accept a
/// `&Key` directly, so a tree of records keyed by a string can be searched with
/// a `&str`.
///
/// Implementations MUST be consistent for the lifetime of the tree: comparing
/// the same two keys always produces the same [`Ordering`], and the ordering
/// is a strict total order. Violating this does not cause memory unsafety,
/// but tree operations will produce unspecified results.
pub trait Comparator<T> {
    /// The (possibly unsized) key type values are ordered by.
    type Key: ?Sized;

    /// Borrow the ordering key of `value`.
    fn key<'a>(&self, value: &'a T) -> &'a Self::Key;

    /// Compare two keys.
    fn compare(&self, a: &Self::Key, b: &Self::Key) -> Ordering;
}

/// Orders values by their own [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord,
{
    type Key = T;

    fn key<'a>(&self, value: &'a T) -> &'a T {
        value
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders values with a user supplied three-way comparison function.
///
/// Constructed with [`by()`].
#[derive(Clone, Copy)]
pub struct FnComparator<F>(F);

impl<F> Debug for FnComparator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}

impl<T, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type Key = T;

    fn key<'a>(&self, value: &'a T) -> &'a T {
        value
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Orders values by the [`Ord`] implementation of a key borrowed from each
/// value.
///
/// Constructed with [`by_key()`].
pub struct KeyComparator<F, K: ?Sized> {
    extract: F,
    _key: PhantomData<fn(&K)>,
}

impl<F, K: ?Sized> Clone for KeyComparator<F, K>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            extract: self.extract.clone(),
            _key: PhantomData,
        }
    }
}

impl<F, K: ?Sized> Debug for KeyComparator<F, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyComparator").finish_non_exhaustive()
    }
}

impl<T, K, F> Comparator<T> for KeyComparator<F, K>
where
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    type Key = K;

    fn key<'a>(&self, value: &'a T) -> &'a K {
        (self.extract)(value)
    }

    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Build a [`Comparator`] from a three-way comparison function over whole
/// values.
///
/// ```
/// use avlt::{compare, AvlTree};
///
/// // A tree ordered from largest to smallest.
/// let mut t = AvlTree::with_comparator(compare::by(|a: &u32, b: &u32| b.cmp(a)));
/// t.extend([1, 3, 2]);
///
/// assert_eq!(t.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
pub fn by<T, F>(f: F) -> FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    FnComparator(f)
}

/// Build a [`Comparator`] ordering values by a key borrowed from each value.
///
/// ```
/// use avlt::{compare, AvlTree};
///
/// #[derive(Debug)]
/// struct Word {
///     text: String,
///     freq: usize,
/// }
///
/// let mut t = AvlTree::with_comparator(compare::by_key(|w: &Word| w.text.as_str()));
/// t.insert(Word { text: "bananas".to_string(), freq: 1 }).unwrap();
///
/// assert_eq!(t.get("bananas").map(|w| w.freq), Some(1));
/// ```
pub fn by_key<T, K, F>(extract: F) -> KeyComparator<F, K>
where
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    KeyComparator {
        extract,
        _key: PhantomData,
    }
}
