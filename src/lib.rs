//! A height-balanced binary search tree (an [AVL tree]) ordered by an injected
//! [`Comparator`].
//!
//! An [`AvlTree`] stores values of any type `T`, ordered by a key borrowed
//! from each value. The ordering is provided when the tree is constructed,
//! either the natural [`Ord`] of `T`, a three-way comparison function
//! ([`compare::by()`]), or a key extraction function ([`compare::by_key()`]).
//!
//! After every insert and remove, the heights of the two subtrees of any node
//! differ by at most one, so lookups, inserts and removals all descend
//! `O(log n)` nodes.
//!
//! ```
//! use avlt::{compare, AvlTree, Insertion};
//!
//! #[derive(Debug, PartialEq)]
//! struct Word {
//!     text: String,
//!     freq: usize,
//! }
//!
//! let mut t = AvlTree::with_comparator(compare::by_key(|w: &Word| w.text.as_str()));
//!
//! for text in "the cat sat on the mat".split_whitespace() {
//!     let word = Word { text: text.to_string(), freq: 1 };
//!
//!     // Count repeated words by bumping the frequency of the stored value.
//!     match t.insert_with(word, |existing| existing.freq += 1) {
//!         Ok(Insertion::Inserted) => {}
//!         Ok(Insertion::Duplicate(rejected)) => assert_eq!(rejected.text, text),
//!         Err(e) => panic!("{e}"),
//!     }
//! }
//!
//! assert_eq!(t.len(), 5);
//! assert_eq!(t.get("the").map(|w| w.freq), Some(2));
//!
//! // Iterate in ascending, or descending order.
//! let words = t.iter().map(|w| w.text.as_str()).collect::<Vec<_>>();
//! assert_eq!(words, ["cat", "mat", "on", "sat", "the"]);
//! assert_eq!(t.iter().rev().next().map(|w| w.text.as_str()), Some("the"));
//!
//! // Removing a value hands ownership back to the caller.
//! assert_eq!(t.remove("cat"), Some(Word { text: "cat".to_string(), freq: 1 }));
//! assert_eq!(t.remove("cat"), None);
//! ```
//!
//! [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::explicit_iter_loop,
    clippy::todo,
    clippy::use_self,
    missing_debug_implementations
)]

pub mod compare;
mod dump;
mod error;
mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use compare::Comparator;
pub use error::AllocationFailed;
pub use iter::{IntoIter, Iter};
pub use tree::{AvlTree, Insertion};
