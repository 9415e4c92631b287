use std::fmt::Display;

use avlt::{
    compare::{self, KeyComparator},
    AvlTree, Insertion,
};
use tracing::warn;

/// A word and the number of times it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Word {
    text: String,
    freq: usize,
}

impl Word {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            freq: 1,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn freq(&self) -> usize {
        self.freq
    }

    /// Record another occurrence of this word.
    fn bump(&mut self) {
        self.freq += 1;
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.text, self.freq)
    }
}

/// Words ordered by their text.
pub(crate) type WordTree = AvlTree<Word, KeyComparator<fn(&Word) -> &str, str>>;

pub(crate) fn new_tree(node_limit: Option<usize>) -> WordTree {
    let t = AvlTree::with_comparator(compare::by_key(Word::text as fn(&Word) -> &str));
    match node_limit {
        Some(limit) => t.with_node_limit(limit),
        None => t,
    }
}

/// Summary of a [`count_words()`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tally {
    /// Total words read.
    pub(crate) words: usize,
    /// Words seen for the first time.
    pub(crate) distinct: usize,
    /// Words that could not be stored.
    pub(crate) dropped: usize,
}

/// Add every whitespace separated word in `input` to `tree`, incrementing the
/// frequency of words already present.
pub(crate) fn count_words(tree: &mut WordTree, input: &str) -> Tally {
    let mut tally = Tally::default();

    for text in input.split_whitespace() {
        tally.words += 1;

        match tree.insert_with(Word::new(text), Word::bump) {
            Ok(Insertion::Inserted) => tally.distinct += 1,
            Ok(Insertion::Duplicate(_)) => {}
            Err(e) => {
                warn!(word = text, error = %e, "dropping word");
                tally.dropped += 1;
            }
        }
    }

    tally
}
