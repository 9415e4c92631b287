use avlt::{compare, AvlTree};
use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use crate::Lfsr;

/// A word and its frequency, ordered by the word.
type Word = (String, u32);

#[derive(Debug, Clone, Copy)]
struct BenchName {
    op: &'static str,
    outcome: Outcome,
    n_words: usize,
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Hit,
    Miss,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        let outcome = match v.outcome {
            Outcome::Hit => "hit",
            Outcome::Miss => "miss",
        };
        Self::new(format!("{}_{}/n_words", v.op, outcome), v.n_words)
    }
}

/// Render a random value as the word stored (or searched for) in the tree.
fn word(rand: &mut Lfsr) -> String {
    format!("w{:04x}", rand.next())
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("search");

    for n_words in [100, 1_000, 10_000] {
        bench_words(&mut g, n_words);
    }
}

/// Build a tree of `n_words` random words keyed by `&str`, then measure
/// looking up and removing `n_words` words that are all present, and
/// `n_words` words that are all absent.
///
/// The removals run against a fresh copy of the tree each iteration, so every
/// hit rebalances the unwind path of a real deletion.
fn bench_words<M>(g: &mut BenchmarkGroup<'_, M>, n_words: usize)
where
    M: Measurement,
{
    let mut rand = Lfsr::default();
    let mut t = AvlTree::with_comparator(compare::by_key(|w: &Word| w.0.as_str()));

    let present = (0..n_words).map(|_| word(&mut rand)).collect::<Vec<_>>();
    for w in &present {
        let _ = t.insert_with((w.clone(), 1), |(_, freq)| *freq += 1);
    }
    assert_eq!(t.len(), n_words);

    // The LFSR never repeats before cycling, so continuing it yields words
    // that were never inserted.
    let absent = (0..n_words).map(|_| word(&mut rand)).collect::<Vec<_>>();

    g.throughput(Throughput::Elements(n_words as _)); // Operations per second

    for (outcome, keys) in [(Outcome::Hit, &present), (Outcome::Miss, &absent)] {
        let want_hit = matches!(outcome, Outcome::Hit);

        let name = BenchName {
            op: "get",
            outcome,
            n_words,
        };
        g.bench_function(BenchmarkId::from(name), |b| {
            b.iter(|| {
                let hits = keys.iter().filter(|w| t.get(w.as_str()).is_some()).count();
                assert_eq!(hits == n_words, want_hit);
            })
        });

        let name = BenchName {
            op: "remove",
            outcome,
            n_words,
        };
        g.bench_function(BenchmarkId::from(name), |b| {
            b.iter_batched(
                || t.clone(),
                |mut t| {
                    for w in keys {
                        assert_eq!(t.remove(w.as_str()).is_some(), want_hit);
                    }
                    t
                },
                BatchSize::LargeInput,
            )
        });
    }
}
