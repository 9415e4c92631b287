use std::hint::black_box;

use avlt::AvlTree;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = AvlTree::new();

    for _i in 0..n_values {
        let _ = t.insert(rand.next());
    }

    bench_iter(n_values, g, "iter", &t, |t| {
        for v in t.iter() {
            black_box(v);
        }
    });
    bench_iter(n_values, g, "iter_rev", &t, |t| {
        for v in t.iter().rev() {
            black_box(v);
        }
    });
    bench_iter(n_values, g, "traverse", &t, |t| {
        t.traverse(|v| {
            black_box(v);
        })
    });
}

fn bench_iter<M, F>(
    n_values: usize,
    g: &mut BenchmarkGroup<'_, M>,
    bench_name: &'static str,
    t: &AvlTree<u16>,
    walk: F,
) where
    M: Measurement,
    F: Fn(&AvlTree<u16>),
{
    let bench_name = BenchName {
        n_values,
        bench_name,
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| b.iter(|| walk(t)));
}
