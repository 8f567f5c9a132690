//! Ad hoc benchmark harness: compares this crate's [`lower_bound`] against
//! [`<[T]>::binary_search`], and [`BTreeSet`] against [`std::collections::BTreeSet`],
//! across a spread of input sizes. For statistically sound numbers see the
//! `criterion` benches under `benches/`; this binary is the quick one-off
//! "did I just make it faster or slower" check, run with `cargo run --release
//! --bin ordsearch-bench`.

use std::collections::BTreeSet as StdBTreeSet;
use std::time::Instant;

use ordsearch::{lower_bound, BTreeSet};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000];
const SEED: u64 = 0x5EED_F00D;

fn main() {
    env_logger::init();

    println!("{:>10} {:>18} {:>18} {:>10}", "n", "lower_bound", "binary_search", "speedup");
    for &n in SIZES {
        let (ours, theirs) = bench_lower_bound(n);
        report_row(n, ours, theirs);
    }

    println!();
    println!("{:>10} {:>18} {:>18} {:>10}", "n", "BTreeSet insert", "std insert", "speedup");
    for &n in SIZES {
        let (ours, theirs) = bench_btree_insert(n);
        report_row(n, ours, theirs);
    }
}

fn report_row(n: usize, ours: f64, theirs: f64) {
    println!(
        "{n:>10} {ours:>15.1}ns {theirs:>15.1}ns {:>9.2}x",
        theirs / ours
    );
}

fn bench_lower_bound(n: usize) -> (f64, f64) {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut data: Vec<i64> = (0..n as i64).collect();
    data.shuffle(&mut rng);
    data.sort_unstable();

    let queries: Vec<i64> = (0..10_000).map(|_| rng.gen_range(0..n as i64 * 2)).collect();

    let start = Instant::now();
    let mut sink = 0usize;
    for &q in &queries {
        sink ^= lower_bound(&data, q);
    }
    let ours = start.elapsed().as_nanos() as f64 / queries.len() as f64;
    std::hint::black_box(sink);

    let start = Instant::now();
    let mut sink = 0usize;
    for &q in &queries {
        sink ^= data.binary_search(&q).unwrap_or_else(|i| i);
    }
    let theirs = start.elapsed().as_nanos() as f64 / queries.len() as f64;
    std::hint::black_box(sink);

    (ours, theirs)
}

fn bench_btree_insert(n: usize) -> (f64, f64) {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut keys: Vec<i64> = (0..n as i64).collect();
    keys.shuffle(&mut rng);

    let start = Instant::now();
    let mut ours: BTreeSet<i64, 256> = BTreeSet::new();
    for &k in &keys {
        ours.insert(k);
    }
    let ours_ns = start.elapsed().as_nanos() as f64 / n as f64;

    let start = Instant::now();
    let mut theirs: StdBTreeSet<i64> = StdBTreeSet::new();
    for &k in &keys {
        theirs.insert(k);
    }
    let theirs_ns = start.elapsed().as_nanos() as f64 / n as f64;

    assert_eq!(ours.len(), theirs.len());
    (ours_ns, theirs_ns)
}
