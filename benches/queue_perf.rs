//! Throughput benchmarks for both queue variants
//!
//! Each benchmark drives a queue over a deterministically scrambled key
//! slice so runs are reproducible without a PRNG dependency.
//!
//! ```sh
//! cargo bench --bench queue_perf
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indirect_pq::{ArrayQueue, HeapQueue, IndirectQueue};

/// Affine scramble of 0..n, full period for odd multiplier.
fn scrambled_keys(n: usize) -> Vec<u64> {
    (0..n as u64).map(|i| (i * 2654435761 + 104729) % n as u64).collect()
}

fn enqueue_drain<Q: IndirectQueue<u64> + Default>(keys: &[u64]) -> usize {
    let mut queue = Q::default();
    for i in 0..keys.len() {
        queue.enqueue(keys, i).unwrap();
    }
    let mut drained = 0;
    while queue.dequeue(keys).is_ok() {
        drained += 1;
    }
    drained
}

fn bench_enqueue_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue_drain");
    for &size in &[64usize, 512, 4096] {
        let keys = scrambled_keys(size);
        group.bench_with_input(BenchmarkId::new("heap", size), &keys, |b, keys| {
            b.iter(|| black_box(enqueue_drain::<HeapQueue>(keys)))
        });
        // The array variant is O(n) per dequeue; keep sizes small enough
        // that the benchmark still finishes promptly.
        if size <= 512 {
            group.bench_with_input(BenchmarkId::new("array", size), &keys, |b, keys| {
                b.iter(|| black_box(enqueue_drain::<ArrayQueue>(keys)))
            });
        }
    }
    group.finish();
}

fn bench_changed_at_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("changed_at_storm");
    for &size in &[512usize, 4096] {
        group.bench_with_input(BenchmarkId::new("heap", size), &size, |b, &size| {
            let mut keys = scrambled_keys(size);
            let mut queue: HeapQueue = HeapQueue::with_capacity(size);
            for i in 0..size {
                queue.enqueue(&keys, i).unwrap();
            }
            let mut tick = 0u64;
            b.iter(|| {
                tick = tick.wrapping_add(1);
                let index = (tick.wrapping_mul(48271) % size as u64) as usize;
                keys[index] = keys[index].wrapping_mul(31).wrapping_add(tick) % (size as u64 * 4);
                queue.changed_at(&keys, index).unwrap();
                black_box(queue.first(&keys).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_all_changed(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_changed");
    for &size in &[512usize, 4096] {
        group.bench_with_input(BenchmarkId::new("heap", size), &size, |b, &size| {
            let mut keys = scrambled_keys(size);
            let mut queue: HeapQueue = HeapQueue::with_capacity(size);
            for i in 0..size {
                queue.enqueue(&keys, i).unwrap();
            }
            b.iter(|| {
                for k in keys.iter_mut() {
                    *k = k.wrapping_mul(6364136223846793005).wrapping_add(1);
                }
                queue.all_changed(&keys);
                black_box(queue.first(&keys).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_enqueue_drain,
    bench_changed_at_storm,
    bench_all_changed
);
criterion_main!(benches);
