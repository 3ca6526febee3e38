use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use linear_collections::collections::linked::SinglyLinkedList;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

// --- Insertion at both ends ---

fn push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("push_back", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = SinglyLinkedList::new();
                for i in 0..size {
                    list.push_back(black_box(i));
                }
                list
            });
        });

        group.bench_with_input(BenchmarkId::new("push_front", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = SinglyLinkedList::new();
                for i in 0..size {
                    list.push_front(black_box(i));
                }
                list
            });
        });

        group.bench_with_input(BenchmarkId::new("vec_deque_push_back", size), &size, |b, &size| {
            b.iter(|| {
                let mut deque = VecDeque::new();
                for i in 0..size {
                    deque.push_back(black_box(i));
                }
                deque
            });
        });
    }

    group.finish();
}

// --- Removal ---

fn remove_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("pop_front", size), &size, |b, &size| {
            b.iter_with_setup(
                || SinglyLinkedList::from_iter(0..size),
                |mut list| {
                    while let Some(value) = list.pop_front() {
                        black_box(value);
                    }
                },
            );
        });

        // Value removal is O(n) per call, so only a sample of the list is removed.
        group.bench_with_input(BenchmarkId::new("remove_shuffled", size), &size, |b, &size| {
            let mut values: Vec<usize> = (0..size).collect();
            values.shuffle(&mut StdRng::seed_from_u64(size as u64));
            values.truncate(100);

            b.iter_with_setup(
                || SinglyLinkedList::from_iter(0..size),
                |mut list| {
                    for value in &values {
                        black_box(list.remove(value));
                    }
                    list
                },
            );
        });

        group.bench_with_input(BenchmarkId::new("clear", size), &size, |b, &size| {
            b.iter_with_setup(
                || SinglyLinkedList::from_iter(0..size),
                |mut list| list.clear(),
            );
        });
    }

    group.finish();
}

criterion_group!(benches, push_benchmark, remove_benchmark);
criterion_main!(benches);
