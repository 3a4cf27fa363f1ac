//! Benchmarks for blocking queue performance.
//!
//! Compares relay-queue against crossbeam-channel's bounded channel, the
//! closest widely used blocking primitive.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crossbeam_channel::bounded;
use relay_queue::BlockingQueue;
use std::sync::Arc;
use std::thread;

/// 256-byte payload, the size of a typical device frame.
#[allow(unused)]
#[derive(Debug, Clone, Copy)]
struct Frame([u64; 32]);

// ============================================================================
// Single-threaded operation cost
// ============================================================================

fn bench_single_thread_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_thread_ops");

    group.bench_function("relay_queue/u64", |b| {
        let q = BlockingQueue::<u64>::with_config(1024, "bench", true);
        b.iter(|| {
            q.try_push(black_box(42)).unwrap();
            black_box(q.try_pop().unwrap())
        });
    });

    group.bench_function("crossbeam_bounded/u64", |b| {
        let (tx, rx) = bounded::<u64>(1024);
        b.iter(|| {
            tx.try_send(black_box(42)).unwrap();
            black_box(rx.try_recv().unwrap())
        });
    });

    group.bench_function("relay_queue/256b", |b| {
        let q = BlockingQueue::<Frame>::with_config(1024, "bench", true);
        let msg = Frame([0; 32]);
        b.iter(|| {
            q.try_push(black_box(msg)).unwrap();
            black_box(q.try_pop().unwrap())
        });
    });

    group.bench_function("crossbeam_bounded/256b", |b| {
        let (tx, rx) = bounded::<Frame>(1024);
        let msg = Frame([0; 32]);
        b.iter(|| {
            tx.try_send(black_box(msg)).unwrap();
            black_box(rx.try_recv().unwrap())
        });
    });

    group.finish();
}

// ============================================================================
// Throughput benchmarks (burst push then pop)
// ============================================================================

fn bench_burst_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("burst_throughput");

    for batch_size in [100, 1000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(
            BenchmarkId::new("relay_queue", batch_size),
            &batch_size,
            |b, &n| {
                let q = BlockingQueue::<u64>::with_config(n * 2, "bench", true);
                b.iter(|| {
                    for i in 0..n {
                        q.try_push(black_box(i as u64)).unwrap();
                    }
                    for _ in 0..n {
                        black_box(q.try_pop().unwrap());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("crossbeam_bounded", batch_size),
            &batch_size,
            |b, &n| {
                let (tx, rx) = bounded::<u64>(n * 2);
                b.iter(|| {
                    for i in 0..n {
                        tx.try_send(black_box(i as u64)).unwrap();
                    }
                    for _ in 0..n {
                        black_box(rx.try_recv().unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Cross-thread blocking throughput (the primary workload)
// ============================================================================

fn bench_cross_thread_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_thread_throughput");

    const MESSAGE_COUNT: usize = 100_000;
    group.throughput(Throughput::Elements(MESSAGE_COUNT as u64));

    group.bench_function("relay_queue/u64", |b| {
        b.iter(|| {
            let q = Arc::new(BlockingQueue::<u64>::with_config(1024, "bench", true));

            let producer = {
                let q = Arc::clone(&q);
                thread::spawn(move || {
                    for i in 0..MESSAGE_COUNT {
                        q.push(i as u64).unwrap();
                    }
                })
            };

            let consumer = {
                let q = Arc::clone(&q);
                thread::spawn(move || {
                    for _ in 0..MESSAGE_COUNT {
                        black_box(q.pop().unwrap());
                    }
                })
            };

            producer.join().unwrap();
            consumer.join().unwrap();
        });
    });

    group.bench_function("crossbeam_bounded/u64", |b| {
        b.iter(|| {
            let (tx, rx) = bounded::<u64>(1024);

            let producer = thread::spawn(move || {
                for i in 0..MESSAGE_COUNT {
                    tx.send(i as u64).unwrap();
                }
            });

            let consumer = thread::spawn(move || {
                for _ in 0..MESSAGE_COUNT {
                    black_box(rx.recv().unwrap());
                }
            });

            producer.join().unwrap();
            consumer.join().unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// MPMC contention
// ============================================================================

fn bench_mpmc_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("mpmc_throughput");

    const MESSAGE_COUNT: usize = 100_000;
    const THREADS: usize = 4;
    const PER_THREAD: usize = MESSAGE_COUNT / THREADS;
    group.throughput(Throughput::Elements(MESSAGE_COUNT as u64));

    group.bench_function("relay_queue/4x4", |b| {
        b.iter(|| {
            let q = Arc::new(BlockingQueue::<u64>::with_config(1024, "bench", true));

            let mut handles = Vec::new();
            for _ in 0..THREADS {
                let q = Arc::clone(&q);
                handles.push(thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        q.push(i as u64).unwrap();
                    }
                }));
            }
            for _ in 0..THREADS {
                let q = Arc::clone(&q);
                handles.push(thread::spawn(move || {
                    for _ in 0..PER_THREAD {
                        black_box(q.pop().unwrap());
                    }
                }));
            }

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.bench_function("crossbeam_bounded/4x4", |b| {
        b.iter(|| {
            let (tx, rx) = bounded::<u64>(1024);

            let mut handles = Vec::new();
            for _ in 0..THREADS {
                let tx = tx.clone();
                handles.push(thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        tx.send(i as u64).unwrap();
                    }
                }));
            }
            for _ in 0..THREADS {
                let rx = rx.clone();
                handles.push(thread::spawn(move || {
                    for _ in 0..PER_THREAD {
                        black_box(rx.recv().unwrap());
                    }
                }));
            }

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_thread_ops,
    bench_burst_throughput,
    bench_cross_thread_throughput,
    bench_mpmc_throughput,
);

criterion_main!(benches);
