use core::hint::black_box;
use std::sync::Arc;
use std::thread::scope;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use idmint::{SnowflakeGenerator, Uuid, UuidV7Generator};

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

fn bench_snowflake(c: &mut Criterion) {
    let mut group = c.benchmark_group("snowflake");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("generate/{TOTAL_IDS}"), |b| {
        let generator = SnowflakeGenerator::new(1, 2).unwrap();
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(generator.generate());
            }
        })
    });

    group.bench_function(format!("generate_batch/{TOTAL_IDS}"), |b| {
        let generator = SnowflakeGenerator::new(1, 2).unwrap();
        b.iter(|| black_box(generator.generate_batch(TOTAL_IDS)))
    });

    group.bench_function(format!("generate_contended/{TOTAL_IDS}x4"), |b| {
        let generator = Arc::new(SnowflakeGenerator::new(1, 2).unwrap());
        b.iter(|| {
            scope(|s| {
                for _ in 0..4 {
                    let generator = Arc::clone(&generator);
                    s.spawn(move || {
                        for _ in 0..TOTAL_IDS {
                            black_box(generator.generate());
                        }
                    });
                }
            })
        })
    });

    group.finish();
}

fn bench_uuid(c: &mut Criterion) {
    let mut group = c.benchmark_group("uuid");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("v4/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(Uuid::new_v4());
            }
        })
    });

    group.bench_function(format!("v7/{TOTAL_IDS}"), |b| {
        let generator = UuidV7Generator::new();
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(generator.generate());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_snowflake, bench_uuid);
criterion_main!(benches);
