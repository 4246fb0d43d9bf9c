//! Criterion benchmarks for the identifier codec.
//!
//! Benchmarks cover:
//! - Detection (requires_encoding / requires_decoding)
//! - Encoding safe, mixed and mostly-unsafe names
//! - Decoding the encoded forms
//! - Batch encoding of many names of increasing length

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use myident::ident::codec::{decode, encode, requires_decoding, requires_encoding};

const SAMPLES: [(&str, &str); 4] = [
    ("safe", "customer_orders_2024"),
    ("periods", "this.has.periods.in.it"),
    ("unicode", "commandes_clients_été_日本"),
    ("punctuation", "--//..!!  ??"),
];

/// Build a name of `len` characters alternating safe and unsafe runs.
fn build_mixed_name(len: usize) -> String {
    "orders-2024.archive "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");

    for (label, name) in SAMPLES {
        let encoded = encode(name);
        group.bench_function(BenchmarkId::new("requires_encoding", label), |b| {
            b.iter(|| black_box(requires_encoding(black_box(name))));
        });
        group.bench_function(BenchmarkId::new("requires_decoding", label), |b| {
            b.iter(|| black_box(requires_decoding(black_box(&encoded))));
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (label, name) in SAMPLES {
        group.bench_function(label, |b| {
            b.iter(|| black_box(encode(black_box(name))));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (label, name) in SAMPLES {
        let encoded = encode(name);
        group.bench_function(label, |b| {
            b.iter(|| black_box(decode(black_box(&encoded)).unwrap()));
        });
    }

    group.finish();
}

fn bench_round_trip_by_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip_by_length");

    for len in [16usize, 64, 256, 1024] {
        let name = build_mixed_name(len);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &name, |b, name| {
            b.iter(|| {
                let encoded = encode(black_box(name));
                black_box(decode(&encoded).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_detection,
    bench_encode,
    bench_decode,
    bench_round_trip_by_length
);
criterion_main!(benches);
