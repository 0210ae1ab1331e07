// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Benchmarks for shortest and fixed-precision float formatting

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const BATCH_SIZE: usize = 8192;

/// Values spread over many magnitudes, with some integers and some
/// fractions, so every layout branch is exercised.
fn create_f64_values() -> Vec<f64> {
    (0..BATCH_SIZE)
        .map(|i| match i % 4 {
            0 => i as f64 * 1.5,
            1 => (i as f64).sqrt() * 1e-3,
            2 => 1.0 / (i as f64 + 1.0),
            _ => (i as f64).powi(4),
        })
        .collect()
}

fn bench_shortest(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest");
    let values = create_f64_values();
    let values32: Vec<f32> = values.iter().map(|&v| v as f32).collect();
    let mut buf = [0u8; 400];

    group.bench_function("f64", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(ryu_fixed::shortest(&mut buf, black_box(v)).unwrap());
            }
        })
    });
    group.bench_function("f32", |b| {
        b.iter(|| {
            for &v in &values32 {
                black_box(ryu_fixed::shortest(&mut buf, black_box(v)).unwrap());
            }
        })
    });
    group.bench_function("f64 via std", |b| {
        use std::io::Write;
        let mut out = Vec::with_capacity(64);
        b.iter(|| {
            for &v in &values {
                out.clear();
                write!(out, "{}", black_box(v)).unwrap();
                black_box(&out);
            }
        })
    });
    group.finish();
}

fn bench_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed");
    let values = create_f64_values();
    let mut buf = [0u8; 400];

    for precision in [0, 2, 6, 17] {
        group.bench_with_input(BenchmarkId::new("f64", precision), &precision, |b, &p| {
            b.iter(|| {
                for &v in &values {
                    black_box(ryu_fixed::fixed(&mut buf, black_box(v), p).unwrap());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shortest, bench_fixed);
criterion_main!(benches);
