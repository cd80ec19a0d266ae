// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use waypost_codegen::{DestinationDescriptor, NavigationData, TypeRef, generate, generate_unit};

fn gen_descriptors(n: usize) -> Vec<DestinationDescriptor> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        out.push(
            DestinationDescriptor::new(
                &format!("Screen{i}"),
                TypeRef::parse(&format!("crate::screen{i}::Scope")).unwrap(),
                TypeRef::parse("crate::MainScope").unwrap(),
                NavigationData {
                    route: TypeRef::parse(&format!("crate::screen{i}::Route")).unwrap(),
                    destination_scope: TypeRef::parse("crate::AppDestinations").unwrap(),
                },
            )
            .unwrap(),
        );
    }
    out
}

fn bench_single_adapter(c: &mut Criterion) {
    let descriptor = gen_descriptors(1).pop().unwrap();
    let mut group = c.benchmark_group("generate");
    group.throughput(Throughput::Elements(1));
    group.bench_function("single_adapter", |b| {
        b.iter(|| generate(black_box(&descriptor)));
    });
    group.finish();
}

fn bench_unit_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_unit");
    for n in [8_usize, 64, 256] {
        let descriptors = gen_descriptors(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("descriptors_{n}"), |b| {
            b.iter_batched(
                || descriptors.clone(),
                |d| generate_unit(black_box(&d)).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_adapter, bench_unit_sizes);
criterion_main!(benches);
