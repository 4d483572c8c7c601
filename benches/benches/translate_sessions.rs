// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_touch::translator::{TargetTouches, TouchDetail, Translator, TranslatorConfig};
use understory_touch::types::{PointerId, PointerSample, TouchEventType};

/// Samples for `contacts` overlapping sessions, each with `moves` move samples.
///
/// All contacts go down first, then move round-robin, then lift in order.
fn gen_sessions(contacts: i32, moves: usize) -> Vec<PointerSample<u32>> {
    let mut out = Vec::new();
    for id in 0..contacts {
        let p = Point::new(f64::from(id) * 10.0, 0.0);
        out.push(PointerSample::down(PointerId(id), id as u32 % 4, p));
    }
    for step in 0..moves {
        for id in 0..contacts {
            let p = Point::new(f64::from(id) * 10.0, step as f64);
            out.push(PointerSample::moved(PointerId(id), 99, p));
        }
    }
    for id in 0..contacts {
        out.push(PointerSample::up(PointerId(id), 99, Point::ZERO));
    }
    out
}

fn sink(_: TouchEventType, target: &u32, detail: TouchDetail<'_, u32>) {
    black_box((target, detail.touches.len(), detail.target_touches.len()));
}

fn run(config: TranslatorConfig, samples: &[PointerSample<u32>]) {
    let mut translator: Translator<u32> = Translator::new(config);
    let mut dispatcher = sink;
    for s in samples {
        black_box(translator.handle(s.clone(), &mut dispatcher));
    }
}

fn bench_single_contact(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_contact");
    for &moves in &[16usize, 256, 4096] {
        let samples = gen_sessions(1, moves);
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_function(format!("down_moves{}_up", moves), |b| {
            b.iter_batched(
                || samples.clone(),
                |samples| run(TranslatorConfig::default(), &samples),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_multi_contact(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_contact");
    for &contacts in &[2i32, 5, 10] {
        let samples = gen_sessions(contacts, 64);
        group.throughput(Throughput::Elements(samples.len() as u64));
        for policy in [
            TargetTouches::AllActive,
            TargetTouches::SameOwner,
            TargetTouches::OwnerWithin,
        ] {
            let config = TranslatorConfig::default().with_target_touches(policy);
            group.bench_function(format!("{:?}_contacts{}", policy, contacts), |b| {
                b.iter(|| run(config, &samples))
            });
        }
    }
    group.finish();
}

fn bench_stray_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("stray");
    // Hover-only movement: every sample is ignored.
    let samples: Vec<_> = (0..1024)
        .map(|i| PointerSample::moved(PointerId(1), 0_u32, Point::new(f64::from(i), 0.0)))
        .collect();
    group.throughput(Throughput::Elements(samples.len() as u64));
    group.bench_function("hover_moves_1024", |b| {
        b.iter(|| run(TranslatorConfig::default(), &samples))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_single_contact,
    bench_multi_contact,
    bench_stray_samples,
);
criterion_main!(benches);
