// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_touch::shim::{ListenerShim, ShimConfig};

const TYPES: [&str; 4] = ["touchstart", "touchmove", "touchend", "click"];

fn bench_attach_detach(c: &mut Criterion) {
    let mut group = c.benchmark_group("listener_shim");
    for &elements in &[8u32, 64, 512] {
        group.throughput(Throughput::Elements(u64::from(elements) * TYPES.len() as u64 * 2));
        group.bench_function(format!("attach_detach_e{}", elements), |b| {
            b.iter(|| {
                let mut shim: ListenerShim<u32> = ListenerShim::new(ShimConfig::default());
                for e in 0..elements {
                    for ty in TYPES {
                        black_box(shim.attach(&e, ty, e % 2 == 0));
                    }
                }
                for e in 0..elements {
                    for ty in TYPES {
                        black_box(shim.detach(&e, ty, e % 2 == 0));
                    }
                }
                debug_assert!(shim.is_empty());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_attach_detach);
criterion_main!(benches);
