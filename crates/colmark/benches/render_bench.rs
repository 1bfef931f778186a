//! Benchmarks for markup rendering.
//!
//! Run with: cargo bench -p colmark

use colmark::render;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Plain ASCII with no markup (exercises the fast path).
fn plain_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Markup-dense input with nesting and next-word scopes.
fn markup_heavy(len: usize) -> String {
    "#r(red) #G(on green) #bold(bold #b(blue)) #y word plain "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// RGB-extended tags.
fn rgb_heavy(len: usize) -> String {
    "#rgb[12;34;56](fg) #RGB[200;100;0](bg) tail "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for len in [64usize, 1024, 16 * 1024] {
        for (name, input) in [
            ("plain", plain_text(len)),
            ("markup", markup_heavy(len)),
            ("rgb", rgb_heavy(len)),
        ] {
            group.throughput(Throughput::Bytes(input.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, len), &input, |b, input| {
                b.iter(|| render(black_box(input)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
