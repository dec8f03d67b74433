//! Benchmarks for segmentation and the full comparison pipeline.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polidiff::{SectionSegmenter, StructureDiffEngine};
use std::hint::black_box;

/// Synthetic policy document with `sections` numbered sections of prose.
fn synthetic_document(sections: usize, seed: usize) -> String {
    let mut text = String::new();
    for i in 0..sections {
        text.push_str(&format!("{}. Hoofdstuk {}\n", i + 1, i + 1));
        for j in 0..6 {
            text.push_str(&format!(
                "de organisatie draagt zorg voor kwaliteit en naleving van regel {} lid {}\n",
                (i + seed) % 97,
                j
            ));
        }
        text.push('\n');
    }
    text
}

fn benchmark_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");
    for sections in [10, 100, 500] {
        let text = synthetic_document(sections, 0);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &text, |b, text| {
            let segmenter = SectionSegmenter::new();
            b.iter(|| black_box(segmenter.segment(black_box(text), "bench.txt")));
        });
    }
    group.finish();
}

fn benchmark_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    for sections in [10, 100, 500] {
        // Different seeds modify every section body, the worst case for the
        // similarity stage.
        let a = synthetic_document(sections, 0);
        let b = synthetic_document(sections, 1);
        group.bench_with_input(
            BenchmarkId::from_parameter(sections),
            &(a, b),
            |bench, (a, b)| {
                let engine = StructureDiffEngine::new();
                bench.iter(|| {
                    black_box(engine.compare(black_box(a), black_box(b), "a.txt", "b.txt"))
                });
            },
        );
    }
    group.finish();
}

fn benchmark_identical_compare(c: &mut Criterion) {
    let text = synthetic_document(100, 0);
    c.bench_function("compare_identical_100", |b| {
        let engine = StructureDiffEngine::new();
        b.iter(|| black_box(engine.compare(black_box(&text), black_box(&text), "a.txt", "b.txt")));
    });
}

criterion_group!(
    benches,
    benchmark_segmentation,
    benchmark_compare,
    benchmark_identical_compare
);
criterion_main!(benches);
