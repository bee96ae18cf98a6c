extern crate criterion;

use criterion::{criterion_group, criterion_main, Criterion};

use embercss_lib::ember_css;
use embercss_lib::Compaction;

fn bench_large_sheet(c: &mut Criterion) {
    let mut big_css = String::with_capacity(1_000_000);
    for i in 0..10_000 {
        big_css.push_str(&format!(".c{} {{ color: red; border-width: 1px; }}\n", i));
    }

    c.bench_function("large_sheet", |b| b.iter(|| ember_css::parse(&big_css)));
}

fn bench_deep_nesting(c: &mut Criterion) {
    let mut deep_css = String::new();
    for _ in 0..500 {
        deep_css.push_str("outer {");
    }
    deep_css.push_str("color: red;");
    for _ in 0..500 {
        deep_css.push('}');
    }

    c.bench_function("deep_nesting", |b| b.iter(|| ember_css::parse(&deep_css)));
}

fn bench_render_max(c: &mut Criterion) {
    let mut big_css = String::with_capacity(1_000_000);
    for i in 0..10_000 {
        big_css.push_str(&format!(".c{} {{ color: red; }}\n", i));
    }
    let document = ember_css::parse(&big_css);

    c.bench_function("render_max", |b| {
        b.iter(|| ember_css::render(&document, Compaction::Max))
    });
}

criterion_group!(
    benches,
    bench_large_sheet,
    bench_deep_nesting,
    bench_render_max
);
criterion_main!(benches);
