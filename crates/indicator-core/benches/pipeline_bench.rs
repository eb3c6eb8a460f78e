// File: crates/indicator-core/benches/pipeline_bench.rs
// Summary: Parse + transform throughput over synthetic indicator tables.

use criterion::{criterion_group, criterion_main, black_box, BenchmarkId, Criterion};
use indicator_core::{load_and_transform, Dataset, LoadOptions, SelectionState};

fn gen_csv(rows: usize, years: usize) -> String {
    let mut out = String::from("Name");
    for y in 0..years {
        out.push_str(&format!(",{}", 1995 + y));
    }
    out.push('\n');
    for r in 0..rows {
        // every tenth row is a group header
        if r % 10 == 9 {
            out.push_str(&format!("Group {r}"));
            for _ in 0..years { out.push(','); }
        } else {
            out.push_str(&format!("Indicator {r}"));
            for y in 0..years {
                if (r + y) % 7 == 0 { out.push(','); } else { out.push_str(&format!(",{:.1}", (r * y) as f64 * 0.5)); }
            }
        }
        out.push('\n');
    }
    out
}

fn bench_pipeline(c: &mut Criterion) {
    let opts = LoadOptions::default();
    let mut group = c.benchmark_group("pipeline");
    for &rows in &[100usize, 1_000usize] {
        let text = gen_csv(rows, 30);
        group.bench_with_input(BenchmarkId::new("load_and_transform", rows), &text, |b, t| {
            b.iter(|| black_box(load_and_transform(t, SelectionState::default(), &opts)));
        });
        let dataset = Dataset::parse(&text, &opts).expect("parse");
        group.bench_with_input(BenchmarkId::new("reselect", rows), &dataset, |b, d| {
            let mut i = 0i64;
            b.iter(|| {
                i = (i + 1) % rows as i64;
                black_box(d.transform(SelectionState::new(i)))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
