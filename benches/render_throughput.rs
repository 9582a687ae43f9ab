//! Render and map micro-benchmarks
//!
//! Measures parse+execute cost per call and mapping throughput over record counts.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use grr::{Context, Fragment, Value, compose, map_over, render};
use std::hint::black_box;

const ROW_TEMPLATE: &str = "<tr><td>{{.id}}</td><td>{{.name}}</td><td>{{ .value }}</td></tr>";

/// Generate test data records
fn generate_records(count: usize) -> Value {
    (0..count)
        .map(|i| {
            Context::new()
                .with("id", i)
                .with("name", format!("Record <{}>", i))
                .with("value", i * 100)
        })
        .collect::<Vec<_>>()
        .into()
}

fn benchmark_render(c: &mut Criterion) {
    let context = Context::new()
        .with("Title", "Quarterly & Annual")
        .with("Body", Fragment::from_trusted("<p>already rendered</p>"));

    c.bench_function("render_single", |b| {
        b.iter(|| {
            render(
                black_box("<article><h1>{{.Title}}</h1>{{.Body}}</article>"),
                context.clone(),
            )
            .expect("render")
        })
    });
}

fn benchmark_map_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_throughput");

    for count in [1, 10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        let records = generate_records(count);

        group.bench_with_input(BenchmarkId::new("records", count), &records, |b, records| {
            b.iter(|| map_over(ROW_TEMPLATE, records).expect("map"))
        });
    }

    group.finish();
}

fn benchmark_compose(c: &mut Criterion) {
    let children: Vec<Fragment> = (0..50)
        .map(|i| Fragment::from_trusted(format!("<section>{}</section>", i)))
        .collect();

    c.bench_function("compose_50_children", |b| {
        b.iter(|| compose(black_box("<body>{{yield}}</body>"), &children).expect("compose"))
    });
}

criterion_group!(
    benches,
    benchmark_render,
    benchmark_map_throughput,
    benchmark_compose
);
criterion_main!(benches);
