use clsify::{chain, cls, clsify, to_class_string, with_modifier, ClassValue};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct RowState {
    selected: bool,
    striped: bool,
    hovered: bool,
    disabled: bool,
}

fn benchmark_flat_strings(c: &mut Criterion) {
    let args = [
        cls!("btn"),
        cls!("btn-primary"),
        cls!(null),
        cls!("btn-lg"),
    ];

    c.bench_function("clsify_flat_strings", |b| b.iter(|| clsify(black_box(&args))));
}

fn benchmark_mixed(c: &mut Criterion) {
    let args = [
        cls!("card"),
        cls!(["card-body", { "card-open": true, "card-dark": false }]),
        cls!({ "shadow": 1, "rounded": 0 }),
        cls!([["deep", ["deeper", { "deepest": true }]]]),
    ];

    c.bench_function("clsify_mixed", |b| b.iter(|| clsify(black_box(&args))));
}

fn benchmark_wide_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("clsify_wide_array");

    for size in [10, 100, 1000].iter() {
        let value: ClassValue = (0..*size)
            .map(|i| {
                if i % 3 == 0 {
                    ClassValue::Null
                } else {
                    ClassValue::from(format!("token-{}", i))
                }
            })
            .collect();
        let args = [value];

        group.bench_with_input(BenchmarkId::from_parameter(size), &args, |b, args| {
            b.iter(|| clsify(black_box(args)))
        });
    }

    group.finish();
}

fn benchmark_helpers(c: &mut Criterion) {
    let modifiers = ["large", "disabled", "outline", "block"];

    c.bench_function("with_modifier", |b| {
        b.iter(|| with_modifier(black_box("btn"), black_box(&modifiers)))
    });

    let btn = chain("btn");
    c.bench_function("chain_add", |b| {
        b.iter(|| btn.add(black_box(&[cls!("x"), cls!({ "y": true })])))
    });
}

fn benchmark_typed_flags(c: &mut Criterion) {
    let state = RowState {
        selected: true,
        striped: false,
        hovered: true,
        disabled: false,
    };

    c.bench_function("to_class_string_struct", |b| {
        b.iter(|| to_class_string(black_box(&state)))
    });
}

criterion_group!(
    benches,
    benchmark_flat_strings,
    benchmark_mixed,
    benchmark_wide_array,
    benchmark_helpers,
    benchmark_typed_flags
);
criterion_main!(benches);
