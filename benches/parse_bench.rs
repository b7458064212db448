use criterion::{Criterion, black_box, criterion_group, criterion_main};

use upcean::{Ean, Upc, check_digit};

fn bench_parse(c: &mut Criterion) {
    c.bench_function("upc_parse", |b| {
        b.iter(|| Upc::parse(black_box("045496830434")))
    });

    c.bench_function("ean_parse", |b| {
        b.iter(|| Ean::parse(black_box("4549673590600")))
    });

    c.bench_function("upc_parse_bad_check_digit", |b| {
        b.iter(|| Upc::parse(black_box("012345678919")))
    });
}

fn bench_render(c: &mut Criterion) {
    let upc = Upc::parse("045496830434").unwrap();
    c.bench_function("upc_to_string", |b| b.iter(|| black_box(upc).to_string()));
    c.bench_function("upc_decode", |b| b.iter(|| black_box(upc).decode()));
}

fn bench_check_digit(c: &mut Criterion) {
    c.bench_function("check_digit_12", |b| {
        b.iter(|| check_digit(black_box(454_967_359_060)))
    });
}

criterion_group!(benches, bench_parse, bench_render, bench_check_digit);
criterion_main!(benches);
