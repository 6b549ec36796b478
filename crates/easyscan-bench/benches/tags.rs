use criterion::{black_box, criterion_group, criterion_main, Criterion};
use easyscan_index::extract_tags;

fn bench_extract_tags(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_tags");

    let short = "easyjson:json\n";
    group.bench_function("directive_only", |b| b.iter(|| extract_tags(black_box(short))));

    // Long prose with the directive on the last line.
    let mut long = String::new();
    for i in 0..200 {
        long.push_str(&format!("Line {i} describing the type in some detail.\n"));
    }
    long.push_str("easyjson:json,skip,lowercase\n");
    group.bench_function("directive_after_200_lines", |b| {
        b.iter(|| extract_tags(black_box(&long)))
    });

    let none = long.replace("easyjson:", "plain:");
    group.bench_function("no_directive", |b| b.iter(|| extract_tags(black_box(&none))));

    group.finish();
}

criterion_group!(benches, bench_extract_tags);
criterion_main!(benches);
