use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seedrun_config::{Constants, PropertyStore};

fn parse_bench(c: &mut Criterion) {
    let mut text = String::from(
        "runs=2\npopulation.size=10\ngenome.length=8\ngenerations=5\nmutation.rate=0.1\nrecombination.rate=0.7\n",
    );
    for idx in 0..1_000 {
        text.push_str(&format!("# padding {idx}\nextra.key.{idx} = value {idx}\n"));
    }

    c.bench_function("parse_properties", |b| {
        b.iter(|| black_box(PropertyStore::parse(black_box(&text)).unwrap()));
    });

    let store = PropertyStore::parse(&text).unwrap();
    c.bench_function("resolve_constants", |b| {
        b.iter(|| black_box(Constants::from_store(black_box(&store)).unwrap()));
    });
}

criterion_group!(benches, parse_bench);
criterion_main!(benches);
