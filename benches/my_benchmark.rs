use city_mapper::extract_city_mentions;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_extract_mentions(c: &mut Criterion) {
    let gazetteer = vec![
        ("Paris".to_string(), Some("FR".to_string()), Vec::new()),
        ("London".to_string(), Some("GB".to_string()), Vec::new()),
        (
            "New York".to_string(),
            Some("US".to_string()),
            vec!["NYC".to_string()],
        ),
    ];

    let text = "The train left Paris for London, while New York slept and Paris did not.";

    c.bench_function("extract_city_mentions", |b| {
        b.iter(|| extract_city_mentions(black_box(text), black_box(&gazetteer)))
    });
}

criterion_group!(benches, benchmark_extract_mentions);
criterion_main!(benches);
