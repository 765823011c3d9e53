use cost_explainer::{CostRecord, NarrativeGenerator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_records() -> Vec<CostRecord> {
    vec![
        CostRecord {
            slug: "a-kitchen-remodel".to_string(),
            topic: "a kitchen remodel".to_string(),
            title: "How Much Does a Kitchen Remodel Really Cost?".to_string(),
            min_cost: 14_000.0,
            max_cost: 40_000.0,
            unit: None,
            category: "Home Improvement".to_string(),
        },
        CostRecord {
            slug: "house-cleaning".to_string(),
            topic: "house cleaning".to_string(),
            title: "How Much Does House Cleaning Really Cost?".to_string(),
            min_cost: 120.0,
            max_cost: 280.0,
            unit: Some("per visit".to_string()),
            category: "Home Services".to_string(),
        },
        CostRecord {
            slug: "seo-services".to_string(),
            topic: "SEO services".to_string(),
            title: "How Much Do SEO Services Really Cost?".to_string(),
            min_cost: 500.0,
            max_cost: 5_000.0,
            unit: Some("per month".to_string()),
            category: "Digital & Marketing".to_string(),
        },
    ]
}

fn bench_derive(c: &mut Criterion) {
    let generator = NarrativeGenerator::new();
    let records = sample_records();

    c.bench_function("derive_narrative_all_models", |b| {
        b.iter(|| {
            for record in &records {
                black_box(generator.derive(black_box(record)));
            }
        })
    });
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
