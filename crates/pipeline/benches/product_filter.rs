use catalog::{Product, ProductRef, ServiceType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::filters::{ExclusionRule, ProductTypeFilter};
use pipeline::{Filter, ProductTypeExclusions};
use std::sync::Arc;

fn create_catalog(size: usize) -> Vec<ProductRef> {
    (0..size)
        .map(|i| {
            let product = match i % 6 {
                0 => Product::item(format!("SKU-{i}")).with_bundled(true),
                1 => Product::item(format!("SKU-{i}")).with_mastered(true),
                2 => Product::item(format!("SKU-{i}")).with_type_code(128),
                3 => Product::offer(format!("SKU-{i}")).with_service_type(ServiceType::new("warranty", "")),
                4 => Product::item(format!("SKU-{i}")).with_product_item(false),
                _ => Product::item(format!("SKU-{i}")),
            };
            Arc::new(product)
        })
        .collect()
}

fn bench_product_filter(c: &mut Criterion) {
    let catalog = create_catalog(10_000);

    let passthrough = ProductTypeFilter::new(ProductTypeExclusions::default());
    c.bench_function("product_filter_no_rules_10k", |b| {
        b.iter(|| passthrough.apply(black_box(catalog.clone())).unwrap())
    });

    let all_rules = ExclusionRule::ALL
        .into_iter()
        .fold(ProductTypeExclusions::default(), |acc, rule| acc.with(rule));
    let strict = ProductTypeFilter::new(all_rules);
    c.bench_function("product_filter_all_rules_10k", |b| {
        b.iter(|| strict.apply(black_box(catalog.clone())).unwrap())
    });
}

criterion_group!(benches, bench_product_filter);
criterion_main!(benches);
