use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tracker_core::{
    core::services::{ChartService, FilterService, SummaryService},
    Category, CategoryFilter, TransactionRecord, TransactionStore,
};

fn build_sample_store(txn_count: usize) -> TransactionStore {
    let mut store = TransactionStore::new();
    for idx in 0..txn_count {
        let amount = 5.0 + (idx % 100) as f64;
        let record = if idx % 4 == 0 {
            TransactionRecord::income(format!("Income {idx}"), amount * 10.0)
        } else {
            let category = Category::ALL[idx % Category::ALL.len()];
            TransactionRecord::expense(format!("Expense {idx}"), amount, category)
        };
        store.insert(record);
    }
    store
}

fn bench_derivations(c: &mut Criterion) {
    let store = build_sample_store(black_box(10_000));

    c.bench_function("summary_10k", |b| {
        b.iter(|| black_box(SummaryService::summarize(store.all())))
    });

    c.bench_function("chart_slices_10k", |b| {
        b.iter(|| black_box(ChartService::slices(store.all(), 6)))
    });

    c.bench_function("filter_food_10k", |b| {
        b.iter(|| {
            black_box(FilterService::visible(
                store.all(),
                CategoryFilter::Only(Category::Food),
            ))
        })
    });
}

criterion_group!(benches, bench_derivations);
criterion_main!(benches);
