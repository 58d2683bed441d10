use criterion::{Criterion, criterion_group, criterion_main};
use payview::api::{SeriesCaptions, build_dual_axis_spec};
use payview::core::{
    DatasetKind, Granularity, Record, RecordColumn, RecordId, SearchField, SeriesGenerator,
    SeriesSubject, SortDirection, SubjectKind, filter_records, proportion_of_total,
    sort_records, top_n,
};
use payview::{RecordTableView, ViewConfig};
use rust_decimal::Decimal;
use std::hint::black_box;

fn generated_records(count: u32) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let total = Decimal::from((i * 7_919) % 1_000_000);
            Record::new(RecordId(i), format!("merchant-{i:05}"), total, u64::from(i % 997))
                .expect("valid generated record")
        })
        .collect()
}

fn bench_filter_then_sort_10k(c: &mut Criterion) {
    let records = generated_records(10_000);

    c.bench_function("filter_then_sort_10k", |b| {
        b.iter(|| {
            let filtered = filter_records(black_box(&records), black_box("7"), |record| {
                SearchField::Name.text(record)
            });
            let _ = sort_records(
                &filtered,
                |record| RecordColumn::TotalPayments.key(record),
                SortDirection::Descending,
            );
        })
    });
}

fn bench_top_n_10k(c: &mut Criterion) {
    let records = generated_records(10_000);

    c.bench_function("top_n_10_of_10k", |b| {
        b.iter(|| {
            let _ = top_n(
                black_box(&records),
                |record| RecordColumn::TotalPayments.key(record),
                black_box(10),
            )
            .expect("n > 0");
        })
    });
}

fn bench_table_rows_memo_hit(c: &mut Criterion) {
    let mut view = RecordTableView::new(
        DatasetKind::Merchant,
        generated_records(10_000),
        &ViewConfig::default(),
    )
    .expect("table view");
    view.set_query("12");
    let _ = view.rows();

    c.bench_function("table_rows_memo_hit_10k", |b| {
        b.iter(|| {
            let _ = black_box(view.rows().len());
        })
    });
}

fn bench_weekly_chart_spec(c: &mut Criterion) {
    let mut generator = SeriesGenerator::seeded(17);
    let captions = SeriesCaptions::time_series(SubjectKind::Overview, Granularity::Weekly);

    c.bench_function("weekly_overview_chart_spec", |b| {
        b.iter(|| {
            let amount = generator.generate(Granularity::Weekly, SeriesSubject::Overview);
            let count = generator
                .generate_counts(Granularity::Weekly, SeriesSubject::Overview)
                .expect("overview counts");
            let _ = build_dual_axis_spec(&amount, Some(&count), amount.labels(), &captions)
                .expect("valid spec");
        })
    });
}

fn bench_proportions_1k(c: &mut Criterion) {
    let amounts: Vec<Decimal> = (1..=1_000).map(Decimal::from).collect();

    c.bench_function("proportion_of_total_1k", |b| {
        b.iter(|| {
            let _ = proportion_of_total(black_box(&amounts));
        })
    });
}

criterion_group!(
    benches,
    bench_filter_then_sort_10k,
    bench_top_n_10k,
    bench_table_rows_memo_hit,
    bench_weekly_chart_spec,
    bench_proportions_1k
);
criterion_main!(benches);
