use payview::api::{RecordSource, SeriesRole};
use payview::core::{
    DatasetKind, Record, RecordColumn, RecordId, SearchField, SortDirection,
};
use payview::extensions::SampleDataSource;
use payview::{RecordTableView, ViewConfig, ViewError};
use rust_decimal::Decimal;

fn merchant_view() -> RecordTableView {
    RecordTableView::from_source(&SampleDataSource, DatasetKind::Merchant, &ViewConfig::default())
        .expect("merchant view")
}

fn names(rows: &[Record]) -> Vec<&str> {
    rows.iter().map(|record| record.name.as_str()).collect()
}

#[test]
fn default_rows_sort_by_total_descending() {
    let mut view = merchant_view();
    let rows = view.rows();
    assert_eq!(rows.len(), 10);
    assert_eq!(
        names(&rows[..3]),
        vec!["商户C", "商户I", "商户E"]
    );
}

#[test]
fn query_filters_then_sort_applies() {
    let mut view = merchant_view();
    view.set_query("a");
    assert_eq!(names(view.rows()), vec!["商户A"]);

    view.set_query("");
    view.sort_by(RecordColumn::Name);
    let rows = view.rows();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].name, "商户J");

    view.sort_by(RecordColumn::Name);
    assert_eq!(view.sort_state().direction(), SortDirection::Ascending);
    assert_eq!(view.rows()[0].name, "商户A");
}

#[test]
fn query_resets_do_not_lose_records() {
    let mut view = merchant_view();
    view.set_query("商户B");
    assert_eq!(view.rows().len(), 1);
    view.set_query("");
    assert_eq!(view.rows().len(), view.records().len());
}

#[test]
fn unchanged_state_reuses_memoized_rows() {
    let mut view = merchant_view();
    let _ = view.rows();
    let _ = view.rows();
    assert_eq!(view.rows_memo_stats().misses, 1);
    assert_eq!(view.rows_memo_stats().hits, 1);

    view.set_query("c");
    let _ = view.rows();
    assert_eq!(view.rows_memo_stats().misses, 2);
}

#[test]
fn activate_row_notifies_sink_with_row_identifier() {
    let mut view = merchant_view();
    let mut selected = Vec::new();
    let mut sink = |kind: DatasetKind, id: RecordId| selected.push((kind, id));

    let id = view.activate_row(0, &mut sink).expect("first row");
    assert_eq!(id, RecordId(3));
    assert_eq!(selected, vec![(DatasetKind::Merchant, RecordId(3))]);
}

#[test]
fn activate_row_uses_visible_rows() {
    let mut view = merchant_view();
    view.set_query("h");
    let mut last = None;
    let mut sink = |_: DatasetKind, id: RecordId| last = Some(id);

    view.activate_row(0, &mut sink).expect("filtered row");
    assert_eq!(last, Some(RecordId(8)));
}

#[test]
fn activate_row_out_of_range_is_rejected() {
    let mut view = merchant_view();
    view.set_query("zzz");
    let mut fired = false;
    let mut sink = |_: DatasetKind, _: RecordId| fired = true;

    let err = view.activate_row(0, &mut sink).expect_err("no rows");
    assert!(matches!(err, ViewError::RowOutOfRange { index: 0, len: 0 }));
    assert!(!fired);
}

#[test]
fn duplicate_record_ids_are_rejected() {
    let record = Record::new(RecordId(1), "dup", Decimal::from(1), 1).expect("record");
    let err = RecordTableView::new(
        DatasetKind::Channel,
        vec![record.clone(), record],
        &ViewConfig::default(),
    )
    .expect_err("duplicate ids");
    assert!(matches!(err, ViewError::InvalidData(_)));
}

#[test]
fn unknown_record_lookup_fails() {
    let view = merchant_view();
    assert!(matches!(
        view.record(RecordId(99)),
        Err(ViewError::UnknownRecord { id: RecordId(99) })
    ));
    assert_eq!(view.record(RecordId(1)).expect("known").name, "商户A");
}

#[test]
fn attributed_shares_split_primary_and_secondary() {
    let view = merchant_view();
    let shares = view.attributed_shares(RecordId(1)).expect("shares");
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].name, "信用卡");
    assert_eq!(shares[0].amount, Decimal::from(60_000));
    assert_eq!(shares[0].count, 300);
    assert_eq!(shares[1].name, "微信支付");
    assert_eq!(shares[1].amount, Decimal::from(30_000));
    assert_eq!(shares[1].count, 150);
}

#[test]
fn search_field_can_target_primary_channel() {
    let config = ViewConfig::default().with_search_field(SearchField::PrimaryChannel);
    let mut view = RecordTableView::from_source(&SampleDataSource, DatasetKind::Merchant, &config)
        .expect("view");
    view.set_query("银联");
    let mut ids: Vec<u32> = view.rows().iter().map(|record| record.id.0).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![4, 8]);
}

#[test]
fn merchant_ranking_chart_shows_ten_leaders() {
    let mut view = merchant_view();
    let spec = view.ranking_chart().expect("ranking chart").clone();

    assert_eq!(spec.labels.len(), 10);
    assert_eq!(spec.labels[0], "商户C");
    assert_eq!(spec.labels[9], "商户B");

    let current = &spec.series[0];
    assert_eq!(current.role, SeriesRole::Current);
    assert_eq!(current.values[0], 120_000.0);
    let baseline = &spec.series[2];
    assert_eq!(baseline.role, SeriesRole::Baseline);
    assert!((baseline.values[0] - 114_000.0).abs() < 1e-6);

    let counts = &spec.series[1];
    assert_eq!(counts.values[0], 600.0);
    assert_eq!(counts.label, "交易数量");
}

#[test]
fn channel_ranking_chart_shows_five_leaders() {
    let mut view = RecordTableView::from_source(
        &SampleDataSource,
        DatasetKind::Channel,
        &ViewConfig::default(),
    )
    .expect("channel view");
    let spec = view.ranking_chart().expect("ranking chart");

    assert_eq!(
        spec.labels,
        vec!["信用卡", "移动支付", "微信支付", "支付宝", "银行转账"]
    );
}

#[test]
fn ranking_chart_ignores_table_query() {
    let mut view = merchant_view();
    view.set_query("商户A");
    let _ = view.rows();
    let spec = view.ranking_chart().expect("ranking chart");
    assert_eq!(spec.labels.len(), 10);
}

#[test]
fn custom_top_n_limits_ranking() {
    let config = ViewConfig::default().with_top_n(DatasetKind::Merchant, 3);
    let records = SampleDataSource
        .records(DatasetKind::Merchant)
        .expect("records");
    let mut view = RecordTableView::new(DatasetKind::Merchant, records, &config).expect("view");
    let spec = view.ranking_chart().expect("ranking chart");
    assert_eq!(spec.labels, vec!["商户C", "商户I", "商户E"]);
}

#[test]
fn empty_snapshot_renders_empty_table_and_chart() {
    let mut view =
        RecordTableView::new(DatasetKind::Merchant, Vec::new(), &ViewConfig::default())
            .expect("empty view");
    assert!(view.rows().is_empty());
    let spec = view.ranking_chart().expect("empty chart");
    assert!(spec.labels.is_empty());
    spec.validate().expect("valid empty chart");
}
