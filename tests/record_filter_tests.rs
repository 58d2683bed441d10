use payview::core::{Record, RecordId, SearchField, SubChannel, filter_records};
use rust_decimal::Decimal;

fn record(id: u32, name: &str) -> Record {
    Record::new(RecordId(id), name, Decimal::from(1_000), 10).expect("valid record")
}

fn names(records: &[Record]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

#[test]
fn filter_matches_latin_letter_case_insensitively() {
    let records = vec![record(1, "商户A"), record(2, "商户B")];

    let filtered = filter_records(&records, "a", |record| SearchField::Name.text(record));
    assert_eq!(names(&filtered), vec!["商户A"]);

    let upper = filter_records(&records, "A", |record| SearchField::Name.text(record));
    assert_eq!(filtered, upper);
}

#[test]
fn empty_query_keeps_every_record_in_input_order() {
    let records = vec![record(3, "Gamma"), record(1, "alpha"), record(2, "Beta")];

    let filtered = filter_records(&records, "", |record| SearchField::Name.text(record));
    assert_eq!(filtered, records);
}

#[test]
fn filter_matches_substrings_anywhere_in_the_name() {
    let records = vec![
        record(1, "Northwind Traders"),
        record(2, "Contoso"),
        record(3, "Tailwind Toys"),
    ];

    let filtered = filter_records(&records, "WIND", |record| SearchField::Name.text(record));
    assert_eq!(names(&filtered), vec!["Northwind Traders", "Tailwind Toys"]);
}

#[test]
fn absent_field_never_matches_a_non_empty_query() {
    let with_channel = record(1, "商户A").with_sub_channel(SubChannel::named("支付宝"));
    let without_channel = record(2, "商户B");
    let records = vec![with_channel, without_channel];

    let filtered = filter_records(&records, "支付", |record| {
        SearchField::PrimaryChannel.text(record)
    });
    assert_eq!(names(&filtered), vec!["商户A"]);

    let all = filter_records(&records, "", |record| SearchField::PrimaryChannel.text(record));
    assert_eq!(all.len(), 2);
}

#[test]
fn filter_on_empty_dataset_is_empty() {
    let records: Vec<Record> = Vec::new();
    let filtered = filter_records(&records, "a", |record| SearchField::Name.text(record));
    assert!(filtered.is_empty());
}

#[test]
fn filter_is_idempotent() {
    let records = vec![
        record(1, "Alpha"),
        record(2, "beta"),
        record(3, "Gamma"),
        record(4, "delta"),
    ];

    let once = filter_records(&records, "ta", |record| SearchField::Name.text(record));
    let twice = filter_records(&once, "ta", |record| SearchField::Name.text(record));
    assert_eq!(once, twice);
    assert_eq!(names(&once), vec!["beta", "delta"]);
}
