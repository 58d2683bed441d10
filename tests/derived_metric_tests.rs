use approx::assert_abs_diff_eq;
use payview::ViewError;
use payview::core::{
    Percentage, Record, RecordId, SeriesPair, SubChannel, attributed_shares, derive_count,
    derive_count_pair, proportion_of_total,
};
use rust_decimal::Decimal;

fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}

#[test]
fn derive_count_divides_by_average_ticket() {
    let counts = derive_count(&[5_000.0, 4_000.0], 200.0).expect("valid ticket");
    assert_eq!(counts, vec![25.0, 20.0]);
}

#[test]
fn derive_count_keeps_fractional_results() {
    let counts = derive_count(&[250.0, 0.0], 200.0).expect("valid ticket");
    assert_abs_diff_eq!(counts[0], 1.25);
    assert_abs_diff_eq!(counts[1], 0.0);
}

#[test]
fn derive_count_rejects_non_positive_ticket() {
    for ticket in [0.0, -200.0, f64::NAN, f64::INFINITY] {
        let err = derive_count(&[1.0], ticket).expect_err("invalid ticket");
        assert!(matches!(err, ViewError::InvalidData(_)));
    }
}

#[test]
fn derive_count_pair_keeps_labels() {
    let amounts = SeriesPair::new(
        vec!["a".to_owned(), "b".to_owned()],
        vec![400.0, 600.0],
        vec![200.0, 100.0],
    )
    .expect("valid pair");

    let counts = derive_count_pair(&amounts, 200.0).expect("valid ticket");
    assert_eq!(counts.labels(), amounts.labels());
    assert_eq!(counts.current(), &[2.0, 3.0]);
    assert_eq!(counts.baseline(), &[1.0, 0.5]);
}

#[test]
fn proportions_of_breakdown_total() {
    let shares = proportion_of_total(&[dec(50_000), dec(30_000), dec(20_000)]);
    assert_eq!(
        shares,
        vec![
            Percentage::Defined(Decimal::new(5000, 2)),
            Percentage::Defined(Decimal::new(3000, 2)),
            Percentage::Defined(Decimal::new(2000, 2)),
        ]
    );
    assert_abs_diff_eq!(shares[0].to_f64(), 50.0, epsilon = 1e-9);
}

#[test]
fn proportions_round_half_away_from_zero_to_two_decimals() {
    let shares = proportion_of_total(&[dec(1), dec(2)]);
    assert_eq!(shares[0].value(), Some(Decimal::new(3333, 2)));
    assert_eq!(shares[1].value(), Some(Decimal::new(6667, 2)));

    let shares = proportion_of_total(&[dec(1), dec(7)]);
    assert_eq!(shares[0].value(), Some(Decimal::new(1250, 2)));
    assert_eq!(shares[1].value(), Some(Decimal::new(8750, 2)));

    let shares = proportion_of_total(&[Decimal::new(1, 4), dec(1)]);
    assert_eq!(shares[0].value(), Some(Decimal::new(1, 2)));
}

#[test]
fn zero_total_yields_undefined_shares() {
    let shares = proportion_of_total(&[Decimal::ZERO, Decimal::ZERO]);
    assert_eq!(shares, vec![Percentage::Undefined, Percentage::Undefined]);
    assert!(shares[0].to_f64().is_nan());
    assert!(!shares[0].is_defined());
}

#[test]
fn overflowing_total_yields_undefined_shares() {
    let records = vec![
        Record::new(RecordId(1), "a", Decimal::MAX, 1).expect("record"),
        Record::new(RecordId(2), "b", Decimal::MAX, 1).expect("record"),
    ];
    let shares = proportion_of_total(&records);
    assert_eq!(shares, vec![Percentage::Undefined, Percentage::Undefined]);
}

#[test]
fn large_amounts_keep_defined_shares() {
    let large = Decimal::MAX / Decimal::TEN;
    let shares = proportion_of_total(&[large, Decimal::ONE]);
    assert_eq!(
        shares,
        vec![
            Percentage::Defined(Decimal::ONE_HUNDRED),
            Percentage::Defined(Decimal::ZERO),
        ]
    );
}

#[test]
fn empty_input_has_no_shares() {
    let shares = proportion_of_total::<Decimal>(&[]);
    assert!(shares.is_empty());
}

#[test]
fn records_share_their_total_payments() {
    let records = vec![
        Record::new(RecordId(1), "a", dec(300), 1).expect("record"),
        Record::new(RecordId(2), "b", dec(100), 1).expect("record"),
    ];
    let shares = proportion_of_total(&records);
    assert_eq!(shares[0].value(), Some(dec(75)));
    assert_eq!(shares[1].value(), Some(dec(25)));
}

fn merchant_a() -> Record {
    Record::new(RecordId(1), "商户A", dec(100_000), 500)
        .expect("record")
        .with_sub_channel(SubChannel::named("信用卡"))
        .with_sub_channel(SubChannel::named("微信支付"))
}

#[test]
fn average_ticket_divides_total_by_count() {
    assert_eq!(merchant_a().average_ticket(), Some(dec(200)));

    let idle = Record::new(RecordId(2), "idle", dec(500), 0).expect("record");
    assert_eq!(idle.average_ticket(), None);
}

#[test]
fn attribution_applies_positional_fractions() {
    let fractions = [Decimal::new(6, 1), Decimal::new(3, 1)];
    let shares = attributed_shares(&merchant_a(), &fractions);

    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].name, "信用卡");
    assert_eq!(shares[0].amount, dec(60_000));
    assert_eq!(shares[0].count, 300);
    assert!(shares[0].estimated);
    assert_eq!(shares[1].name, "微信支付");
    assert_eq!(shares[1].amount, dec(30_000));
    assert_eq!(shares[1].count, 150);
}

#[test]
fn attribution_prefers_real_figures() {
    let record = Record::new(RecordId(1), "m", dec(1_000), 10)
        .expect("record")
        .with_sub_channel(SubChannel::named("real").with_figures(dec(123), 4))
        .with_sub_channel(SubChannel::named("estimated"));

    let shares = attributed_shares(&record, &[Decimal::new(6, 1), Decimal::new(3, 1)]);
    assert_eq!(shares[0].amount, dec(123));
    assert_eq!(shares[0].count, 4);
    assert!(!shares[0].estimated);
    assert_eq!(shares[1].amount, dec(300));
    assert_eq!(shares[1].count, 3);
}

#[test]
fn attribution_rounds_counts_and_skips_unfractioned_channels() {
    let record = Record::new(RecordId(1), "m", dec(10), 5)
        .expect("record")
        .with_sub_channel(SubChannel::named("first"))
        .with_sub_channel(SubChannel::named("second"))
        .with_sub_channel(SubChannel::named("third"));

    let shares = attributed_shares(&record, &[Decimal::new(5, 1), Decimal::new(3, 1)]);
    assert_eq!(shares.len(), 2);
    // 5 * 0.5 = 2.5 rounds away from zero.
    assert_eq!(shares[0].count, 3);
    assert_eq!(shares[1].count, 2);
}
