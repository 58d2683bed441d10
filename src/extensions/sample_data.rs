//! Hand-authored demo datasets of the payment dashboard.

use rust_decimal::Decimal;

use crate::api::{BreakdownSource, RecordSource};
use crate::core::{
    BreakdownItem, BreakdownPeriod, DatasetKind, Record, RecordId, SeriesSubject, SubChannel,
};
use crate::error::ViewResult;

/// Static [`RecordSource`] and [`BreakdownSource`] backed by demo data.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDataSource;

type MerchantRow = (u32, &'static str, i64, u64, f64, &'static str, &'static str, f64);
type ChannelRow = (u32, &'static str, i64, u64, f64, f64);

const MERCHANTS: [MerchantRow; 10] = [
    (1, "商户A", 100_000, 500, 99.5, "信用卡", "微信支付", 5.2),
    (2, "商户B", 80_000, 400, 99.2, "支付宝", "银联", -2.1),
    (3, "商户C", 120_000, 600, 99.8, "微信支付", "信用卡", 6.1),
    (4, "商户D", 90_000, 450, 99.6, "银联", "支付宝", -1.5),
    (5, "商户E", 110_000, 550, 99.7, "微信支付", "信用卡", 5.8),
    (6, "商户F", 95_000, 475, 99.4, "支付宝", "微信支付", 0.3),
    (7, "商户G", 105_000, 525, 99.6, "信用卡", "银联", 5.6),
    (8, "商户H", 85_000, 425, 99.3, "银联", "支付宝", -0.9),
    (9, "商户I", 115_000, 575, 99.7, "微信支付", "信用卡", 5.9),
    (10, "商户J", 98_000, 490, 99.5, "支付宝", "微信支付", 3.2),
];

const CHANNELS: [ChannelRow; 5] = [
    (1, "信用卡", 250_000, 1_800, 99.8, 5.2),
    (2, "移动支付", 180_000, 2_200, 99.5, 7.8),
    (3, "银行转账", 120_000, 600, 99.9, -1.5),
    (4, "微信支付", 160_000, 2_000, 99.7, 6.3),
    (5, "支付宝", 140_000, 1_800, 99.6, 4.9),
];

const MERCHANT_CHANNEL_NAMES: [&str; 3] = ["支付宝", "微信支付", "银联"];

const CHANNEL_MERCHANTS: [(&str, i64, u64); 5] = [
    ("商户A", 150_000, 750),
    ("商户B", 100_000, 500),
    ("商户C", 80_000, 400),
    ("商户D", 70_000, 350),
    ("商户E", 60_000, 300),
];

impl SampleDataSource {
    fn merchants() -> ViewResult<Vec<Record>> {
        MERCHANTS
            .iter()
            .map(|&(id, name, total, count, success, primary, secondary, growth)| {
                Ok(
                    Record::new(RecordId(id), name, Decimal::from(total), count)?
                        .with_rates(success, growth)?
                        .with_sub_channel(SubChannel::named(primary))
                        .with_sub_channel(SubChannel::named(secondary)),
                )
            })
            .collect()
    }

    fn channels() -> ViewResult<Vec<Record>> {
        CHANNELS
            .iter()
            .map(|&(id, name, total, count, success, growth)| {
                Record::new(RecordId(id), name, Decimal::from(total), count)?
                    .with_rates(success, growth)
            })
            .collect()
    }

    /// Per-period amount/count of a merchant's payment channels.
    fn merchant_channels(period: BreakdownPeriod) -> Vec<BreakdownItem> {
        let figures: [(i64, u64); 3] = match period {
            BreakdownPeriod::Today => [(50_000, 250), (30_000, 150), (20_000, 100)],
            BreakdownPeriod::ThisWeek => [(350_000, 1_750), (210_000, 1_050), (140_000, 700)],
            BreakdownPeriod::ThisMonth => {
                [(1_500_000, 7_500), (900_000, 4_500), (600_000, 3_000)]
            }
            BreakdownPeriod::ThisYear => [
                (18_000_000, 90_000),
                (10_800_000, 54_000),
                (7_200_000, 36_000),
            ],
        };

        MERCHANT_CHANNEL_NAMES
            .iter()
            .zip(figures)
            .map(|(name, (amount, count))| BreakdownItem::new(*name, Decimal::from(amount), count))
            .collect()
    }

    fn channel_merchants() -> Vec<BreakdownItem> {
        CHANNEL_MERCHANTS
            .iter()
            .map(|&(name, amount, count)| BreakdownItem::new(name, Decimal::from(amount), count))
            .collect()
    }
}

impl RecordSource for SampleDataSource {
    fn records(&self, kind: DatasetKind) -> ViewResult<Vec<Record>> {
        match kind {
            DatasetKind::Merchant => Self::merchants(),
            DatasetKind::Channel => Self::channels(),
        }
    }
}

impl BreakdownSource for SampleDataSource {
    fn breakdown(
        &self,
        subject: SeriesSubject,
        period: BreakdownPeriod,
    ) -> ViewResult<Vec<BreakdownItem>> {
        Ok(match subject {
            SeriesSubject::Merchant(_) => Self::merchant_channels(period),
            // The demo channel detail only carries one merchant snapshot.
            SeriesSubject::Channel(_) => Self::channel_merchants(),
            SeriesSubject::Overview => Vec::new(),
        })
    }
}
