//! Hand-authored value tables and weekly synthesis bands per subject kind.

use std::ops::Range;

use super::granularity::{Granularity, SubjectKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LiteralTable {
    pub current: &'static [f64],
    pub baseline: &'static [f64],
}

/// Half-open uniform ranges weekly points are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyBand {
    pub current: Range<u64>,
    pub baseline: Range<u64>,
}

pub const WEEKLY_POINTS: usize = 52;

#[must_use]
pub fn weekly_amount_band(subject: SubjectKind) -> WeeklyBand {
    match subject {
        SubjectKind::Overview => WeeklyBand {
            current: 5_000_000..15_000_000,
            baseline: 4_500_000..13_500_000,
        },
        SubjectKind::Merchant => WeeklyBand {
            current: 300_000..800_000,
            baseline: 280_000..730_000,
        },
        SubjectKind::Channel => WeeklyBand {
            current: 1_500_000..4_000_000,
            baseline: 1_350_000..3_600_000,
        },
    }
}

/// Weekly count band; only the overview carries explicit counts.
#[must_use]
pub fn weekly_count_band(subject: SubjectKind) -> Option<WeeklyBand> {
    match subject {
        SubjectKind::Overview => Some(WeeklyBand {
            current: 20_000..70_000,
            baseline: 18_000..63_000,
        }),
        SubjectKind::Merchant | SubjectKind::Channel => None,
    }
}

pub(crate) fn amount_table(granularity: Granularity, subject: SubjectKind) -> Option<LiteralTable> {
    let table = match (subject, granularity) {
        (_, Granularity::Weekly) => return None,

        (SubjectKind::Overview, Granularity::Hourly) => LiteralTable {
            current: &[
                65_000.0, 59_000.0, 80_000.0, 81_000.0, 56_000.0, 55_000.0, 40_000.0, 65_000.0,
                59_000.0, 80_000.0, 81_000.0, 56_000.0,
            ],
            baseline: &[
                62_000.0, 57_000.0, 75_000.0, 78_000.0, 54_000.0, 53_000.0, 38_000.0, 62_000.0,
                57_000.0, 75_000.0, 78_000.0, 54_000.0,
            ],
        },
        (SubjectKind::Overview, Granularity::Daily) => LiteralTable {
            current: &[
                1_200_000.0,
                1_500_000.0,
                1_400_000.0,
                1_600_000.0,
                1_300_000.0,
                1_700_000.0,
                1_100_000.0,
            ],
            baseline: &[
                1_150_000.0,
                1_450_000.0,
                1_350_000.0,
                1_550_000.0,
                1_250_000.0,
                1_650_000.0,
                1_050_000.0,
            ],
        },
        (SubjectKind::Overview, Granularity::Monthly) => LiteralTable {
            current: &[
                30_000_000.0,
                28_000_000.0,
                35_000_000.0,
                32_000_000.0,
                40_000_000.0,
                38_000_000.0,
                42_000_000.0,
                45_000_000.0,
                41_000_000.0,
                38_000_000.0,
                43_000_000.0,
                48_000_000.0,
            ],
            baseline: &[
                28_000_000.0,
                26_000_000.0,
                33_000_000.0,
                30_000_000.0,
                38_000_000.0,
                36_000_000.0,
                40_000_000.0,
                43_000_000.0,
                39_000_000.0,
                36_000_000.0,
                41_000_000.0,
                46_000_000.0,
            ],
        },
        // Synthetic: overview yearly history has no recorded baseline, so both
        // the amount and count baselines are authored at 95% of each year.
        (SubjectKind::Overview, Granularity::Yearly) => LiteralTable {
            current: &[
                300_000_000.0,
                350_000_000.0,
                400_000_000.0,
                380_000_000.0,
                450_000_000.0,
                500_000_000.0,
                550_000_000.0,
            ],
            baseline: &[
                285_000_000.0,
                332_500_000.0,
                380_000_000.0,
                361_000_000.0,
                427_500_000.0,
                475_000_000.0,
                522_500_000.0,
            ],
        },

        (SubjectKind::Merchant, Granularity::Hourly) => LiteralTable {
            current: &[
                5_000.0, 4_000.0, 6_000.0, 7_000.0, 5_500.0, 4_800.0, 3_000.0, 5_000.0, 4_000.0,
                6_000.0, 7_000.0, 5_500.0,
            ],
            baseline: &[
                4_800.0, 3_800.0, 5_700.0, 6_700.0, 5_200.0, 4_500.0, 2_800.0, 4_800.0, 3_800.0,
                5_700.0, 6_700.0, 5_200.0,
            ],
        },
        (SubjectKind::Merchant, Granularity::Daily) => LiteralTable {
            current: &[
                80_000.0, 95_000.0, 88_000.0, 102_000.0, 85_000.0, 110_000.0, 75_000.0,
            ],
            baseline: &[
                76_000.0, 90_000.0, 84_000.0, 97_000.0, 81_000.0, 105_000.0, 71_000.0,
            ],
        },
        (SubjectKind::Merchant, Granularity::Monthly) => LiteralTable {
            current: &[
                1_500_000.0,
                1_400_000.0,
                1_600_000.0,
                1_550_000.0,
                1_700_000.0,
                1_650_000.0,
                1_800_000.0,
                1_750_000.0,
                1_900_000.0,
                1_850_000.0,
                2_000_000.0,
                1_950_000.0,
            ],
            baseline: &[
                1_450_000.0,
                1_350_000.0,
                1_550_000.0,
                1_500_000.0,
                1_650_000.0,
                1_600_000.0,
                1_750_000.0,
                1_700_000.0,
                1_850_000.0,
                1_800_000.0,
                1_950_000.0,
                1_900_000.0,
            ],
        },
        (SubjectKind::Merchant, Granularity::Yearly) => LiteralTable {
            current: &[
                15_000_000.0,
                14_000_000.0,
                16_000_000.0,
                18_000_000.0,
                20_000_000.0,
            ],
            baseline: &[
                14_500_000.0,
                13_500_000.0,
                15_500_000.0,
                17_500_000.0,
                19_500_000.0,
            ],
        },

        (SubjectKind::Channel, Granularity::Hourly) => LiteralTable {
            current: &[
                25_000.0, 20_000.0, 30_000.0, 35_000.0, 27_500.0, 24_000.0, 15_000.0, 25_000.0,
                20_000.0, 30_000.0, 35_000.0, 27_500.0,
            ],
            baseline: &[
                24_000.0, 19_000.0, 28_500.0, 33_500.0, 26_000.0, 22_500.0, 14_000.0, 24_000.0,
                19_000.0, 28_500.0, 33_500.0, 26_000.0,
            ],
        },
        (SubjectKind::Channel, Granularity::Daily) => LiteralTable {
            current: &[
                400_000.0, 475_000.0, 440_000.0, 510_000.0, 425_000.0, 550_000.0, 375_000.0,
            ],
            baseline: &[
                380_000.0, 450_000.0, 420_000.0, 485_000.0, 405_000.0, 525_000.0, 355_000.0,
            ],
        },
        (SubjectKind::Channel, Granularity::Monthly) => LiteralTable {
            current: &[
                7_500_000.0,
                7_000_000.0,
                8_000_000.0,
                7_750_000.0,
                8_500_000.0,
                8_250_000.0,
                9_000_000.0,
                8_750_000.0,
                9_500_000.0,
                9_250_000.0,
                10_000_000.0,
                9_750_000.0,
            ],
            baseline: &[
                7_250_000.0,
                6_750_000.0,
                7_750_000.0,
                7_500_000.0,
                8_250_000.0,
                8_000_000.0,
                8_750_000.0,
                8_500_000.0,
                9_250_000.0,
                9_000_000.0,
                9_750_000.0,
                9_500_000.0,
            ],
        },
        (SubjectKind::Channel, Granularity::Yearly) => LiteralTable {
            current: &[
                75_000_000.0,
                70_000_000.0,
                80_000_000.0,
                90_000_000.0,
                100_000_000.0,
            ],
            baseline: &[
                72_500_000.0,
                67_500_000.0,
                77_500_000.0,
                87_500_000.0,
                97_500_000.0,
            ],
        },
    };

    Some(table)
}

/// Explicit transaction-count tables. Only the overview has them; detail
/// subjects derive counts from amounts.
pub(crate) fn count_table(granularity: Granularity, subject: SubjectKind) -> Option<LiteralTable> {
    if subject != SubjectKind::Overview {
        return None;
    }

    let table = match granularity {
        Granularity::Weekly => return None,
        Granularity::Hourly => LiteralTable {
            current: &[
                120.0, 110.0, 150.0, 155.0, 100.0, 95.0, 80.0, 120.0, 110.0, 150.0, 155.0, 100.0,
            ],
            baseline: &[
                115.0, 105.0, 140.0, 145.0, 95.0, 90.0, 75.0, 115.0, 105.0, 140.0, 145.0, 95.0,
            ],
        },
        Granularity::Daily => LiteralTable {
            current: &[5_000.0, 6_200.0, 5_800.0, 6_500.0, 5_500.0, 7_000.0, 4_800.0],
            baseline: &[4_800.0, 6_000.0, 5_600.0, 6_300.0, 5_300.0, 6_800.0, 4_600.0],
        },
        Granularity::Monthly => LiteralTable {
            current: &[
                150_000.0, 140_000.0, 170_000.0, 160_000.0, 200_000.0, 190_000.0, 210_000.0,
                220_000.0, 205_000.0, 190_000.0, 215_000.0, 240_000.0,
            ],
            baseline: &[
                140_000.0, 130_000.0, 160_000.0, 150_000.0, 190_000.0, 180_000.0, 200_000.0,
                210_000.0, 195_000.0, 180_000.0, 205_000.0, 230_000.0,
            ],
        },
        Granularity::Yearly => LiteralTable {
            current: &[
                1_500_000.0,
                1_750_000.0,
                2_000_000.0,
                1_900_000.0,
                2_250_000.0,
                2_500_000.0,
                2_750_000.0,
            ],
            baseline: &[
                1_425_000.0,
                1_662_500.0,
                1_900_000.0,
                1_805_000.0,
                2_137_500.0,
                2_375_000.0,
                2_612_500.0,
            ],
        },
    };

    Some(table)
}
