pub mod breakdown;
pub mod derived;
pub mod filter;
pub mod granularity;
pub mod primitives;
pub mod ranking;
pub mod record;
pub mod series_generator;
pub mod series_tables;
pub mod sort;

pub use breakdown::{BreakdownItem, BreakdownPeriod, BreakdownRow, breakdown_rows};
pub use derived::{
    Amounted, AttributedShare, Percentage, attributed_shares, derive_count, derive_count_pair,
    proportion_of_total,
};
pub use filter::filter_records;
pub use granularity::{
    Granularity, SeriesPair, SeriesSubject, SubjectKind, granularity_labels,
};
pub use primitives::decimal_to_f64;
pub use ranking::top_n;
pub use record::{
    DatasetKind, Record, RecordColumn, RecordId, SearchField, SortKey, SubChannel,
};
pub use series_generator::SeriesGenerator;
pub use series_tables::{WEEKLY_POINTS, WeeklyBand, weekly_amount_band, weekly_count_band};
pub use sort::{SortDirection, SortState, sort_records};
