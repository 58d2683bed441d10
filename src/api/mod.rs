//! View-level orchestration over the core algorithms.
//!
//! Each view owns its own state (query, sort, granularity, period) and
//! receives shared defaults through [`ViewConfig`]; nothing here is global.

mod breakdown_view;
mod captions;
mod chart_spec;
mod json_contract;
mod ranking_chart;
mod record_table_view;
mod source;
mod time_series_view;
mod view_config;
mod view_memo;

pub use breakdown_view::BreakdownView;
pub use captions::{SeriesCaptions, subject_title_prefix};
pub use chart_spec::{
    AxisId, AxisPosition, AxisSpec, ChartSeries, ChartSpec, ChartSpecBuilder, SeriesKind,
    SeriesRole, build_dual_axis_spec,
};
pub use json_contract::{CHART_SPEC_JSON_SCHEMA_V1, ChartSpecJsonContractV1};
pub use ranking_chart::RankingChart;
pub use record_table_view::RecordTableView;
pub use source::{BreakdownSource, RecordSource, SelectionSink};
pub use time_series_view::{TimeSeriesFrame, TimeSeriesView};
pub use view_config::ViewConfig;
pub use view_memo::MemoStats;
