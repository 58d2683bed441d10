//! payview: record view engine for payment dashboards.
//!
//! The crate turns merchant and payment-channel snapshots into what a
//! dashboard renders: searchable, sortable table rows, a top-N ranking chart
//! and current-vs-baseline time series at five granularities. Charts leave
//! the crate as renderer-agnostic [`api::ChartSpec`] values.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartSpec, RecordTableView, TimeSeriesView, ViewConfig};
pub use error::{ViewError, ViewResult};
