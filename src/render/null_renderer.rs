use crate::api::{AxisId, ChartSpec};
use crate::error::ViewResult;
use crate::render::ChartRenderer;

/// No-op renderer used by tests and headless hosts.
///
/// It still validates spec content so callers catch broken cardinality or
/// axis binding before a real backend is attached.
#[derive(Debug, Default)]
pub struct NullChartRenderer {
    pub render_count: usize,
    pub last_category_count: usize,
    pub last_amount_series_count: usize,
    pub last_count_series_count: usize,
    pub last_title: Option<String>,
}

impl ChartRenderer for NullChartRenderer {
    fn render(&mut self, spec: &ChartSpec) -> ViewResult<()> {
        spec.validate()?;
        self.render_count += 1;
        self.last_category_count = spec.labels.len();
        self.last_amount_series_count = spec.series_for_axis(AxisId::Amount).count();
        self.last_count_series_count = spec.series_for_axis(AxisId::Count).count();
        self.last_title = spec.title.clone();
        Ok(())
    }
}
