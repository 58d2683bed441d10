mod null_renderer;

pub use null_renderer::NullChartRenderer;

use crate::api::ChartSpec;
use crate::error::ViewResult;

/// Contract implemented by any chart-drawing backend.
///
/// Backends receive a fully prepared, renderer-agnostic `ChartSpec`; all pixel
/// output, colors and layout live on their side.
pub trait ChartRenderer {
    fn render(&mut self, spec: &ChartSpec) -> ViewResult<()>;
}
