use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::SeriesPair;
use crate::error::{ViewError, ViewResult};

use super::captions::SeriesCaptions;

/// Logical value axis of a dual-axis chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisId {
    Amount,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub position: AxisPosition,
    pub title: String,
    /// Whether grid lines of this axis are drawn across the plot area.
    pub draw_grid_on_chart_area: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Bar,
    Line,
}

impl SeriesKind {
    /// Bars bind to the amount axis and lines to the count axis.
    #[must_use]
    pub fn axis(self) -> AxisId {
        match self {
            Self::Bar => AxisId::Amount,
            Self::Line => AxisId::Count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesRole {
    Current,
    Baseline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub kind: SeriesKind,
    pub axis: AxisId,
    pub role: SeriesRole,
    pub label: String,
    pub values: Vec<f64>,
}

/// Renderer-agnostic description of a dual-axis amount/count chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: Option<String>,
    pub labels: Vec<String>,
    pub axes: IndexMap<AxisId, AxisSpec>,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    pub fn series_for_axis(&self, axis: AxisId) -> impl Iterator<Item = &ChartSeries> {
        self.series.iter().filter(move |series| series.axis == axis)
    }

    /// Re-checks the cardinality and axis-binding invariants.
    ///
    /// Specs built through [`ChartSpecBuilder`] always pass; this guards
    /// specs that were deserialized or edited by hand.
    pub fn validate(&self) -> ViewResult<()> {
        for axis in [AxisId::Amount, AxisId::Count] {
            if !self.axes.contains_key(&axis) {
                return Err(ViewError::InvalidData(format!(
                    "chart spec is missing the {axis:?} axis"
                )));
            }
        }

        for series in &self.series {
            if series.axis != series.kind.axis() {
                return Err(ViewError::InvalidData(format!(
                    "series `{}` of kind {:?} must bind to the {:?} axis",
                    series.label,
                    series.kind,
                    series.kind.axis()
                )));
            }
            ensure_cardinality(&series.label, self.labels.len(), series.values.len())?;
        }

        Ok(())
    }
}

fn ensure_cardinality(series: &str, expected: usize, actual: usize) -> ViewResult<()> {
    if expected != actual {
        return Err(ViewError::SeriesLengthMismatch {
            series: series.to_owned(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Incremental [`ChartSpec`] assembly over a fixed category axis.
#[derive(Debug, Clone)]
pub struct ChartSpecBuilder {
    title: Option<String>,
    labels: Vec<String>,
    axes: IndexMap<AxisId, AxisSpec>,
    series: Vec<ChartSeries>,
}

impl ChartSpecBuilder {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        let mut axes = IndexMap::with_capacity(2);
        axes.insert(
            AxisId::Amount,
            AxisSpec {
                position: AxisPosition::Left,
                title: String::new(),
                draw_grid_on_chart_area: true,
            },
        );
        axes.insert(
            AxisId::Count,
            AxisSpec {
                position: AxisPosition::Right,
                title: String::new(),
                draw_grid_on_chart_area: false,
            },
        );

        Self {
            title: None,
            labels,
            axes,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_axis_titles(
        mut self,
        amount_title: impl Into<String>,
        count_title: impl Into<String>,
    ) -> Self {
        if let Some(axis) = self.axes.get_mut(&AxisId::Amount) {
            axis.title = amount_title.into();
        }
        if let Some(axis) = self.axes.get_mut(&AxisId::Count) {
            axis.title = count_title.into();
        }
        self
    }

    /// Adds a series; its axis follows from `kind`.
    pub fn push_series(
        mut self,
        kind: SeriesKind,
        role: SeriesRole,
        label: impl Into<String>,
        values: Vec<f64>,
    ) -> ViewResult<Self> {
        let label = label.into();
        ensure_cardinality(&label, self.labels.len(), values.len())?;
        self.series.push(ChartSeries {
            kind,
            axis: kind.axis(),
            role,
            label,
            values,
        });
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> ChartSpec {
        ChartSpec {
            title: self.title,
            labels: self.labels,
            axes: self.axes,
            series: self.series,
        }
    }
}

/// Builds the comparative dual-axis chart.
///
/// `primary` holds amounts and renders as bars; `secondary`, when present,
/// holds counts and renders as lines. Series are ordered current amount,
/// current count, baseline amount, baseline count.
pub fn build_dual_axis_spec(
    primary: &SeriesPair,
    secondary: Option<&SeriesPair>,
    labels: &[String],
    captions: &SeriesCaptions,
) -> ViewResult<ChartSpec> {
    ensure_cardinality("primary", labels.len(), primary.len())?;
    if let Some(secondary) = secondary {
        ensure_cardinality("secondary", labels.len(), secondary.len())?;
    }

    let mut builder = ChartSpecBuilder::new(labels.to_vec())
        .with_axis_titles(captions.amount_axis.clone(), captions.count_axis.clone())
        .push_series(
            SeriesKind::Bar,
            SeriesRole::Current,
            captions.current_amount.clone(),
            primary.current().to_vec(),
        )?;
    if let Some(secondary) = secondary {
        builder = builder.push_series(
            SeriesKind::Line,
            SeriesRole::Current,
            captions.current_count.clone(),
            secondary.current().to_vec(),
        )?;
    }
    builder = builder.push_series(
        SeriesKind::Bar,
        SeriesRole::Baseline,
        captions.baseline_amount.clone(),
        primary.baseline().to_vec(),
    )?;
    if let Some(secondary) = secondary {
        builder = builder.push_series(
            SeriesKind::Line,
            SeriesRole::Baseline,
            captions.baseline_count.clone(),
            secondary.baseline().to_vec(),
        )?;
    }

    Ok(builder.build())
}
