use tracing::debug;

use crate::core::{DatasetKind, Record, RecordColumn, SeriesPair, decimal_to_f64, top_n};
use crate::error::ViewResult;

use super::{ChartSpec, SeriesCaptions, ViewConfig, build_dual_axis_spec};

/// Top-N ranking feeding the dual-axis comparison chart.
///
/// Bars carry each leader's total payments, lines its transaction count; the
/// baseline pair is both scaled by `baseline_factor`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingChart {
    kind: DatasetKind,
    metric: RecordColumn,
    top_n: usize,
    baseline_factor: f64,
    captions: SeriesCaptions,
}

impl RankingChart {
    pub fn new(kind: DatasetKind, config: &ViewConfig) -> ViewResult<Self> {
        config.validate()?;
        Ok(Self {
            kind,
            metric: config.ranking_metric,
            top_n: config.top_n(kind),
            baseline_factor: config.ranking_baseline_factor,
            captions: SeriesCaptions::ranking(),
        })
    }

    #[must_use]
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Leading records, descending by the ranking metric.
    pub fn leaders(&self, records: &[Record]) -> ViewResult<Vec<Record>> {
        let metric = self.metric;
        top_n(records, |record| metric.key(record), self.top_n)
    }

    pub fn build(&self, records: &[Record]) -> ViewResult<ChartSpec> {
        let leaders = self.leaders(records)?;
        let labels: Vec<String> = leaders.iter().map(|record| record.name.clone()).collect();
        let amounts = leaders
            .iter()
            .map(|record| decimal_to_f64(record.total_payments, "total payments"))
            .collect::<ViewResult<Vec<_>>>()?;
        let counts: Vec<f64> = leaders
            .iter()
            .map(|record| record.transaction_count as f64)
            .collect();

        let factor = self.baseline_factor;
        let scaled = |values: &[f64]| -> Vec<f64> {
            values.iter().map(|value| value * factor).collect()
        };
        let amount_pair = SeriesPair::new(labels.clone(), amounts.clone(), scaled(&amounts))?;
        let count_pair = SeriesPair::new(labels.clone(), counts.clone(), scaled(&counts))?;

        debug!(
            kind = ?self.kind,
            metric = ?self.metric,
            leaders = leaders.len(),
            "built ranking chart"
        );
        build_dual_axis_spec(&amount_pair, Some(&count_pair), &labels, &self.captions)
    }
}
