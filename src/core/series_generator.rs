use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::trace;

use super::granularity::{Granularity, SeriesPair, SeriesSubject, granularity_labels};
use super::series_tables::{
    LiteralTable, WEEKLY_POINTS, WeeklyBand, amount_table, count_table, weekly_amount_band,
    weekly_count_band,
};

/// Table-driven producer of current-vs-baseline series per granularity.
///
/// Every granularity except weekly resolves to a literal table and is fully
/// deterministic for a given subject. Weekly points are drawn independently
/// from the subject's [`WeeklyBand`] using the injected random source, so
/// tests can seed it and assert bounds.
#[derive(Debug, Clone)]
pub struct SeriesGenerator<R = StdRng> {
    rng: R,
}

impl SeriesGenerator<StdRng> {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> SeriesGenerator<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Amount series for `subject` at `granularity`.
    pub fn generate(&mut self, granularity: Granularity, subject: SeriesSubject) -> SeriesPair {
        let kind = subject.kind();
        let labels = granularity_labels(granularity, kind);
        match amount_table(granularity, kind) {
            Some(table) => pair_from_table(labels, table),
            None => {
                trace!(?subject, "synthesizing weekly amount series");
                self.synthesize(labels, &weekly_amount_band(kind))
            }
        }
    }

    /// Explicit count series, when the subject carries one.
    ///
    /// Returns `None` for merchants and channels; their counts are derived
    /// from amounts with an average ticket.
    pub fn generate_counts(
        &mut self,
        granularity: Granularity,
        subject: SeriesSubject,
    ) -> Option<SeriesPair> {
        let kind = subject.kind();
        let band = weekly_count_band(kind)?;
        let labels = granularity_labels(granularity, kind);
        match count_table(granularity, kind) {
            Some(table) => Some(pair_from_table(labels, table)),
            None => {
                trace!(?subject, "synthesizing weekly count series");
                Some(self.synthesize(labels, &band))
            }
        }
    }

    fn synthesize(&mut self, labels: Vec<String>, band: &WeeklyBand) -> SeriesPair {
        debug_assert_eq!(labels.len(), WEEKLY_POINTS);
        let mut current = Vec::with_capacity(labels.len());
        let mut baseline = Vec::with_capacity(labels.len());
        for _ in 0..labels.len() {
            current.push(self.rng.gen_range(band.current.clone()) as f64);
            baseline.push(self.rng.gen_range(band.baseline.clone()) as f64);
        }
        SeriesPair::from_checked_parts(labels, current, baseline)
    }
}

fn pair_from_table(labels: Vec<String>, table: LiteralTable) -> SeriesPair {
    SeriesPair::from_checked_parts(labels, table.current.to_vec(), table.baseline.to_vec())
}
