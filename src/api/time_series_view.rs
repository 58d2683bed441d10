use std::collections::HashMap;
use std::collections::hash_map::Entry;

use rand::RngCore;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, trace};

use crate::core::{
    DatasetKind, Granularity, Record, SeriesGenerator, SeriesPair, SeriesSubject,
    decimal_to_f64, derive_count_pair,
};
use crate::error::ViewResult;

use super::view_memo::MemoStats;
use super::{ChartSpec, SeriesCaptions, ViewConfig, build_dual_axis_spec, subject_title_prefix};

/// Amount and count pairs of one granularity plus the chart built from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesFrame {
    pub granularity: Granularity,
    pub amount: SeriesPair,
    pub count: SeriesPair,
    pub spec: ChartSpec,
}

/// Comparative time-series chart of one subject with its own granularity
/// selector.
///
/// Frames are memoized per granularity for the lifetime of the view, so the
/// synthesized weekly series stays stable while the view is alive.
#[derive(Debug)]
pub struct TimeSeriesView<R = StdRng> {
    subject: SeriesSubject,
    display_name: Option<String>,
    granularity: Granularity,
    average_ticket: f64,
    generator: SeriesGenerator<R>,
    frames: HashMap<Granularity, TimeSeriesFrame>,
    stats: MemoStats,
}

impl TimeSeriesView<StdRng> {
    pub fn new(subject: SeriesSubject, config: &ViewConfig) -> ViewResult<Self> {
        Self::with_generator(subject, config, SeriesGenerator::from_entropy())
    }
}

impl<R: RngCore> TimeSeriesView<R> {
    /// Detail view of one table record, titled with its name.
    ///
    /// Counts are derived with the record's own average ticket; a record
    /// without transactions or revenue falls back to the configured one.
    pub fn for_record(
        kind: DatasetKind,
        record: &Record,
        config: &ViewConfig,
        generator: SeriesGenerator<R>,
    ) -> ViewResult<Self> {
        let subject = SeriesSubject::of(kind, record.id);
        let mut view =
            Self::with_generator(subject, config, generator)?.with_display_name(record.name.clone());
        if let Some(ticket) = record.average_ticket().filter(|ticket| !ticket.is_zero()) {
            view.average_ticket = decimal_to_f64(ticket, "average ticket")?;
        }
        Ok(view)
    }

    pub fn with_generator(
        subject: SeriesSubject,
        config: &ViewConfig,
        generator: SeriesGenerator<R>,
    ) -> ViewResult<Self> {
        config.validate()?;
        Ok(Self {
            subject,
            display_name: None,
            granularity: Granularity::default(),
            average_ticket: config.average_ticket,
            generator,
            frames: HashMap::new(),
            stats: MemoStats::default(),
        })
    }

    /// Name shown in the chart title, e.g. the merchant's display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    #[must_use]
    pub fn subject(&self) -> SeriesSubject {
        self.subject
    }

    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Divisor turning this view's amounts into transaction counts.
    #[must_use]
    pub fn average_ticket(&self) -> f64 {
        self.average_ticket
    }

    /// Switches granularity; returns `true` when it changed.
    pub fn select_granularity(&mut self, granularity: Granularity) -> bool {
        if granularity == self.granularity {
            return false;
        }
        debug!(
            subject = ?self.subject,
            from = ?self.granularity,
            to = ?granularity,
            "granularity changed"
        );
        self.granularity = granularity;
        true
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{}{}交易数据",
            subject_title_prefix(self.subject.kind(), self.display_name.as_deref()),
            self.granularity.caption()
        )
    }

    pub fn frame(&mut self) -> ViewResult<&TimeSeriesFrame> {
        let title = self.title();
        let granularity = self.granularity;
        let frame = match self.frames.entry(granularity) {
            Entry::Occupied(entry) => {
                self.stats.hits = self.stats.hits.saturating_add(1);
                trace!(subject = ?self.subject, ?granularity, "time-series frame memo hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses = self.stats.misses.saturating_add(1);
                let frame = build_frame(
                    &mut self.generator,
                    self.subject,
                    granularity,
                    self.average_ticket,
                    title,
                )?;
                debug!(
                    subject = ?self.subject,
                    ?granularity,
                    points = frame.amount.len(),
                    "built time-series frame"
                );
                entry.insert(frame)
            }
        };
        Ok(&*frame)
    }

    pub fn chart_spec(&mut self) -> ViewResult<&ChartSpec> {
        Ok(&self.frame()?.spec)
    }

    #[must_use]
    pub fn memo_stats(&self) -> MemoStats {
        self.stats
    }
}

fn build_frame<R: RngCore>(
    generator: &mut SeriesGenerator<R>,
    subject: SeriesSubject,
    granularity: Granularity,
    average_ticket: f64,
    title: String,
) -> ViewResult<TimeSeriesFrame> {
    let amount = generator.generate(granularity, subject);
    let count = match generator.generate_counts(granularity, subject) {
        Some(count) => count,
        None => derive_count_pair(&amount, average_ticket)?,
    };

    let captions = SeriesCaptions::time_series(subject.kind(), granularity);
    let mut spec = build_dual_axis_spec(&amount, Some(&count), amount.labels(), &captions)?;
    spec.title = Some(title);

    Ok(TimeSeriesFrame {
        granularity,
        amount,
        count,
        spec,
    })
}
