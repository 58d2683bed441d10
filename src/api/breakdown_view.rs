use tracing::{debug, warn};

use crate::core::{BreakdownPeriod, BreakdownRow, SeriesSubject, breakdown_rows};
use crate::error::{ViewError, ViewResult};

use super::BreakdownSource;
use super::view_memo::{LastResultMemo, MemoStats};

/// Sub-entity breakdown table of a detail view with its own period selector.
///
/// The memo assumes the source serves one snapshot per period for the
/// lifetime of the view.
#[derive(Debug)]
pub struct BreakdownView {
    subject: SeriesSubject,
    period: BreakdownPeriod,
    rows: LastResultMemo<BreakdownPeriod, Vec<BreakdownRow>>,
}

impl BreakdownView {
    #[must_use]
    pub fn new(subject: SeriesSubject) -> Self {
        Self {
            subject,
            period: BreakdownPeriod::default(),
            rows: LastResultMemo::default(),
        }
    }

    #[must_use]
    pub fn with_period(mut self, period: BreakdownPeriod) -> Self {
        self.period = period;
        self
    }

    #[must_use]
    pub fn period(&self) -> BreakdownPeriod {
        self.period
    }

    /// Switches period; returns `true` when it changed.
    pub fn select_period(&mut self, period: BreakdownPeriod) -> bool {
        let changed = period != self.period;
        self.period = period;
        changed
    }

    pub fn rows(&mut self, source: &impl BreakdownSource) -> ViewResult<&[BreakdownRow]> {
        let subject = self.subject;
        let period = self.period;
        let rows = self.rows.get_or_try_insert_with(&period, || {
            let items = source.breakdown(subject, period)?;
            let rows = breakdown_rows(&items);
            if rows.iter().any(|row| !row.share.is_defined()) {
                warn!(
                    ?subject,
                    ?period,
                    "breakdown total is zero or unrepresentable; shares are undefined"
                );
            }
            debug!(?subject, ?period, rows = rows.len(), "recomputed breakdown rows");
            Ok::<_, ViewError>(rows)
        })?;
        Ok(rows.as_slice())
    }

    #[must_use]
    pub fn memo_stats(&self) -> MemoStats {
        self.rows.stats()
    }
}
