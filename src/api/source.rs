use crate::core::{BreakdownItem, BreakdownPeriod, DatasetKind, Record, RecordId, SeriesSubject};
use crate::error::ViewResult;

/// Collaborator supplying the dataset snapshot for a table view.
///
/// The engine never fetches data itself and treats what it receives as
/// read-only.
pub trait RecordSource {
    fn records(&self, kind: DatasetKind) -> ViewResult<Vec<Record>>;
}

/// Collaborator supplying the sub-entity breakdown of a detail view.
pub trait BreakdownSource {
    fn breakdown(
        &self,
        subject: SeriesSubject,
        period: BreakdownPeriod,
    ) -> ViewResult<Vec<BreakdownItem>>;
}

/// Navigation collaborator notified when a table row is activated.
pub trait SelectionSink {
    fn on_select(&mut self, kind: DatasetKind, id: RecordId);
}

impl<F> SelectionSink for F
where
    F: FnMut(DatasetKind, RecordId),
{
    fn on_select(&mut self, kind: DatasetKind, id: RecordId) {
        self(kind, id);
    }
}
