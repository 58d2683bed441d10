use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::core::{
    AttributedShare, DatasetKind, Record, RecordColumn, RecordId, SearchField, SortState,
    attributed_shares, filter_records, sort_records,
};
use crate::error::{ViewError, ViewResult};

use super::view_memo::{LastResultMemo, MemoStats};
use super::{ChartSpec, RankingChart, RecordSource, SelectionSink, ViewConfig};

#[derive(Debug, Clone, PartialEq)]
struct RowsKey {
    query: String,
    sort: SortState<RecordColumn>,
}

/// Searchable, sortable table over one dataset snapshot.
///
/// Rows are always re-derived from the full snapshot: filter by the current
/// query, then stable-sort by the current column. The last result is memoized
/// by `(query, sort)` so unrelated state changes do not redo the work.
#[derive(Debug)]
pub struct RecordTableView {
    kind: DatasetKind,
    records: Vec<Record>,
    query: String,
    sort: SortState<RecordColumn>,
    search_field: SearchField,
    attribution_fractions: Vec<Decimal>,
    rows: LastResultMemo<RowsKey, Vec<Record>>,
    ranking: RankingChart,
    ranking_spec: Option<ChartSpec>,
}

impl RecordTableView {
    pub fn new(kind: DatasetKind, records: Vec<Record>, config: &ViewConfig) -> ViewResult<Self> {
        config.validate()?;

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(ViewError::InvalidData(format!(
                    "duplicate record id {} in {kind:?} snapshot",
                    record.id
                )));
            }
        }

        debug!(?kind, record_count = records.len(), "create record table view");
        Ok(Self {
            kind,
            records,
            query: String::new(),
            sort: SortState::new(config.default_sort_column, config.default_sort_direction),
            search_field: config.search_field,
            attribution_fractions: config.attribution_fractions.clone(),
            rows: LastResultMemo::default(),
            ranking: RankingChart::new(kind, config)?,
            ranking_spec: None,
        })
    }

    pub fn from_source(
        source: &impl RecordSource,
        kind: DatasetKind,
        config: &ViewConfig,
    ) -> ViewResult<Self> {
        Self::new(kind, source.records(kind)?, config)
    }

    #[must_use]
    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// The unfiltered snapshot in source order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn sort_state(&self) -> SortState<RecordColumn> {
        self.sort
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        trace!(kind = ?self.kind, query = %self.query, "table query changed");
    }

    /// Handles a column header activation.
    pub fn sort_by(&mut self, column: RecordColumn) {
        self.sort.select(column);
        debug!(
            kind = ?self.kind,
            column = ?self.sort.column(),
            direction = ?self.sort.direction(),
            "table sort changed"
        );
    }

    /// Filtered and sorted rows for the current query and sort state.
    pub fn rows(&mut self) -> &[Record] {
        let key = RowsKey {
            query: self.query.clone(),
            sort: self.sort,
        };
        let kind = self.kind;
        let records = &self.records;
        let field = self.search_field;
        let sort = self.sort;

        self.rows.get_or_insert_with(&key, || {
            let filtered = filter_records(records, &key.query, |record| field.text(record));
            let sorted = sort_records(
                &filtered,
                |record| sort.column().key(record),
                sort.direction(),
            );
            debug!(
                ?kind,
                total = records.len(),
                visible = sorted.len(),
                "recomputed table rows"
            );
            sorted
        })
    }

    #[must_use]
    pub fn rows_memo_stats(&self) -> MemoStats {
        self.rows.stats()
    }

    /// Emits the identifier of the row at `index` to `sink`.
    pub fn activate_row(
        &mut self,
        index: usize,
        sink: &mut impl SelectionSink,
    ) -> ViewResult<RecordId> {
        let kind = self.kind;
        let rows = self.rows();
        let id = rows
            .get(index)
            .map(|record| record.id)
            .ok_or(ViewError::RowOutOfRange {
                index,
                len: rows.len(),
            })?;

        debug!(?kind, %id, "row activated");
        sink.on_select(kind, id);
        Ok(id)
    }

    pub fn record(&self, id: RecordId) -> ViewResult<&Record> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or(ViewError::UnknownRecord { id })
    }

    /// Primary/secondary sub-channel figures shown next to a row.
    pub fn attributed_shares(&self, id: RecordId) -> ViewResult<Vec<AttributedShare>> {
        let record = self.record(id)?;
        Ok(attributed_shares(record, &self.attribution_fractions))
    }

    /// Top-N comparison chart over the whole snapshot.
    ///
    /// Independent of the table's query and sort state.
    pub fn ranking_chart(&mut self) -> ViewResult<&ChartSpec> {
        let spec = match self.ranking_spec.take() {
            Some(spec) => spec,
            None => self.ranking.build(&self.records)?,
        };
        Ok(&*self.ranking_spec.insert(spec))
    }
}
