use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Active sort column plus direction for one table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState<C> {
    column: C,
    direction: SortDirection,
}

impl<C: Copy + PartialEq> SortState<C> {
    #[must_use]
    pub fn new(column: C, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    #[must_use]
    pub fn column(&self) -> C {
        self.column
    }

    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Applies a user sort request.
    ///
    /// Re-selecting the active column flips the direction. Any other column
    /// becomes active and starts descending.
    pub fn select(&mut self, column: C) {
        if column == self.column {
            self.direction = self.direction.toggled();
        } else {
            self.column = column;
            self.direction = SortDirection::Descending;
        }
    }
}

/// Input indices ordered by `key` in `direction`.
///
/// The underlying sort is stable and the direction is folded into the
/// comparator, so equal keys keep input order for both directions.
pub(crate) fn ranked_indices<T, K, F>(records: &[T], key: F, direction: SortDirection) -> Vec<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut keyed: Vec<(K, usize)> = records
        .iter()
        .enumerate()
        .map(|(index, record)| (key(record), index))
        .collect();
    keyed.sort_by(|left, right| direction.apply(left.0.cmp(&right.0)));
    keyed.into_iter().map(|(_, index)| index).collect()
}

/// Returns a stably sorted copy of `records`.
#[must_use]
pub fn sort_records<T, K, F>(records: &[T], key: F, direction: SortDirection) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    ranked_indices(records, key, direction)
        .into_iter()
        .map(|index| records[index].clone())
        .collect()
}
