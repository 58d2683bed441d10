use crate::error::{ViewError, ViewResult};

use super::sort::{SortDirection, ranked_indices};

/// Returns the leading `n` records ranked descending by `metric`.
///
/// Ties keep input order. `n` larger than the dataset returns every record.
pub fn top_n<T, K, F>(records: &[T], metric: F, n: usize) -> ViewResult<Vec<T>>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if n == 0 {
        return Err(ViewError::InvalidTopN { n });
    }

    Ok(ranked_indices(records, metric, SortDirection::Descending)
        .into_iter()
        .take(n)
        .map(|index| records[index].clone())
        .collect())
}
