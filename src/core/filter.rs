/// Returns records whose selected text field contains `query`, ignoring case.
///
/// Matching lowercases both sides and checks substring containment; it is not
/// collation-aware. An empty query keeps every record in input order, and a
/// record whose field is absent only matches the empty query.
#[must_use]
pub fn filter_records<T, F>(records: &[T], query: &str, field: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Option<&str>,
{
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            field(*record)
                .unwrap_or_default()
                .to_lowercase()
                .contains(needle.as_str())
        })
        .cloned()
        .collect()
}
