/// Hit/miss counters of a view's recompute memo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
}

/// Remembers the result for the most recent key only.
///
/// Views re-derive from the full dataset whenever their parameters change;
/// this just skips the work when the parameters did not.
#[derive(Debug)]
pub(super) struct LastResultMemo<K, V> {
    entry: Option<(K, V)>,
    stats: MemoStats,
}

impl<K, V> Default for LastResultMemo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            stats: MemoStats::default(),
        }
    }
}

impl<K: PartialEq + Clone, V> LastResultMemo<K, V> {
    pub(super) fn get_or_try_insert_with<E, F>(&mut self, key: &K, compute: F) -> Result<&V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let entry = match self.entry.take() {
            Some((cached_key, value)) if cached_key == *key => {
                self.stats.hits = self.stats.hits.saturating_add(1);
                (cached_key, value)
            }
            _ => {
                self.stats.misses = self.stats.misses.saturating_add(1);
                (key.clone(), compute()?)
            }
        };
        let (_, value) = self.entry.insert(entry);
        Ok(&*value)
    }

    pub(super) fn get_or_insert_with<F>(&mut self, key: &K, compute: F) -> &V
    where
        F: FnOnce() -> V,
    {
        match self.get_or_try_insert_with(key, || Ok::<V, std::convert::Infallible>(compute())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    pub(super) fn stats(&self) -> MemoStats {
        self.stats
    }
}
