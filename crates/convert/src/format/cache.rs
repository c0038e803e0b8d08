//! Single-slot formatter cache.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::debug;

/// Lock-free cache of the most recently built derived object.
///
/// Converters are shared process-wide while contexts vary per call site, so
/// anything derived from context parameters is cached against the parameters
/// that built it. The slot holds one entry: a load on the same key is a
/// cheap atomic read, anything else rebuilds and replaces the slot.
/// Concurrent first uses may each build their own entry; the race is benign
/// because every built entry is valid for its key and the slot only decides
/// who gets to be the cached one.
pub(crate) struct ReplaceCache<K, V> {
    slot: ArcSwapOption<(K, V)>,
}

impl<K, V> fmt::Debug for ReplaceCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplaceCache").finish_non_exhaustive()
    }
}

impl<K, V> ReplaceCache<K, V>
where
    K: PartialEq + fmt::Debug,
{
    pub(crate) const fn new() -> Self {
        Self { slot: ArcSwapOption::const_empty() }
    }

    /// The entry for `key`, building and storing it on a miss.
    pub(crate) fn get_or_build(&self, key: K, build: impl FnOnce(&K) -> V) -> Arc<(K, V)> {
        if let Some(entry) = self.slot.load_full() {
            if entry.0 == key {
                return entry;
            }
        }
        debug!(?key, "rebuilding cached formatter");
        let value = build(&key);
        let entry = Arc::new((key, value));
        self.slot.store(Some(Arc::clone(&entry)));
        entry
    }
}
