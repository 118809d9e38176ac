use dnscache_view_domain::{CacheEntry, DomainError};

/// Port over the OS facility that produces one full resolver-cache
/// snapshot per run.
///
/// Entries come back in the order the cache reported them; that order is
/// the display order. Implementations must not mutate the cache.
pub trait CacheSnapshotSource: Send + Sync {
    fn fetch_snapshot(&self) -> Result<Vec<CacheEntry>, DomainError>;
}
