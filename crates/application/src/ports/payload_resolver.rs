use dnscache_view_domain::{DomainError, RecordData};

/// Port over the cache-only lookup used to re-materialize a cached
/// record's payload for display.
///
/// Implementations must restrict themselves to already-cached data: no
/// wire query, no hosts-file fallback, no NetBIOS fallback. When the
/// underlying facility returns several records, only the first is used.
pub trait PayloadResolver: Send + Sync {
    fn resolve(&self, name: &str, record_type: u16) -> Result<RecordData, DomainError>;
}
