use crate::session::ResolverSession;
use dnscache_view_application::ports::{CacheSnapshotSource, PayloadResolver};
use dnscache_view_domain::{CacheEntry, DomainError, RecordData};
use std::sync::Arc;

/// Stub Cache Source for hosts without a queryable resolver cache. Keeps
/// the workspace building everywhere; every fetch reports the platform
/// gap instead of guessing at one.
pub struct SystemCacheSource {
    _session: Arc<ResolverSession>,
}

impl SystemCacheSource {
    pub fn new(session: Arc<ResolverSession>) -> Self {
        Self { _session: session }
    }
}

impl CacheSnapshotSource for SystemCacheSource {
    fn fetch_snapshot(&self) -> Result<Vec<CacheEntry>, DomainError> {
        Err(DomainError::UnsupportedPlatform)
    }
}

/// Stub Resolver matching [`SystemCacheSource`].
pub struct SystemPayloadResolver {
    _session: Arc<ResolverSession>,
}

impl SystemPayloadResolver {
    pub fn new(session: Arc<ResolverSession>) -> Self {
        Self { _session: session }
    }
}

impl PayloadResolver for SystemPayloadResolver {
    fn resolve(&self, _name: &str, _record_type: u16) -> Result<RecordData, DomainError> {
        Err(DomainError::UnsupportedPlatform)
    }
}
