#![cfg(not(windows))]

use dnscache_view_application::ports::{CacheSnapshotSource, PayloadResolver};
use dnscache_view_domain::DomainError;
use dnscache_view_infrastructure::{ResolverSession, SystemCacheSource, SystemPayloadResolver};

#[test]
fn stub_snapshot_source_reports_platform_gap() {
    let session = ResolverSession::open().unwrap();
    let source = SystemCacheSource::new(session);

    assert_eq!(
        source.fetch_snapshot(),
        Err(DomainError::UnsupportedPlatform)
    );
}

#[test]
fn stub_resolver_reports_platform_gap() {
    let session = ResolverSession::open().unwrap();
    let resolver = SystemPayloadResolver::new(session);

    assert_eq!(
        resolver.resolve("example.com", 1),
        Err(DomainError::UnsupportedPlatform)
    );
}
