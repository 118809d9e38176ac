use super::ffi;
use crate::session::ResolverSession;
use crate::system::{list, wide};
use dnscache_view_application::ports::CacheSnapshotSource;
use dnscache_view_domain::{CacheEntry, DomainError};
use std::ffi::c_void;
use std::ptr;
use std::sync::Arc;
use tracing::debug;

/// Cache Source adapter over `DnsGetCacheDataTable`.
///
/// The OS hands back a singly linked, nul-terminated list it allocated;
/// every node is copied into an owned `CacheEntry` and released exactly
/// once, with the follow-on pointer captured before the release.
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
        let mut head: *mut ffi::DnsCacheEntry = ptr::null_mut();
        let status = unsafe { ffi::DnsGetCacheDataTable(&mut head) };
        match status {
            ffi::ERROR_SUCCESS => {}
            ffi::ERROR_ACCESS_DENIED => return Err(DomainError::AccessDenied),
            other => return Err(DomainError::SourceUnavailable(other as u32)),
        }

        let mut entries = Vec::new();
        unsafe {
            list::walk_links(
                head as *const ffi::DnsCacheEntry,
                |node| (*node).next as *const ffi::DnsCacheEntry,
                |node| {
                    let name = (*node).name;
                    entries.push(CacheEntry::new(
                        wide::string_from_wide(name),
                        (*node).record_type,
                        (*node).data_length,
                        (*node).flags,
                        (*node).ttl,
                    ));
                    // Node and name string are separate allocations; both
                    // are done with once the copy above exists.
                    if !name.is_null() {
                        ffi::DnsFree(name as *mut c_void, ffi::DNS_FREE_FLAT);
                    }
                    ffi::LocalFree(node as *mut c_void);
                    Ok(())
                },
            )?;
        }

        debug!(entries = entries.len(), "DNS cache table copied");
        Ok(entries)
    }
}
