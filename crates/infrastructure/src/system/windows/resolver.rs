use super::ffi;
use crate::session::ResolverSession;
use crate::system::{decode, wide};
use dnscache_view_application::ports::PayloadResolver;
use dnscache_view_domain::{DomainError, RecordData, RecordType};
use std::ffi::c_void;
use std::ptr;
use std::sync::Arc;
use tracing::trace;

/// Option set that keeps `DnsQuery_W` on already-cached data: no wire
/// query, no hosts file, no NetBIOS fallback.
const CACHE_ONLY: u32 =
    ffi::DNS_QUERY_NO_WIRE_QUERY | ffi::DNS_QUERY_NO_HOSTS_FILE | ffi::DNS_QUERY_NO_NETBT;

/// Resolver adapter re-materializing a cached record's payload through a
/// cache-only `DnsQuery_W`.
pub struct SystemPayloadResolver {
    _session: Arc<ResolverSession>,
}

impl SystemPayloadResolver {
    pub fn new(session: Arc<ResolverSession>) -> Self {
        Self { _session: session }
    }
}

impl PayloadResolver for SystemPayloadResolver {
    fn resolve(&self, name: &str, record_type: u16) -> Result<RecordData, DomainError> {
        let wide_name: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();
        let mut results: *mut ffi::DnsRecordW = ptr::null_mut();

        let status = unsafe {
            ffi::DnsQuery_W(
                wide_name.as_ptr(),
                record_type,
                CACHE_ONLY,
                ptr::null_mut(),
                &mut results,
                ptr::null_mut(),
            )
        };
        if status != ffi::ERROR_SUCCESS || results.is_null() {
            trace!(name, record_type, status, "cache-only query returned nothing");
            return Err(DomainError::PayloadUnavailable);
        }

        // Only the first record is rendered; the rest of the list is
        // released untouched.
        let decoded = unsafe {
            let record = &*results;
            match RecordType::from_u16(record.record_type) {
                Some(RecordType::A) => RecordData::A(decode::ipv4_from_cache_dword(record.data.a)),
                Some(RecordType::AAAA) => {
                    RecordData::Aaaa(decode::ipv6_from_cache_octets(record.data.aaaa))
                }
                Some(RecordType::PTR) => {
                    RecordData::ptr(wide::string_from_wide(record.data.ptr_host))
                }
                None => RecordData::Other(record.record_type),
            }
        };
        unsafe { ffi::DnsFree(results as *mut c_void, ffi::DNS_FREE_RECORD_LIST) };

        Ok(decoded)
    }
}
