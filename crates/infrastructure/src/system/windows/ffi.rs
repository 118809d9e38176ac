//! Hand-declared bindings for the `dnsapi.dll` cache surface.
//!
//! `DnsGetCacheDataTable` and its entry layout are not in the public SDK
//! headers; the layout below matches what dnsapi has shipped since
//! Windows 2000.

#![allow(non_snake_case)]

use std::ffi::c_void;

pub const ERROR_SUCCESS: i32 = 0;
pub const ERROR_ACCESS_DENIED: i32 = 5;

/// `DnsQuery_W` option bits restricting a lookup to local data only.
pub const DNS_QUERY_NO_WIRE_QUERY: u32 = 0x0000_0010;
pub const DNS_QUERY_NO_HOSTS_FILE: u32 = 0x0000_0040;
pub const DNS_QUERY_NO_NETBT: u32 = 0x0000_0080;

/// `DNS_FREE_TYPE` values for `DnsFree`.
pub const DNS_FREE_FLAT: u32 = 0;
pub const DNS_FREE_RECORD_LIST: u32 = 1;

/// One node of the cache table returned by `DnsGetCacheDataTable`.
#[repr(C)]
pub struct DnsCacheEntry {
    pub next: *mut DnsCacheEntry,
    pub name: *mut u16,
    pub record_type: u16,
    pub data_length: u16,
    pub flags: u32,
    pub ttl: u32,
}

/// `DNS_RECORDW` header plus the payload variants the renderer decodes.
#[repr(C)]
pub struct DnsRecordW {
    pub next: *mut DnsRecordW,
    pub name: *mut u16,
    pub record_type: u16,
    pub data_length: u16,
    pub flags: u32,
    pub ttl: u32,
    pub reserved: u32,
    pub data: DnsRecordData,
}

#[repr(C)]
pub union DnsRecordData {
    pub a: u32,
    pub aaaa: [u8; 16],
    pub ptr_host: *mut u16,
}

#[link(name = "dnsapi")]
extern "system" {
    pub fn DnsGetCacheDataTable(table: *mut *mut DnsCacheEntry) -> i32;

    pub fn DnsQuery_W(
        name: *const u16,
        record_type: u16,
        options: u32,
        extra: *mut c_void,
        results: *mut *mut DnsRecordW,
        reserved: *mut c_void,
    ) -> i32;

    pub fn DnsFree(data: *mut c_void, free_type: u32);
}

#[link(name = "kernel32")]
extern "system" {
    pub fn LocalFree(mem: *mut c_void) -> *mut c_void;
}
