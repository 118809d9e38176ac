use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Longest host text the PTR renderer keeps. Matches the 255-octet upper
/// bound on a full domain name.
pub const MAX_HOST_TEXT: usize = 255;

/// Decoded payload of a single cache entry. Lives only while that entry's
/// row is rendered; never stored or shared across entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ptr(String),
    Other(u16),
}

impl RecordData {
    /// PTR payload, truncated to the renderer's fixed buffer on a char
    /// boundary.
    pub fn ptr(host: impl Into<String>) -> Self {
        let mut host = host.into();
        if host.len() > MAX_HOST_TEXT {
            let mut cut = MAX_HOST_TEXT;
            while !host.is_char_boundary(cut) {
                cut -= 1;
            }
            host.truncate(cut);
        }
        RecordData::Ptr(host)
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{addr}"),
            RecordData::Aaaa(addr) => write!(f, "{addr}"),
            RecordData::Ptr(host) => f.write_str(host),
            RecordData::Other(code) => write!(f, "[type {code}]"),
        }
    }
}
