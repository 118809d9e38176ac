#![allow(dead_code)]
use dnscache_view_domain::CacheEntry;

pub struct CacheEntryBuilder {
    name: String,
    record_type: u16,
    data_length: u16,
    flags: u32,
    ttl: u32,
}

impl CacheEntryBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            record_type: 1,
            data_length: 4,
            flags: 0,
            ttl: 120,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: u16) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn data_length(mut self, data_length: u16) -> Self {
        self.data_length = data_length;
        self
    }

    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> CacheEntry {
        CacheEntry::new(
            self.name,
            self.record_type,
            self.data_length,
            self.flags,
            self.ttl,
        )
    }
}

impl Default for CacheEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
