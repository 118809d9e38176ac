#![allow(dead_code)]

use dnscache_view_application::ports::{CacheSnapshotSource, PayloadResolver};
use dnscache_view_domain::{CacheEntry, DomainError, RecordData};
use std::collections::HashMap;
use std::sync::Mutex;

/// Scripted Cache Source: hands out a fixed snapshot or a fixed failure.
pub struct MockCacheSource {
    result: Result<Vec<CacheEntry>, DomainError>,
}

impl MockCacheSource {
    pub fn with_entries(entries: Vec<CacheEntry>) -> Self {
        Self {
            result: Ok(entries),
        }
    }

    pub fn with_error(error: DomainError) -> Self {
        Self { result: Err(error) }
    }
}

impl CacheSnapshotSource for MockCacheSource {
    fn fetch_snapshot(&self) -> Result<Vec<CacheEntry>, DomainError> {
        self.result.clone()
    }
}

/// Scripted Resolver: per-name responses, optional blanket failure, and a
/// call log so tests can assert when resolution was skipped.
pub struct MockPayloadResolver {
    responses: HashMap<String, RecordData>,
    fail_all: bool,
    calls: Mutex<Vec<(String, u16)>>,
}

impl MockPayloadResolver {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            fail_all: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::new()
        }
    }

    pub fn with_response(mut self, name: &str, data: RecordData) -> Self {
        self.responses.insert(name.to_string(), data);
        self
    }

    pub fn calls(&self) -> Vec<(String, u16)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockPayloadResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadResolver for MockPayloadResolver {
    fn resolve(&self, name: &str, record_type: u16) -> Result<RecordData, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), record_type));

        if self.fail_all {
            return Err(DomainError::PayloadUnavailable);
        }
        self.responses
            .get(name)
            .cloned()
            .ok_or(DomainError::PayloadUnavailable)
    }
}
