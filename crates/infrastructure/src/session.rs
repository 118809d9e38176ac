use dnscache_view_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// RAII guard scoping the resolver subsystem to one run.
///
/// Both adapters hold a handle for as long as they live; the last drop
/// closes the session on every exit path, successful or not.
pub struct ResolverSession(());

impl ResolverSession {
    pub fn open() -> Result<Arc<Self>, DomainError> {
        // The cache API needs no process-wide initialization call; the
        // session object still pins adapter lifetimes to a single run.
        debug!("resolver session opened");
        Ok(Arc::new(Self(())))
    }
}

impl Drop for ResolverSession {
    fn drop(&mut self) {
        debug!("resolver session closed");
    }
}
