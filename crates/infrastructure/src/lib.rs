//! dnscache-view Infrastructure Layer: OS-facing adapters.
pub mod session;
pub mod system;

pub use session::ResolverSession;
pub use system::{SystemCacheSource, SystemPayloadResolver};
