pub mod decode;
pub mod list;
pub mod wide;

#[cfg(windows)]
pub mod windows;
#[cfg(windows)]
pub use windows::{SystemCacheSource, SystemPayloadResolver};

#[cfg(not(windows))]
pub mod unsupported;
#[cfg(not(windows))]
pub use unsupported::{SystemCacheSource, SystemPayloadResolver};
