mod mock_adapters;

pub use mock_adapters::{MockCacheSource, MockPayloadResolver};
