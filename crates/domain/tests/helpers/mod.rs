mod builders;

pub use builders::CacheEntryBuilder;
