use thiserror::Error;

pub const RESTAURANTS_COLLECTION: &str = "restaurants";
pub const TABLES_COLLECTION: &str = "tables";
pub const LOCATIONS_COLLECTION: &str = "locations";

/// Environment key holding the document store connection URI.
pub const STORE_URI_KEY: &str = "REDIS_DATABASE_URI";

#[derive(Debug, Error)]
pub enum SeedError {
    /// The store connection source was never configured, so the handle is uninitialized.
    #[error("document store is not initialized: {0} is not set")]
    ConfigurationMissing(String),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("store operation failed: {0}")]
    StoreOperation(String),

    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    /// More unique names were requested than the pool holds.
    #[error("cannot allocate {requested} unique names from a pool of {available}")]
    AllocationExhausted { requested: usize, available: usize },

    #[error("page size must be greater than zero")]
    InvalidPageSize,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type SeedResult<T> = Result<T, SeedError>;
