//! Seeds and clears the restaurant reservation document store with synthetic data.

pub mod db_models;
pub mod logger;
pub mod services;
pub mod types;

pub use services::clearer::{ClearReport, CollectionClearer};
pub use services::db_utils::{bootstrap, Settings};
pub use services::generator::{DataGenerator, GeneratorConfig};
pub use services::locations::seed_locations;
pub use services::store::{DocumentRef, DocumentStore, MemoryStore};
pub use types::{SeedError, SeedResult};
