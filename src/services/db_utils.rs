use std::env;

use config::{Config, Environment};
use serde::Deserialize;
use tracing::{info, warn};

use crate::services::redis_handling::{RedisStore, StoreHandle};
use crate::types::{SeedError, SeedResult, STORE_URI_KEY};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub page_size: usize,
    pub restaurant_count: usize,
    pub tables_per_restaurant: usize,
    #[serde(skip)]
    pub store_uri: Option<String>,
}

impl Settings {
    /// Defaults overridden by `SEED_*` variables (`SEED_PAGE_SIZE`, ...).
    pub fn load() -> SeedResult<Self> {
        let mut settings = Self::from_source(Environment::with_prefix("SEED").try_parsing(true))?;
        settings.store_uri = env::var(STORE_URI_KEY).ok().filter(|uri| !uri.trim().is_empty());

        Ok(settings)
    }

    fn from_source<S>(source: S) -> SeedResult<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings: Settings = Config::builder()
            .set_default("page_size", 50)?
            .set_default("restaurant_count", 100)?
            .set_default("tables_per_restaurant", 10)?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        if settings.page_size == 0 {
            return Err(SeedError::InvalidPageSize);
        }

        Ok(settings)
    }
}

/// Opens the store named by the settings. A missing connection source is not
/// fatal here: the handle comes back uninitialized and fails on first use.
pub fn init_store(settings: &Settings) -> SeedResult<StoreHandle> {
    match settings.store_uri.as_deref() {
        Some(uri) => {
            let store = RedisStore::connect(uri)?;
            info!("Connected to document store");
            Ok(StoreHandle::Connected(store))
        }
        None => {
            warn!("The {STORE_URI_KEY} environment variable is not set.");
            Ok(StoreHandle::Uninitialized)
        }
    }
}

/// Shared start-up for every entry point: env files, logging, settings, store.
pub fn bootstrap() -> SeedResult<(Settings, StoreHandle)> {
    dotenv::from_filename(".env.local").ok();
    dotenv::dotenv().ok();
    crate::logger::init_logger();

    let settings = Settings::load()?;
    let store = init_store(&settings)?;

    Ok((settings, store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_source(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Environment::with_prefix("SEED").try_parsing(true).source(Some(map))
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let settings = Settings::from_source(env_source(&[])).unwrap();
        assert_eq!(settings.page_size, 50);
        assert_eq!(settings.restaurant_count, 100);
        assert_eq!(settings.tables_per_restaurant, 10);
        assert!(settings.store_uri.is_none());
    }

    #[test]
    fn overrides_are_read_from_prefixed_vars() {
        let settings = Settings::from_source(env_source(&[("SEED_PAGE_SIZE", "20"), ("SEED_RESTAURANT_COUNT", "12")])).unwrap();
        assert_eq!(settings.page_size, 20);
        assert_eq!(settings.restaurant_count, 12);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = Settings::from_source(env_source(&[("SEED_PAGE_SIZE", "0")])).unwrap_err();
        assert!(matches!(err, SeedError::InvalidPageSize));
    }

    #[test]
    fn non_numeric_override_is_a_config_error() {
        let err = Settings::from_source(env_source(&[("SEED_PAGE_SIZE", "lots")])).unwrap_err();
        assert!(matches!(err, SeedError::Config(_)));
    }

    #[test]
    fn missing_uri_yields_uninitialized_handle() {
        let settings = Settings::from_source(env_source(&[])).unwrap();
        assert!(matches!(init_store(&settings), Ok(StoreHandle::Uninitialized)));
    }
}
