//! Store factory for creating the task store from configuration.

use std::sync::Arc;

use anyhow::{anyhow, Result};

use super::{HttpTaskStore, TaskStore};
use crate::config::ApiConfig;

/// Create the task store described by the `[api]` configuration section.
///
/// # Errors
/// Returns error if the base URL is not an http(s) URL.
pub fn create_store(api: &ApiConfig) -> Result<Arc<dyn TaskStore>> {
    let base_url = api.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(anyhow!("Unsupported API base URL: {}", base_url));
    }

    log::info!("Using task API at {}", base_url);
    Ok(Arc::new(HttpTaskStore::new(base_url)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_store_checks_scheme() {
        let mut api = ApiConfig::default();
        let store = create_store(&api).unwrap();
        assert_eq!(store.endpoint(), "http://localhost:5000/api");

        api.base_url = "localhost:5000/api".to_string();
        assert!(create_store(&api).is_err());
    }
}
