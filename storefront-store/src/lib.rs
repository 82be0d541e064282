pub mod app_config;
pub mod http_source;

use std::sync::Arc;

use storefront_core::{InventoryService, MockSource, OrderService, RunMode, SourceError};
use tracing::{info, warn};

pub use app_config::Config;
pub use http_source::HttpSource;

/// Services wired to the data source the run mode selects
#[derive(Clone)]
pub struct Sources {
    pub inventory: InventoryService,
    pub orders: OrderService,
}

impl Sources {
    pub fn mock() -> Self {
        let source = Arc::new(MockSource::new());
        Self {
            inventory: InventoryService::new(source.clone()),
            orders: OrderService::new(source),
        }
    }

    pub fn http(source: HttpSource) -> Self {
        let source = Arc::new(source);
        Self {
            inventory: InventoryService::new(source.clone()),
            orders: OrderService::new(source),
        }
    }

    /// Development runs use the mock fixtures, production runs the items API
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        match config.app.run_mode {
            RunMode::Development => {
                warn!("Running in development mode, serving mock inventory and orders");
                Ok(Self::mock())
            }
            RunMode::Production => {
                let base_url = config.inventory.api_base_url.as_deref().ok_or_else(|| {
                    SourceError::Configuration(
                        "inventory.api_base_url is required in production".to_string(),
                    )
                })?;
                let source = HttpSource::new(base_url, config.inventory.timeout())?;
                info!("Using items API at {}", source.base_url());
                Ok(Self::http(source))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::MOCK_INVENTORY;

    fn config(toml: &str) -> Config {
        Config::from_toml(toml).unwrap()
    }

    #[tokio::test]
    async fn test_development_uses_mock() {
        let sources = Sources::from_config(&config("[server]\nport = 3000\n")).unwrap();
        assert_eq!(sources.inventory.source_name(), "mock");
        assert_eq!(sources.inventory.get_all_products().await.unwrap(), *MOCK_INVENTORY);
    }

    #[test]
    fn test_production_requires_api_url() {
        let result = Sources::from_config(&config(
            "[app]\nrun_mode = \"production\"\n[server]\nport = 3000\n",
        ));
        assert!(matches!(result, Err(SourceError::Configuration(_))));
    }

    #[test]
    fn test_production_uses_http() {
        let sources = Sources::from_config(&config(
            "[app]\nrun_mode = \"production\"\n[server]\nport = 3000\n[inventory]\napi_base_url = \"http://items.test\"\n",
        ))
        .unwrap();
        assert_eq!(sources.inventory.source_name(), "http");
    }
}
