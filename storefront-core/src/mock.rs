use async_trait::async_trait;
use storefront_catalog::{find_mock_product, Product, MOCK_INVENTORY};
use storefront_order::{Order, MOCK_ORDERS};
use tracing::warn;

use crate::repository::{InventorySource, OrderSource, SourceError};

const MOCK_WARNING: &str = "Using mock data - you should not see this in production or there is an issue";

/// Serves the hard-coded fixtures; used in development runs
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl MockSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InventorySource for MockSource {
    async fn list_products(&self) -> Result<Vec<Product>, SourceError> {
        warn!("{}", MOCK_WARNING);
        Ok(MOCK_INVENTORY.clone())
    }

    async fn get_product(&self, id: &str) -> Result<Option<Product>, SourceError> {
        warn!("{}", MOCK_WARNING);
        Ok(find_mock_product(id).cloned())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[async_trait]
impl OrderSource for MockSource {
    async fn list_orders(&self) -> Result<Vec<Order>, SourceError> {
        warn!("{}", MOCK_WARNING);
        Ok(MOCK_ORDERS.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
