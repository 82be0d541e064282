use std::sync::Arc;

use storefront_catalog::Product;
use storefront_order::Order;
use tracing::debug;

use crate::repository::{InventorySource, OrderSource, SourceError};

/// Entry point for reading the product inventory
#[derive(Clone)]
pub struct InventoryService {
    source: Arc<dyn InventorySource>,
}

impl InventoryService {
    pub fn new(source: Arc<dyn InventorySource>) -> Self {
        Self { source }
    }

    /// Get all products from the configured source
    pub async fn get_all_products(&self) -> Result<Vec<Product>, SourceError> {
        debug!(source = self.source.name(), "listing products");
        self.source.list_products().await
    }

    pub async fn get_product(&self, id: &str) -> Result<Option<Product>, SourceError> {
        debug!(source = self.source.name(), id, "fetching product");
        self.source.get_product(id).await
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }
}

/// Entry point for reading placed orders
#[derive(Clone)]
pub struct OrderService {
    source: Arc<dyn OrderSource>,
}

impl OrderService {
    pub fn new(source: Arc<dyn OrderSource>) -> Self {
        Self { source }
    }

    pub async fn get_all_orders(&self) -> Result<Vec<Order>, SourceError> {
        debug!(source = self.source.name(), "listing orders");
        self.source.list_orders().await
    }
}
