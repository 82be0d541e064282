use async_trait::async_trait;
use storefront_catalog::{Product, ProductError};
use storefront_order::{Order, OrderError};

/// Errors raised by a data source while fetching records
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Items API returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Response from {url} exceeds {limit} bytes")]
    BodyTooLarge { url: String, limit: usize },

    #[error("Malformed response from {url}: {details}")]
    Malformed { url: String, details: String },

    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] ProductError),

    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] OrderError),

    #[error("Data source misconfigured: {0}")]
    Configuration(String),
}

/// Source of the product inventory
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// All products, in the order the source defines
    async fn list_products(&self) -> Result<Vec<Product>, SourceError>;

    async fn get_product(&self, id: &str) -> Result<Option<Product>, SourceError>;

    /// Short label used in logs
    fn name(&self) -> &'static str;
}

/// Source of placed orders
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn list_orders(&self) -> Result<Vec<Order>, SourceError>;

    fn name(&self) -> &'static str;
}
