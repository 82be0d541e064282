use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use storefront_catalog::Product;
use storefront_core::{InventorySource, OrderSource, SourceError};
use storefront_order::Order;
use tracing::debug;

/// Upper bound on a response body read from the items API
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Client for the items API (`/api/items`, `/api/items/{id}`, `/api/orders`)
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: Url,
    max_body_bytes: usize,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let mut base_url = Url::parse(base_url).map_err(|e| {
            SourceError::Configuration(format!("invalid items API url {}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::Configuration(format!(
                "items API url {} cannot be a base",
                base_url
            )));
        }
        // Relative joins replace the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, SourceError> {
        self.base_url
            .join(path)
            .map_err(|e| SourceError::Configuration(format!("invalid endpoint {}: {}", path, e)))
    }

    fn item_endpoint(&self, id: &str) -> Result<Url, SourceError> {
        let mut url = self.endpoint("api/items")?;
        url.path_segments_mut()
            .map_err(|_| SourceError::Configuration(format!("cannot append item id to {}", self.base_url)))?
            .push(id);
        Ok(url)
    }

    async fn send(&self, url: &Url) -> Result<reqwest::Response, SourceError> {
        debug!(%url, "GET");
        self.client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SourceError::Network {
                url: url.to_string(),
                source: Box::new(e),
            })
    }

    async fn decode<T: DeserializeOwned>(&self, url: &Url, mut response: reqwest::Response) -> Result<T, SourceError> {
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let too_large = || SourceError::BodyTooLarge {
            url: url.to_string(),
            limit: self.max_body_bytes,
        };
        if response.content_length().is_some_and(|len| len > self.max_body_bytes as u64) {
            return Err(too_large());
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| SourceError::Network {
            url: url.to_string(),
            source: Box::new(e),
        })? {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body).map_err(|e| SourceError::Malformed {
            url: url.to_string(),
            details: e.to_string(),
        })
    }
}

#[async_trait]
impl InventorySource for HttpSource {
    async fn list_products(&self) -> Result<Vec<Product>, SourceError> {
        let url = self.endpoint("api/items")?;
        let response = self.send(&url).await?;
        let products: Vec<Product> = self.decode(&url, response).await?;

        products
            .into_iter()
            .map(|product| {
                let product = product.sanitized();
                product.validate()?;
                Ok::<_, SourceError>(product)
            })
            .collect()
    }

    async fn get_product(&self, id: &str) -> Result<Option<Product>, SourceError> {
        let url = self.item_endpoint(id)?;
        let response = self.send(&url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let product = self.decode::<Product>(&url, response).await?.sanitized();
        product.validate()?;
        Ok(Some(product))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[async_trait]
impl OrderSource for HttpSource {
    async fn list_orders(&self) -> Result<Vec<Order>, SourceError> {
        let url = self.endpoint("api/orders")?;
        let response = self.send(&url).await?;
        let orders: Vec<Order> = self.decode(&url, response).await?;

        orders
            .into_iter()
            .map(|order| {
                let order = order.sanitized();
                order.validate()?;
                Ok::<_, SourceError>(order)
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
