use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_catalog::{Product, ProductError};

/// A placed purchase of a single product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    /// When the order was placed, RFC 3339 on the wire
    pub order_datetime: DateTime<Utc>,
    /// Embedded by value, not referenced by id
    pub product: Product,
}

impl Order {
    pub fn new(id: impl Into<String>, order_datetime: DateTime<Utc>, product: Product) -> Self {
        Self {
            id: id.into(),
            order_datetime,
            product,
        }
    }

    /// Same order with markup removed from the embedded product
    pub fn sanitized(self) -> Self {
        Self {
            product: self.product.sanitized(),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), OrderError> {
        if self.id.trim().is_empty() {
            return Err(OrderError::MissingId);
        }

        self.product.validate().map_err(|source| OrderError::InvalidProduct {
            order_id: self.id.clone(),
            source,
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OrderError {
    #[error("Order id must not be empty")]
    MissingId,

    #[error("Order {order_id} embeds an invalid product: {source}")]
    InvalidProduct {
        order_id: String,
        #[source]
        source: ProductError,
    },
}
