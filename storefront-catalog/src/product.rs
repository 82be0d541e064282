use serde::{Deserialize, Serialize};

use crate::sanitization::clean_all_html;

/// A sellable item in the storefront catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Same product with any markup removed from its name
    pub fn sanitized(self) -> Self {
        Self {
            name: clean_all_html(&self.name),
            ..self
        }
    }

    /// Check the record invariants: non-empty id and name, finite non-negative price
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.trim().is_empty() {
            return Err(ProductError::MissingId);
        }

        if self.name.trim().is_empty() {
            return Err(ProductError::MissingName(self.id.clone()));
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductError::InvalidPrice {
                id: self.id.clone(),
                price: self.price,
            });
        }

        Ok(())
    }
}

/// Product-related errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProductError {
    #[error("Product id must not be empty")]
    MissingId,

    #[error("Product {0} has an empty name")]
    MissingName(String),

    #[error("Product {id} has an invalid price: {price}")]
    InvalidPrice { id: String, price: f64 },
}
