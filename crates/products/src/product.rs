use std::sync::Arc;

use serde::{Deserialize, Serialize};

use billforge_core::ValueObject;

/// Shared handle to a product.
///
/// Line items reference a product; cloning the handle never copies the
/// product itself.
pub type SharedProduct = Arc<Product>;

/// A catalog item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    description: String,
}

impl Product {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Wrap into a shared handle suitable for line items.
    pub fn shared(self) -> SharedProduct {
        Arc::new(self)
    }
}

impl ValueObject for Product {}
