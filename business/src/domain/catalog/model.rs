use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::domain::shared::value_objects::{ProducerId, ProductId, UserId};

/// A producer as listed in the public catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProducerSummary {
    pub id: ProducerId,
    pub name: String,
    pub user_id: UserId,
    pub city: Option<String>,
    pub average_rating: Option<f64>,
}

/// A product offered on a producer's farm page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i64,
    pub category: String,
    pub unit: Option<String>,
    pub image: Option<String>,
}

impl CatalogProduct {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Display unit, `un` when the backend has none.
    pub fn display_unit(&self) -> &str {
        self.unit.as_deref().unwrap_or("un")
    }
}

/// Everything the farm page shows: the producer and its products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Farm {
    pub producer: ProducerSummary,
    pub products: Vec<CatalogProduct>,
}

impl Farm {
    pub fn product(&self, product_id: ProductId) -> Option<&CatalogProduct> {
        self.products.iter().find(|product| product.id == product_id)
    }
}
