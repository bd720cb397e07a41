use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::{CatalogProduct, Farm, ProducerSummary};
use business::domain::shared::money::format_price;

use crate::api::money::to_amount;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProducerResponse {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    pub city: Option<String>,
    pub average_rating: Option<f64>,
}

impl From<ProducerSummary> for ProducerResponse {
    fn from(producer: ProducerSummary) -> Self {
        Self {
            id: producer.id.value(),
            user_id: producer.user_id.value(),
            name: producer.name,
            city: producer.city,
            average_rating: producer.average_rating,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CatalogProductResponse {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub price_label: String,
    pub stock: i64,
    pub in_stock: bool,
    pub category: String,
    pub unit: String,
    pub image: Option<String>,
}

impl From<CatalogProduct> for CatalogProductResponse {
    fn from(product: CatalogProduct) -> Self {
        Self {
            id: product.id.value(),
            in_stock: product.in_stock(),
            unit: product.display_unit().to_string(),
            price: to_amount(&product.price),
            price_label: format_price(&product.price),
            name: product.name,
            description: product.description,
            stock: product.stock,
            category: product.category,
            image: product.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct FarmResponse {
    pub producer: ProducerResponse,
    pub products: Vec<CatalogProductResponse>,
}

impl From<Farm> for FarmResponse {
    fn from(farm: Farm) -> Self {
        Self {
            producer: farm.producer.into(),
            products: farm.products.into_iter().map(Into::into).collect(),
        }
    }
}
