use bigdecimal::BigDecimal;
use num_traits::Signed;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::errors::ProducerError;
use crate::domain::shared::value_objects::{ProducerId, ProductId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProducerProfile {
    pub id: ProducerId,
    pub name: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub email: String,
    pub cpf_cnpj: String,
    pub address: Option<String>,
    pub average_rating: f64,
    pub total_ratings: u32,
}

/// The editable part of a producer profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), ProducerError> {
        if self.name.trim().is_empty() {
            return Err(ProducerError::NameEmpty);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum ProductStatus {
    Ativo,
    Inativo,
}

/// A product in the producer's own catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProducerProduct {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i64,
    pub category: String,
    pub status: ProductStatus,
    pub unit: Option<String>,
}

/// Create/edit form of a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i64,
    pub category: String,
    pub status: ProductStatus,
    pub unit: Option<String>,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<(), ProducerError> {
        if self.name.trim().is_empty() {
            return Err(ProducerError::NameEmpty);
        }
        if self.price.is_negative() {
            return Err(ProducerError::NegativePrice);
        }
        if self.stock < 0 {
            return Err(ProducerError::NegativeStock);
        }
        Ok(())
    }
}
