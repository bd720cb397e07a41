use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::producer::dashboard::{Dashboard, SalesPoint};
use business::domain::producer::model::{
    ProducerProduct, ProducerProfile, ProductDraft, ProductStatus, ProfileUpdate,
};
use business::domain::shared::money::format_price;

use crate::api::money::{parse_amount, to_amount};
use crate::api::orders::dto::OrderResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SalesPointResponse {
    /// Weekday abbreviation, e.g. "Seg".
    pub label: String,
    pub total: String,
}

impl From<SalesPoint> for SalesPointResponse {
    fn from(point: SalesPoint) -> Self {
        Self {
            label: point.label.to_string(),
            total: to_amount(&point.total),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DashboardResponse {
    pub monthly_revenue: String,
    pub monthly_revenue_label: String,
    pub new_orders_this_week: u64,
    pub active_products: u64,
    pub average_rating: Option<f64>,
    /// One decimal, or "N/A" without ratings.
    pub average_rating_label: String,
    /// Delivered sales of the last seven days, oldest first.
    pub sales_last_week: Vec<SalesPointResponse>,
    pub recent_orders: Vec<OrderResponse>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            average_rating_label: dashboard.average_rating_label(),
            monthly_revenue: to_amount(&dashboard.monthly_revenue),
            monthly_revenue_label: format_price(&dashboard.monthly_revenue),
            new_orders_this_week: dashboard.new_orders_this_week as u64,
            active_products: dashboard.active_products as u64,
            average_rating: dashboard.average_rating,
            sales_last_week: dashboard
                .sales_last_week
                .into_iter()
                .map(Into::into)
                .collect(),
            recent_orders: dashboard
                .recent_orders
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProfileResponse {
    pub id: u64,
    pub name: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub email: String,
    pub cpf_cnpj: String,
    pub address: Option<String>,
    pub average_rating: f64,
    pub total_ratings: u32,
}

impl From<ProducerProfile> for ProfileResponse {
    fn from(profile: ProducerProfile) -> Self {
        Self {
            id: profile.id.value(),
            name: profile.name,
            phone: profile.phone,
            city: profile.city,
            email: profile.email,
            cpf_cnpj: profile.cpf_cnpj,
            address: profile.address,
            average_rating: profile.average_rating,
            total_ratings: profile.total_ratings,
        }
    }
}

/// Store profile form. Email and CPF/CNPJ cannot be changed here.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProfileUpdateRequest {
    pub name: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
}

impl From<ProfileUpdateRequest> for ProfileUpdate {
    fn from(request: ProfileUpdateRequest) -> Self {
        Self {
            name: request.name,
            phone: request.phone,
            city: request.city,
            address: request.address,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ProductStatusDto {
    #[oai(rename = "Ativo")]
    Ativo,
    #[oai(rename = "Inativo")]
    Inativo,
}

impl From<ProductStatus> for ProductStatusDto {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Ativo => ProductStatusDto::Ativo,
            ProductStatus::Inativo => ProductStatusDto::Inativo,
        }
    }
}

impl From<ProductStatusDto> for ProductStatus {
    fn from(dto: ProductStatusDto) -> Self {
        match dto {
            ProductStatusDto::Ativo => ProductStatus::Ativo,
            ProductStatusDto::Inativo => ProductStatus::Inativo,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProducerProductResponse {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub price_label: String,
    pub stock: i64,
    pub category: String,
    pub status: ProductStatusDto,
    pub unit: Option<String>,
}

impl From<ProducerProduct> for ProducerProductResponse {
    fn from(product: ProducerProduct) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            description: product.description,
            price: to_amount(&product.price),
            price_label: format_price(&product.price),
            stock: product.stock,
            category: product.category,
            status: product.status.into(),
            unit: product.unit,
        }
    }
}

fn default_status() -> ProductStatusDto {
    ProductStatusDto::Ativo
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductRequest {
    pub name: String,
    pub description: Option<String>,
    /// Decimal amount, e.g. "25.00".
    pub price: String,
    #[oai(default)]
    pub stock: i64,
    pub category: String,
    #[oai(default = "default_status")]
    pub status: ProductStatusDto,
    pub unit: Option<String>,
}

impl ProductRequest {
    /// `None` when the price is not a decimal number.
    pub fn into_draft(self) -> Option<ProductDraft> {
        Some(ProductDraft {
            price: parse_amount(&self.price)?,
            name: self.name,
            description: self.description,
            stock: self.stock,
            category: self.category,
            status: self.status.into(),
            unit: self.unit,
        })
    }
}
