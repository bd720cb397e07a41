use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::order::model::{Order, OrderItem, OrderStatus};
use business::domain::shared::money::format_price;

use crate::api::money::to_amount;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "Pendente")]
    Pendente,
    #[oai(rename = "Aceito")]
    Aceito,
    #[oai(rename = "Cancelado")]
    Cancelado,
    #[oai(rename = "Entregue")]
    Entregue,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pendente => OrderStatusDto::Pendente,
            OrderStatus::Aceito => OrderStatusDto::Aceito,
            OrderStatus::Cancelado => OrderStatusDto::Cancelado,
            OrderStatus::Entregue => OrderStatusDto::Entregue,
        }
    }
}

impl From<OrderStatusDto> for OrderStatus {
    fn from(dto: OrderStatusDto) -> Self {
        match dto {
            OrderStatusDto::Pendente => OrderStatus::Pendente,
            OrderStatusDto::Aceito => OrderStatus::Aceito,
            OrderStatusDto::Cancelado => OrderStatus::Cancelado,
            OrderStatusDto::Entregue => OrderStatus::Entregue,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderItemResponse {
    pub product_id: Option<u64>,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub subtotal: String,
    pub subtotal_label: String,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product.map(|id| id.value()),
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price: to_amount(&item.unit_price),
            subtotal: to_amount(&item.subtotal),
            subtotal_label: format_price(&item.subtotal),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderResponse {
    pub id: u64,
    pub producer_name: Option<String>,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: Option<String>,
    pub status: OrderStatusDto,
    pub total_price: String,
    pub total_label: String,
    pub items: Vec<OrderItemResponse>,
    pub created_at: DateTime<Utc>,
    pub has_rating: bool,
    pub rating_score: Option<u8>,
    /// Delivered and not rated yet.
    pub can_be_rated: bool,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            can_be_rated: order.can_be_rated(),
            id: order.id.value(),
            producer_name: order.producer_name,
            client_name: order.client_name,
            client_phone: order.client_phone,
            client_email: order.client_email,
            status: order.status.into(),
            total_label: format_price(&order.total_price),
            total_price: to_amount(&order.total_price),
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at,
            has_rating: order.has_rating,
            rating_score: order.rating_score,
        }
    }
}

/// Missing score counts as no score.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RatingRequest {
    #[oai(default)]
    pub score: u8,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateStatusRequest {
    pub status: OrderStatusDto,
}
