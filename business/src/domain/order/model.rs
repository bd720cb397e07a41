use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::domain::shared::value_objects::{OrderId, ProductId, UserId};

/// Order lifecycle as the backend names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum OrderStatus {
    Pendente,
    Aceito,
    Cancelado,
    Entregue,
}

impl OrderStatus {
    /// Pendente -> Aceito | Cancelado, Aceito -> Entregue | Cancelado.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pendente, OrderStatus::Aceito)
                | (OrderStatus::Pendente, OrderStatus::Cancelado)
                | (OrderStatus::Aceito, OrderStatus::Entregue)
                | (OrderStatus::Aceito, OrderStatus::Cancelado)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub product: Option<ProductId>,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: BigDecimal,
    pub subtotal: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub producer_name: Option<String>,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: Option<String>,
    pub status: OrderStatus,
    pub total_price: BigDecimal,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub has_rating: bool,
    pub rating_score: Option<u8>,
}

impl Order {
    /// Delivered orders that were not rated yet can receive a rating.
    pub fn can_be_rated(&self) -> bool {
        self.status == OrderStatus::Entregue && !self.has_rating
    }
}

/// Body of an order placement.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub producer: UserId,
    pub client: ClientInfo,
    pub total_price: BigDecimal,
    pub items: Vec<OrderItem>,
}

/// Contact details a consumer leaves with an order, remembered for the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl ClientInfo {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn email(&self) -> Option<&str> {
        let email = self.email.trim();
        (!email.is_empty()).then_some(email)
    }
}
