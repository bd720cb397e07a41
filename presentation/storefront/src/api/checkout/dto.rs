use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::order::model::{ClientInfo, NewOrder};
use business::domain::shared::money::format_price;

use crate::api::cart::dto::CartBadgeResponse;
use crate::api::money::to_amount;
use crate::api::orders::dto::OrderItemResponse;

/// Checkout form. The saved client info prefills it.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ClientInfoRequest {
    pub name: String,
    pub phone: String,
    #[oai(default)]
    pub email: String,
}

impl From<ClientInfoRequest> for ClientInfo {
    fn from(request: ClientInfoRequest) -> Self {
        ClientInfo::new(request.name, request.phone, request.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ClientInfoResponse {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl From<ClientInfo> for ClientInfoResponse {
    fn from(info: ClientInfo) -> Self {
        Self {
            name: info.name,
            phone: info.phone,
            email: info.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderPlacedResponse {
    /// User account the order was addressed to.
    pub producer_user_id: u64,
    pub client: ClientInfoResponse,
    pub total_price: String,
    pub total_label: String,
    pub items: Vec<OrderItemResponse>,
    /// Cart after the producer's lines were removed.
    pub cart: CartBadgeResponse,
}

impl OrderPlacedResponse {
    pub fn new(order: NewOrder, cart: CartBadgeResponse) -> Self {
        Self {
            producer_user_id: order.producer.value(),
            client: order.client.into(),
            total_label: format_price(&order.total_price),
            total_price: to_amount(&order.total_price),
            items: order.items.into_iter().map(Into::into).collect(),
            cart,
        }
    }
}
