use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{CartItem, CartSummary, ProducerGroup};
use business::domain::cart::store::CartStore;
use business::domain::shared::money::format_price;

use crate::api::money::to_amount;

/// Cart badge: line count, running total and sidebar visibility.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartBadgeResponse {
    pub item_count: u64,
    pub total: String,
    pub total_label: String,
    pub is_open: bool,
}

impl From<CartSummary> for CartBadgeResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            item_count: summary.item_count as u64,
            total: to_amount(&summary.total_price),
            total_label: format_price(&summary.total_price),
            is_open: summary.is_open,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartItemResponse {
    pub product_id: u64,
    pub product_name: String,
    pub producer_id: u64,
    pub producer_name: String,
    pub unit_price: String,
    pub unit_price_label: String,
    pub quantity: u32,
    pub unit: String,
    pub subtotal: String,
    pub subtotal_label: String,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        let subtotal = item.subtotal();
        Self {
            product_id: item.product_id.value(),
            product_name: item.product_name.clone(),
            producer_id: item.producer_id.value(),
            producer_name: item.producer_name.clone(),
            unit_price: to_amount(&item.unit_price),
            unit_price_label: format_price(&item.unit_price),
            quantity: item.quantity,
            unit: item.unit.clone(),
            subtotal: to_amount(&subtotal),
            subtotal_label: format_price(&subtotal),
        }
    }
}

/// Cart lines of one producer; each group is checked out on its own.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProducerGroupResponse {
    pub producer_id: u64,
    pub producer_name: String,
    pub items: Vec<CartItemResponse>,
    pub subtotal: String,
    pub subtotal_label: String,
}

impl From<&ProducerGroup> for ProducerGroupResponse {
    fn from(group: &ProducerGroup) -> Self {
        let subtotal = group.subtotal();
        Self {
            producer_id: group.producer_id.value(),
            producer_name: group.producer_name.clone(),
            items: group.items.iter().map(CartItemResponse::from).collect(),
            subtotal: to_amount(&subtotal),
            subtotal_label: format_price(&subtotal),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub groups: Vec<ProducerGroupResponse>,
    pub badge: CartBadgeResponse,
}

impl From<&CartStore> for CartResponse {
    fn from(store: &CartStore) -> Self {
        Self {
            items: store.items().iter().map(CartItemResponse::from).collect(),
            groups: store
                .items_by_producer()
                .iter()
                .map(ProducerGroupResponse::from)
                .collect(),
            badge: store.summary().into(),
        }
    }
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AddToCartRequest {
    pub producer_id: u64,
    pub product_id: u64,
    #[oai(default = "default_quantity")]
    pub quantity: i64,
}

/// Zero or a negative quantity removes the line.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}
