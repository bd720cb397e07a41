use bigdecimal::BigDecimal;
use num_traits::Signed;
use serde::Serialize;

use super::errors::CartError;
use crate::domain::shared::money;
use crate::domain::shared::value_objects::{ProducerId, ProductId, UserId};

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub producer_id: ProducerId,
    pub producer_user_id: UserId,
    pub producer_name: String,
    pub unit_price: BigDecimal,
    pub quantity: u32,
    pub unit: String,
}

pub struct NewCartItemProps {
    pub product_id: ProductId,
    pub product_name: String,
    pub producer_id: ProducerId,
    pub producer_user_id: UserId,
    pub producer_name: String,
    pub unit_price: BigDecimal,
    pub quantity: i64,
    pub unit: String,
}

impl CartItem {
    pub fn new(props: NewCartItemProps) -> Result<Self, CartError> {
        let quantity = u32::try_from(props.quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or(CartError::InvalidQuantity)?;

        if props.unit_price.is_negative() {
            return Err(CartError::NegativePrice);
        }

        Ok(Self {
            product_id: props.product_id,
            product_name: props.product_name,
            producer_id: props.producer_id,
            producer_user_id: props.producer_user_id,
            producer_name: props.producer_name,
            unit_price: props.unit_price,
            quantity,
            unit: props.unit,
        })
    }

    /// unit_price x quantity
    pub fn subtotal(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

/// Cart lines of a single producer, in cart order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProducerGroup {
    pub producer_id: ProducerId,
    pub producer_name: String,
    pub items: Vec<CartItem>,
}

impl ProducerGroup {
    pub fn subtotal(&self) -> BigDecimal {
        let subtotals: Vec<BigDecimal> = self.items.iter().map(CartItem::subtotal).collect();
        money::sum(&subtotals)
    }

    /// User account the order for this group is addressed to.
    ///
    /// Every line of a producer carries the same user id, so the first one is used;
    /// an empty group falls back to the profile id.
    pub fn recipient(&self) -> UserId {
        self.items
            .first()
            .map(|item| item.producer_user_id)
            .unwrap_or_else(|| UserId::new(self.producer_id.value()))
    }
}

/// What cart observers get after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub item_count: usize,
    pub total_price: BigDecimal,
    pub is_open: bool,
}
