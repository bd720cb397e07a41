use bigdecimal::BigDecimal;

use super::model::{CartItem, CartSummary, ProducerGroup};
use crate::domain::shared::money;
use crate::domain::shared::value_objects::{ProducerId, ProductId};

/// In-memory shopping cart for one session.
///
/// Lines are unique by product id and always hold a quantity of at least 1.
/// Every operation is total: unknown product ids are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    items: Vec<CartItem>,
    is_open: bool,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merges into an existing line of the same product, or appends. Opens the cart.
    pub fn add_item(&mut self, item: CartItem) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
        self.is_open = true;
    }

    pub fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|item| item.product_id != product_id);
    }

    /// Quantities of zero or less remove the line.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            item.quantity = quantity;
        }
    }

    pub fn remove_producer_items(&mut self, producer_id: ProducerId) {
        self.items.retain(|item| item.producer_id != producer_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn total_price(&self) -> BigDecimal {
        let subtotals: Vec<BigDecimal> = self.items.iter().map(CartItem::subtotal).collect();
        money::sum(&subtotals)
    }

    /// Groups lines by (producer id, producer name), ordered by first occurrence.
    pub fn items_by_producer(&self) -> Vec<ProducerGroup> {
        let mut groups: Vec<ProducerGroup> = Vec::new();

        for item in &self.items {
            match groups.iter_mut().find(|group| {
                group.producer_id == item.producer_id && group.producer_name == item.producer_name
            }) {
                Some(group) => group.items.push(item.clone()),
                None => groups.push(ProducerGroup {
                    producer_id: item.producer_id,
                    producer_name: item.producer_name.clone(),
                    items: vec![item.clone()],
                }),
            }
        }

        groups
    }

    pub fn producer_group(&self, producer_id: ProducerId) -> Option<ProducerGroup> {
        self.items_by_producer()
            .into_iter()
            .find(|group| group.producer_id == producer_id)
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            item_count: self.items.len(),
            total_price: self.total_price(),
            is_open: self.is_open,
        }
    }
}
