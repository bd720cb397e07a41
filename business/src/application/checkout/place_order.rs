use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::CartSession;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::logger::Logger;
use crate::domain::order::client_info_store::ClientInfoStore;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::{ClientInfo, NewOrder, OrderItem};

pub struct PlaceOrderUseCaseImpl {
    pub gateway: Arc<dyn OrderGateway>,
    pub client_info: Arc<dyn ClientInfoStore>,
    pub cart: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<NewOrder, CheckoutError> {
        let client = ClientInfo::new(
            params.client.name.trim(),
            params.client.phone.trim(),
            params.client.email.trim(),
        );
        if client.name.is_empty() {
            return Err(CheckoutError::ClientNameRequired);
        }
        if client.phone.is_empty() {
            return Err(CheckoutError::ClientPhoneRequired);
        }

        let group = self
            .cart
            .producer_group(params.producer_id)
            .filter(|group| !group.items.is_empty())
            .ok_or(CheckoutError::EmptyGroup)?;

        let items = group
            .items
            .iter()
            .map(|item| OrderItem {
                product: Some(item.product_id),
                product_name: item.product_name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price.clone(),
                subtotal: item.subtotal(),
            })
            .collect();

        let order = NewOrder {
            producer: group.recipient(),
            client,
            total_price: group.subtotal(),
            items,
        };

        self.logger.info(&format!(
            "Placing order for producer {} ({} lines)",
            group.producer_name,
            group.items.len()
        ));
        self.gateway.create(&order).await?;

        if let Err(e) = self.client_info.save(&order.client) {
            self.logger
                .warn(&format!("Order placed but client info was not saved: {e}"));
        }

        self.cart.remove_producer_items(params.producer_id);
        self.logger
            .info(&format!("Order sent to {}", group.producer_name));
        Ok(order)
    }
}
