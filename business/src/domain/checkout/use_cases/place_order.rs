use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::order::model::{ClientInfo, NewOrder};
use crate::domain::shared::value_objects::ProducerId;

pub struct PlaceOrderParams {
    pub producer_id: ProducerId,
    pub client: ClientInfo,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    /// Sends the cart group of one producer as an order and returns what was sent.
    async fn execute(&self, params: PlaceOrderParams) -> Result<NewOrder, CheckoutError>;
}
