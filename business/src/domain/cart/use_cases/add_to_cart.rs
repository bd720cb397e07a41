use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::shared::value_objects::{ProducerId, ProductId};

pub struct AddToCartParams {
    pub producer_id: ProducerId,
    pub product_id: ProductId,
    pub quantity: i64,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> Result<CartSummary, CartError>;
}
