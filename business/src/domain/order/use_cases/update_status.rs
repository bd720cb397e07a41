use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderStatus};
use crate::domain::shared::value_objects::OrderId;

pub struct UpdateOrderStatusParams {
    pub id: OrderId,
    pub status: OrderStatus,
}

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError>;
}
