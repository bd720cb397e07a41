use async_trait::async_trait;

use crate::domain::producer::errors::ProducerError;
use crate::domain::shared::value_objects::ProductId;

pub struct DeleteProductParams {
    pub id: ProductId,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProducerError>;
}
