use async_trait::async_trait;

use crate::domain::producer::errors::ProducerError;
use crate::domain::producer::model::ProducerProduct;

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProducerProduct>, ProducerError>;
}
