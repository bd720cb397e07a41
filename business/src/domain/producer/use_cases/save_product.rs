use async_trait::async_trait;

use crate::domain::producer::errors::ProducerError;
use crate::domain::producer::model::{ProducerProduct, ProductDraft};
use crate::domain::shared::value_objects::ProductId;

pub struct SaveProductParams {
    /// `None` creates a new product.
    pub id: Option<ProductId>,
    pub draft: ProductDraft,
}

#[async_trait]
pub trait SaveProductUseCase: Send + Sync {
    async fn execute(&self, params: SaveProductParams) -> Result<ProducerProduct, ProducerError>;
}
