use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::ProducerSummary;

#[async_trait]
pub trait ListProducersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProducerSummary>, CatalogError>;
}
