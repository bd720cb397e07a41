use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Farm;
use crate::domain::shared::value_objects::ProducerId;

pub struct GetFarmParams {
    pub producer_id: ProducerId,
}

#[async_trait]
pub trait GetFarmUseCase: Send + Sync {
    async fn execute(&self, params: GetFarmParams) -> Result<Farm, CatalogError>;
}
