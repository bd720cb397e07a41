use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::gateway::CatalogGateway;
use crate::domain::catalog::model::Farm;
use crate::domain::catalog::use_cases::get_farm::{GetFarmParams, GetFarmUseCase};
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;

pub struct GetFarmUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFarmUseCase for GetFarmUseCaseImpl {
    async fn execute(&self, params: GetFarmParams) -> Result<Farm, CatalogError> {
        self.logger
            .info(&format!("Loading farm page of producer {}", params.producer_id));

        // Producer first, then its products.
        let producer = self
            .gateway
            .get_producer(params.producer_id)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound => CatalogError::ProducerNotFound,
                other => CatalogError::Gateway(other),
            })?;
        let products = self
            .gateway
            .get_producer_products(params.producer_id)
            .await?;

        Ok(Farm { producer, products })
    }
}
