use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::gateway::CatalogGateway;
use crate::domain::catalog::model::ProducerSummary;
use crate::domain::catalog::use_cases::list_producers::ListProducersUseCase;
use crate::domain::logger::Logger;

pub struct ListProducersUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProducersUseCase for ListProducersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ProducerSummary>, CatalogError> {
        self.logger.info("Listing producers");
        let producers = self.gateway.list_producers().await?;
        self.logger
            .info(&format!("Retrieved {} producers", producers.len()));
        Ok(producers)
    }
}
