use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::producer::errors::ProducerError;
use crate::domain::producer::gateway::ProducerGateway;
use crate::domain::producer::use_cases::delete_product::{
    DeleteProductParams, DeleteProductUseCase,
};

pub struct DeleteProductUseCaseImpl {
    pub gateway: Arc<dyn ProducerGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProducerError> {
        self.logger
            .info(&format!("Deleting product with id: {}", params.id));

        self.gateway
            .delete_product(params.id)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound => ProducerError::ProductNotFound,
                other => ProducerError::Gateway(other),
            })
    }
}
