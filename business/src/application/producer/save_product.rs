use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::producer::errors::ProducerError;
use crate::domain::producer::gateway::ProducerGateway;
use crate::domain::producer::model::{ProducerProduct, ProductDraft};
use crate::domain::producer::use_cases::save_product::{SaveProductParams, SaveProductUseCase};

pub struct SaveProductUseCaseImpl {
    pub gateway: Arc<dyn ProducerGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveProductUseCase for SaveProductUseCaseImpl {
    async fn execute(&self, params: SaveProductParams) -> Result<ProducerProduct, ProducerError> {
        let draft = ProductDraft {
            name: params.draft.name.trim().to_string(),
            ..params.draft
        };
        draft.validate()?;

        let product = match params.id {
            Some(id) => {
                self.logger.info(&format!("Updating product {id}"));
                self.gateway
                    .update_product(id, &draft)
                    .await
                    .map_err(|e| match e {
                        GatewayError::NotFound => ProducerError::ProductNotFound,
                        other => ProducerError::Gateway(other),
                    })?
            }
            None => {
                self.logger
                    .info(&format!("Creating product {}", draft.name));
                self.gateway.create_product(&draft).await?
            }
        };

        Ok(product)
    }
}
