use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::producer::errors::ProducerError;
use crate::domain::producer::gateway::ProducerGateway;
use crate::domain::producer::model::ProducerProfile;
use crate::domain::producer::use_cases::get_profile::GetProfileUseCase;

pub struct GetProfileUseCaseImpl {
    pub gateway: Arc<dyn ProducerGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProfileUseCase for GetProfileUseCaseImpl {
    async fn execute(&self) -> Result<ProducerProfile, ProducerError> {
        self.logger.info("Getting producer profile");
        Ok(self.gateway.get_profile().await?)
    }
}
