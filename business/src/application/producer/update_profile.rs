use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::producer::errors::ProducerError;
use crate::domain::producer::gateway::ProducerGateway;
use crate::domain::producer::model::{ProducerProfile, ProfileUpdate};
use crate::domain::producer::use_cases::update_profile::UpdateProfileUseCase;

pub struct UpdateProfileUseCaseImpl {
    pub gateway: Arc<dyn ProducerGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProfileUseCase for UpdateProfileUseCaseImpl {
    async fn execute(&self, update: ProfileUpdate) -> Result<ProducerProfile, ProducerError> {
        let update = ProfileUpdate {
            name: update.name.trim().to_string(),
            ..update
        };
        update.validate()?;

        self.logger.info("Updating producer profile");
        Ok(self.gateway.update_profile(&update).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProducerGw, mock_logger, producer_profile};

    fn update(name: &str) -> ProfileUpdate {
        ProfileUpdate {
            name: name.to_string(),
            phone: Some("34988887777".to_string()),
            city: Some("Uberlândia".to_string()),
            address: None,
        }
    }

    #[tokio::test]
    async fn should_send_trimmed_update() {
        let mut gateway = MockProducerGw::new();
        gateway
            .expect_update_profile()
            .withf(|u| u.name == "Sítio Novo")
            .times(1)
            .returning(|u| {
                Ok(ProducerProfile {
                    name: u.name.clone(),
                    city: u.city.clone(),
                    ..producer_profile()
                })
            });

        let use_case = UpdateProfileUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let profile = use_case.execute(update("  Sítio Novo ")).await.unwrap();
        assert_eq!(profile.city.as_deref(), Some("Uberlândia"));
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let mut gateway = MockProducerGw::new();
        gateway.expect_update_profile().never();

        let use_case = UpdateProfileUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute(update("   ")).await.unwrap_err(),
            ProducerError::NameEmpty
        ));
    }
}
