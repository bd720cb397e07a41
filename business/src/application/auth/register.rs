use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::gateway::AuthGateway;
use crate::domain::auth::model::ProducerRegistration;
use crate::domain::auth::navigator::{LOGIN_ROUTE, Navigator};
use crate::domain::auth::password::validate_password;
use crate::domain::auth::use_cases::register::RegisterProducerUseCase;
use crate::domain::logger::Logger;

pub struct RegisterProducerUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterProducerUseCase for RegisterProducerUseCaseImpl {
    async fn execute(&self, registration: ProducerRegistration) -> Result<(), AuthError> {
        let registration = ProducerRegistration {
            name: registration.name.trim().to_string(),
            cpf_cnpj: registration.cpf_cnpj.trim().to_string(),
            phone: registration.phone.trim().to_string(),
            email: registration.email.trim().to_string(),
            ..registration
        };

        for (field, value) in [
            ("name", &registration.name),
            ("cpf_cnpj", &registration.cpf_cnpj),
            ("phone", &registration.phone),
            ("email", &registration.email),
        ] {
            if value.is_empty() {
                return Err(AuthError::FieldRequired(field));
            }
        }

        validate_password(&registration.password)?;
        if registration.password != registration.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        self.gateway.register(&registration).await?;
        self.logger
            .info(&format!("Producer {} registered", registration.email));

        self.navigator.navigate(LOGIN_ROUTE);
        Ok(())
    }
}
