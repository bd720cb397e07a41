use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::credential_store::CredentialStore;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::gateway::AuthGateway;
use crate::domain::auth::model::LoginCredentials;
use crate::domain::auth::navigator::{Navigator, PRODUCER_DASHBOARD_ROUTE};
use crate::domain::auth::use_cases::login::LoginUseCase;
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;

pub struct LoginUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub credentials: Arc<dyn CredentialStore>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, credentials: LoginCredentials) -> Result<(), AuthError> {
        let credentials = LoginCredentials {
            cpf_cnpj: credentials.cpf_cnpj.trim().to_string(),
            email: credentials.email.trim().to_string(),
            password: credentials.password,
        };
        require("cpf_cnpj", &credentials.cpf_cnpj)?;
        require("email", &credentials.email)?;
        require("password", &credentials.password)?;

        self.logger
            .info(&format!("Logging in producer {}", credentials.email));

        let issued = self
            .gateway
            .login(&credentials)
            .await
            .map_err(|e| match &e {
                // Field errors on the login form are shown next to the field;
                // anything else the backend rejects is a wrong credential.
                GatewayError::Validation(errors)
                    if errors.keys().any(|field| field != "non_field_errors") =>
                {
                    AuthError::Gateway(e)
                }
                GatewayError::Validation(_) | GatewayError::Unauthorized => {
                    AuthError::InvalidCredentials
                }
                _ => AuthError::Gateway(e),
            })?;

        let tokens = issued.into_tokens().ok_or_else(|| {
            self.logger.error("Login response carried no access token");
            AuthError::TokenMissing
        })?;

        self.credentials.store(&tokens)?;
        self.navigator.navigate(PRODUCER_DASHBOARD_ROUTE);
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), AuthError> {
    if value.is_empty() {
        return Err(AuthError::FieldRequired(field));
    }
    Ok(())
}
