use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use business::domain::auth::gateway::AuthGateway;
use business::domain::auth::model::{IssuedTokens, LoginCredentials, ProducerRegistration};
use business::domain::errors::GatewayError;

use crate::client::MarketplaceClient;

#[derive(Debug, Serialize)]
struct LoginBody<'a> {
    cpf_cnpj: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: Option<String>,
    access: Option<String>,
    key: Option<String>,
    refresh_token: Option<String>,
    refresh: Option<String>,
}

/// dj-rest-auth registration form; the username is the e-mail.
#[derive(Debug, Serialize)]
struct RegistrationBody<'a> {
    username: &'a str,
    email: &'a str,
    password1: &'a str,
    password2: &'a str,
    cpf_cnpj: &'a str,
    name: &'a str,
    phone: &'a str,
}

pub struct AuthGatewayRest {
    client: Arc<MarketplaceClient>,
}

impl AuthGatewayRest {
    pub fn new(client: Arc<MarketplaceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for AuthGatewayRest {
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedTokens, GatewayError> {
        let body = LoginBody {
            cpf_cnpj: &credentials.cpf_cnpj,
            email: &credentials.email,
            password: &credentials.password,
        };
        let response: LoginResponse = self
            .client
            .send_json(Method::POST, "/api/auth/login/", &body)
            .await?;

        Ok(IssuedTokens {
            access_token: response.access_token,
            access: response.access,
            key: response.key,
            refresh_token: response.refresh_token,
            refresh: response.refresh,
        })
    }

    async fn register(&self, registration: &ProducerRegistration) -> Result<(), GatewayError> {
        let body = RegistrationBody {
            username: &registration.email,
            email: &registration.email,
            password1: &registration.password,
            password2: &registration.confirm_password,
            cpf_cnpj: &registration.cpf_cnpj,
            name: &registration.name,
            phone: &registration.phone,
        };
        self.client
            .submit_json(Method::POST, "/api/auth/registration/", &body)
            .await
    }
}
