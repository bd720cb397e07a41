use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::auth::model::{LoginCredentials, ProducerRegistration};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct LoginRequest {
    pub cpf_cnpj: String,
    pub email: String,
    #[oai(write_only)]
    pub password: String,
}

impl From<LoginRequest> for LoginCredentials {
    fn from(request: LoginRequest) -> Self {
        Self {
            cpf_cnpj: request.cpf_cnpj,
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RegisterRequest {
    pub name: String,
    pub cpf_cnpj: String,
    pub phone: String,
    pub email: String,
    #[oai(write_only)]
    pub password: String,
    #[oai(write_only)]
    pub confirm_password: String,
}

impl From<RegisterRequest> for ProducerRegistration {
    fn from(request: RegisterRequest) -> Self {
        Self {
            name: request.name,
            cpf_cnpj: request.cpf_cnpj,
            phone: request.phone,
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
        }
    }
}
