use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::domain::auth::navigator::{LOGIN_ROUTE, Navigator};
use business::domain::auth::use_cases::login::LoginUseCase;
use business::domain::auth::use_cases::logout::LogoutUseCase;
use business::domain::auth::use_cases::register::RegisterProducerUseCase;

use crate::api::auth::dto::{LoginRequest, RegisterRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::dto::RedirectResponse;
use crate::api::tags::ApiTags;
use crate::setup::navigator::{PRODUCER_REGISTER_ROUTE, SessionNavigator};

pub struct AuthApi {
    navigator: Arc<SessionNavigator>,
    login_use_case: Arc<dyn LoginUseCase>,
    register_use_case: Arc<dyn RegisterProducerUseCase>,
    logout_use_case: Arc<dyn LogoutUseCase>,
}

impl AuthApi {
    pub fn new(
        navigator: Arc<SessionNavigator>,
        login_use_case: Arc<dyn LoginUseCase>,
        register_use_case: Arc<dyn RegisterProducerUseCase>,
        logout_use_case: Arc<dyn LogoutUseCase>,
    ) -> Self {
        Self {
            navigator,
            login_use_case,
            register_use_case,
            logout_use_case,
        }
    }

    fn redirect(&self) -> Json<RedirectResponse> {
        Json(RedirectResponse {
            route: self.navigator.current_path(),
        })
    }
}

/// Producer authentication API
#[OpenApi]
impl AuthApi {
    /// Producer login
    ///
    /// Stores the issued credential and moves the session to the producer dashboard.
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> AuthFormResponse {
        self.navigator.visit(LOGIN_ROUTE);

        match self.login_use_case.execute(body.0.into()).await {
            Ok(()) => AuthFormResponse::Ok(self.redirect()),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AuthFormResponse::BadRequest(json),
                    401 => AuthFormResponse::Unauthorized(json),
                    500 => AuthFormResponse::InternalError(json),
                    _ => AuthFormResponse::BadGateway(json),
                }
            }
        }
    }

    /// Producer sign-up
    ///
    /// Creates the producer account and moves the session to the login page.
    #[oai(path = "/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> AuthFormResponse {
        self.navigator.visit(PRODUCER_REGISTER_ROUTE);

        match self.register_use_case.execute(body.0.into()).await {
            Ok(()) => AuthFormResponse::Ok(self.redirect()),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AuthFormResponse::BadRequest(json),
                    401 => AuthFormResponse::Unauthorized(json),
                    500 => AuthFormResponse::InternalError(json),
                    _ => AuthFormResponse::BadGateway(json),
                }
            }
        }
    }

    /// Logout
    ///
    /// Forgets the stored credential and moves the session to the login page.
    #[oai(path = "/auth/logout", method = "post", tag = "ApiTags::Auth")]
    async fn logout(&self) -> LogoutResponse {
        match self.logout_use_case.execute().await {
            Ok(()) => LogoutResponse::Ok(self.redirect()),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                LogoutResponse::InternalError(json)
            }
        }
    }
}

#[derive(ApiResponse)]
enum AuthFormResponse {
    /// Accepted; the session moved to the returned route
    #[oai(status = 200)]
    Ok(Json<RedirectResponse>),
    /// Form errors, per field
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    /// Invalid credentials
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    /// Local storage could not be written
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    /// Marketplace backend unavailable
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum LogoutResponse {
    /// Logged out
    #[oai(status = 200)]
    Ok(Json<RedirectResponse>),
    /// Local storage could not be written
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::application::auth::login::LoginUseCaseImpl;
    use business::application::auth::logout::LogoutUseCaseImpl;
    use business::domain::auth::credential_store::CredentialStore;
    use business::domain::auth::errors::AuthError;
    use business::domain::auth::gateway::AuthGateway;
    use business::domain::auth::model::{
        AuthTokens, IssuedTokens, LoginCredentials, ProducerRegistration,
    };
    use business::domain::auth::navigator::PRODUCER_DASHBOARD_ROUTE;
    use business::domain::errors::GatewayError;
    use business::domain::logger::Logger;
    use logger::TracingLogger;
    use mockall::mock;
    use poem::endpoint::BoxEndpoint;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::{EndpointExt, IntoEndpoint};
    use poem_openapi::OpenApiService;
    use serde_json::json;
    use storage::local_storage::LocalStorage;

    mock! {
        Gateway {}

        #[async_trait]
        impl AuthGateway for Gateway {
            async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedTokens, GatewayError>;
            async fn register(&self, registration: &ProducerRegistration) -> Result<(), GatewayError>;
        }
    }

    mock! {
        Register {}

        #[async_trait]
        impl RegisterProducerUseCase for Register {
            async fn execute(&self, registration: ProducerRegistration) -> Result<(), AuthError>;
        }
    }

    struct Session {
        navigator: Arc<SessionNavigator>,
        storage: Arc<LocalStorage>,
        client: TestClient<BoxEndpoint<'static>>,
    }

    fn session(gateway: MockGateway, register: MockRegister) -> Session {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::default());
        let navigator = Arc::new(SessionNavigator::new(logger.clone()));
        let storage = Arc::new(LocalStorage::in_memory(logger.clone()));
        let login = LoginUseCaseImpl {
            gateway: Arc::new(gateway),
            credentials: storage.clone(),
            navigator: navigator.clone(),
            logger: logger.clone(),
        };
        let logout = LogoutUseCaseImpl {
            credentials: storage.clone(),
            navigator: navigator.clone(),
            logger,
        };
        let api = AuthApi::new(
            navigator.clone(),
            Arc::new(login),
            Arc::new(register),
            Arc::new(logout),
        );

        Session {
            navigator,
            storage,
            client: TestClient::new(
                OpenApiService::new(api, "Feira", "test")
                    .into_endpoint()
                    .boxed(),
            ),
        }
    }

    fn login_body() -> serde_json::Value {
        json!({
            "cpf_cnpj": "12345678000199",
            "email": "sitio@mail.com",
            "password": "colheita2024"
        })
    }

    #[tokio::test]
    async fn should_store_token_and_go_to_dashboard() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_| {
            Ok(IssuedTokens {
                key: Some("drf-key".to_string()),
                ..Default::default()
            })
        });
        let session = session(gateway, MockRegister::new());

        let response = session
            .client
            .post("/auth/login")
            .body_json(&login_body())
            .send()
            .await;

        response.assert_status_is_ok();
        response
            .json()
            .await
            .value()
            .object()
            .get("route")
            .assert_string(PRODUCER_DASHBOARD_ROUTE);
        assert_eq!(session.storage.access_token().as_deref(), Some("drf-key"));
    }

    #[tokio::test]
    async fn should_reject_wrong_credentials() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_login()
            .returning(|_| Err(GatewayError::Unauthorized));
        let session = session(gateway, MockRegister::new());

        let response = session
            .client
            .post("/auth/login")
            .body_json(&login_body())
            .send()
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(session.navigator.current_path(), LOGIN_ROUTE);
        assert_eq!(session.storage.access_token(), None);
    }

    #[tokio::test]
    async fn should_report_blank_login_field() {
        let session = session(MockGateway::new(), MockRegister::new());

        let response = session
            .client
            .post("/auth/login")
            .body_json(&json!({ "cpf_cnpj": " ", "email": "a@b.c", "password": "x" }))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json().await.value().deserialize();
        assert_eq!(body["fields"]["cpf_cnpj"][0], "auth.field_required");
    }

    #[tokio::test]
    async fn should_surface_password_policy_errors_on_sign_up() {
        let mut register = MockRegister::new();
        register
            .expect_execute()
            .returning(|_| Err(AuthError::PasswordTooShort));
        let session = session(MockGateway::new(), register);

        let response = session
            .client
            .post("/auth/register")
            .body_json(&json!({
                "name": "Sítio Boa Vista",
                "cpf_cnpj": "12345678000199",
                "phone": "34999990000",
                "email": "sitio@mail.com",
                "password": "abc",
                "confirm_password": "abc"
            }))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json().await.value().deserialize();
        assert_eq!(body["fields"]["password"][0], "auth.password_too_short");
        assert_eq!(session.navigator.current_path(), PRODUCER_REGISTER_ROUTE);
    }

    #[tokio::test]
    async fn should_forget_credential_on_logout() {
        let session = session(MockGateway::new(), MockRegister::new());
        session
            .storage
            .store(&AuthTokens {
                access: "token".to_string(),
                refresh: None,
            })
            .unwrap();

        let response = session.client.post("/auth/logout").send().await;

        response.assert_status_is_ok();
        assert_eq!(session.storage.access_token(), None);
        assert_eq!(session.navigator.current_path(), LOGIN_ROUTE);
    }
}
