use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::application::cart::session::CartSession;
use business::domain::auth::credential_store::CredentialStore;
use business::domain::auth::navigator::Navigator;

use crate::api::session::dto::SessionResponse;
use crate::api::tags::ApiTags;
use crate::setup::navigator::SessionNavigator;

pub struct SessionApi {
    navigator: Arc<SessionNavigator>,
    credentials: Arc<dyn CredentialStore>,
    cart: Arc<CartSession>,
}

impl SessionApi {
    pub fn new(
        navigator: Arc<SessionNavigator>,
        credentials: Arc<dyn CredentialStore>,
        cart: Arc<CartSession>,
    ) -> Self {
        Self {
            navigator,
            credentials,
            cart,
        }
    }
}

#[OpenApi]
impl SessionApi {
    /// Current session
    ///
    /// Returns the current page, whether a producer is logged in and the cart badge.
    #[oai(path = "/session", method = "get", tag = "ApiTags::Session")]
    async fn get(&self) -> Json<SessionResponse> {
        Json(SessionResponse {
            current_route: self.navigator.current_path(),
            authenticated: self.credentials.access_token().is_some(),
            cart: self.cart.summary().into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::auth::navigator::LOGIN_ROUTE;
    use business::domain::logger::Logger;
    use logger::TracingLogger;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use storage::local_storage::LocalStorage;

    #[tokio::test]
    async fn should_report_route_credential_and_cart() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::default());
        let navigator = Arc::new(SessionNavigator::new(logger.clone()));
        navigator.navigate(LOGIN_ROUTE);
        let storage = Arc::new(LocalStorage::in_memory(logger));
        let api = SessionApi::new(navigator, storage, Arc::new(CartSession::new()));
        let client = TestClient::new(OpenApiService::new(api, "Feira", "test"));

        let response = client.get("/session").send().await;

        response.assert_status_is_ok();
        let body: serde_json::Value = response.json().await.value().deserialize();
        assert_eq!(body["current_route"], LOGIN_ROUTE);
        assert_eq!(body["authenticated"], false);
        assert_eq!(body["cart"]["item_count"], 0);
        assert_eq!(body["cart"]["total"], "0.00");
    }
}
