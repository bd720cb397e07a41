use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use business::domain::auth::credential_store::CredentialStore;
use business::domain::auth::navigator::Navigator;
use business::domain::errors::GatewayError;
use business::domain::logger::Logger;

use crate::errors::error_from_status;
use crate::interceptor::{authorization_value, handle_unauthorized};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_AUTH_SCHEME: &str = "Token";

/// Shared marketplace HTTP client.
///
/// Every request goes through the same two hooks: the stored credential is
/// attached on the way out, and a 401 on a private endpoint resets the session.
/// No timeout, retry or deduplication is applied.
pub struct MarketplaceClient {
    http: Client,
    base_url: Url,
    auth_scheme: String,
    credentials: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
    logger: Arc<dyn Logger>,
}

impl MarketplaceClient {
    pub fn new(
        base_url: Url,
        auth_scheme: impl Into<String>,
        credentials: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: with_trailing_slash(base_url),
            auth_scheme: auth_scheme.into(),
            credentials,
            navigator,
            logger,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = self.send(Method::GET, path, |request| request).await?;
        Self::decode(response).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        let response = self
            .send(Method::GET, path, |request| request.query(query))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(method, path, |request| request.json(body))
            .await?;
        Self::decode(response).await
    }

    /// Sends `body` and ignores whatever the backend answers on success.
    pub(crate) async fn submit_json<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), GatewayError>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, |request| request.json(body))
            .await
            .map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        self.send(Method::DELETE, path, |request| request)
            .await
            .map(|_| ())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response, GatewayError> {
        let url = endpoint_url(&self.base_url, path).map_err(|e| {
            self.logger
                .error(&format!("Invalid backend path {path}: {e}"));
            GatewayError::network()
        })?;

        let mut request = self.http.request(method.clone(), url);
        if let Some(value) = authorization_value(&self.auth_scheme, self.credentials.as_ref()) {
            request = request.header(AUTHORIZATION, value);
        }

        let response = build(request).send().await.map_err(|e| {
            self.logger
                .error(&format!("{method} {path} failed: {e}"));
            GatewayError::network()
        })?;

        let status = response.status();
        if status.is_success() {
            self.logger.debug(&format!("{method} {path} -> {status}"));
            return Ok(response);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            handle_unauthorized(
                path,
                self.credentials.as_ref(),
                self.navigator.as_ref(),
                self.logger.as_ref(),
            );
        }

        let body = response.text().await.unwrap_or_default();
        self.logger.warn(&format!("{method} {path} -> {status}"));
        Err(error_from_status(status, &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        response.json::<T>().await.map_err(|_| GatewayError::network())
    }
}

// Backend paths are joined relative to the base so a prefix such as
// `http://host/backend/` is kept.
fn endpoint_url(base_url: &Url, path: &str) -> Result<Url, url::ParseError> {
    base_url.join(path.trim_start_matches('/'))
}

fn with_trailing_slash(mut base_url: Url) -> Url {
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url
}
