use std::net::SocketAddr;
use std::sync::Arc;

use mockall::mock;
use poem::listener::{Acceptor, Listener, TcpListener};
use poem::{Endpoint, Server};
use tokio::task::JoinHandle;
use url::Url;

use business::domain::auth::credential_store::CredentialStore;
use business::domain::auth::model::AuthTokens;
use business::domain::auth::navigator::Navigator;
use business::domain::errors::StorageError;
use business::domain::logger::Logger;

mock! {
    pub Credentials {}

    impl CredentialStore for Credentials {
        fn access_token(&self) -> Option<String>;
        fn store(&self, tokens: &AuthTokens) -> Result<(), StorageError>;
        fn clear(&self) -> Result<(), StorageError>;
    }
}

mock! {
    pub Nav {}

    impl Navigator for Nav {
        fn current_path(&self) -> String;
        fn navigate(&self, path: &str);
    }
}

struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

pub fn silent() -> Arc<dyn Logger> {
    Arc::new(SilentLogger)
}

/// Local stand-in for the marketplace backend, stopped on drop.
pub struct FakeBackend {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl FakeBackend {
    pub async fn start<E>(app: E) -> Self
    where
        E: Endpoint + 'static,
    {
        let acceptor = TcpListener::bind("127.0.0.1:0")
            .into_acceptor()
            .await
            .unwrap();
        let addr = *acceptor.local_addr()[0].as_socket_addr().unwrap();
        let task = tokio::spawn(async move {
            let _ = Server::new_with_acceptor(acceptor).run(app).await;
        });
        Self { addr, task }
    }

    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).unwrap()
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Client with no stored token against `backend`, for adapter tests.
pub fn anonymous_client(backend: &FakeBackend) -> crate::client::MarketplaceClient {
    let mut credentials = MockCredentials::new();
    credentials.expect_access_token().returning(|| None);
    crate::client::MarketplaceClient::new(
        backend.url(),
        crate::client::DEFAULT_AUTH_SCHEME,
        Arc::new(credentials),
        Arc::new(MockNav::new()),
        silent(),
    )
}
