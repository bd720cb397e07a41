use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::credential_store::CredentialStore;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::navigator::{LOGIN_ROUTE, Navigator};
use crate::domain::auth::use_cases::logout::LogoutUseCase;
use crate::domain::logger::Logger;

pub struct LogoutUseCaseImpl {
    pub credentials: Arc<dyn CredentialStore>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Result<(), AuthError> {
        self.credentials.clear()?;
        self.logger.info("Producer logged out");
        self.navigator.navigate(LOGIN_ROUTE);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::test_support::{MockCredentialSt, MockNav, mock_logger};

    #[tokio::test]
    async fn should_clear_credentials_and_go_to_login() {
        let mut store = MockCredentialSt::new();
        store.expect_clear().times(1).returning(|| Ok(()));
        let mut navigator = MockNav::new();
        navigator
            .expect_navigate()
            .withf(|path| path == LOGIN_ROUTE)
            .times(1)
            .return_const(());

        let use_case = LogoutUseCaseImpl {
            credentials: Arc::new(store),
            navigator: Arc::new(navigator),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.is_ok());
    }

    #[tokio::test]
    async fn should_report_storage_failure() {
        let mut store = MockCredentialSt::new();
        store
            .expect_clear()
            .returning(|| Err(StorageError::WriteFailed));
        let mut navigator = MockNav::new();
        navigator.expect_navigate().never();

        let use_case = LogoutUseCaseImpl {
            credentials: Arc::new(store),
            navigator: Arc::new(navigator),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            AuthError::Storage(StorageError::WriteFailed)
        ));
    }
}
