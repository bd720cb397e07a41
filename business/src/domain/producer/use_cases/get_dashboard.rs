use async_trait::async_trait;

use crate::domain::producer::dashboard::Dashboard;
use crate::domain::producer::errors::ProducerError;

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<Dashboard, ProducerError>;
}
