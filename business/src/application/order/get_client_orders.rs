use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::client_info_store::ClientInfoStore;
use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::Order;
use crate::domain::order::use_cases::get_client_orders::GetClientOrdersUseCase;

pub struct GetClientOrdersUseCaseImpl {
    pub gateway: Arc<dyn OrderGateway>,
    pub client_info: Arc<dyn ClientInfoStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetClientOrdersUseCase for GetClientOrdersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Order>, OrderError> {
        // Consumers have no account: their orders are found by the phone
        // remembered from their last checkout.
        let Some(info) = self.client_info.load().filter(|info| !info.phone.is_empty()) else {
            self.logger.debug("No client info stored, no orders to show");
            return Ok(vec![]);
        };

        let orders = self.gateway.list_by_client_phone(&info.phone).await?;
        self.logger
            .info(&format!("Retrieved {} client orders", orders.len()));
        Ok(orders)
    }
}
