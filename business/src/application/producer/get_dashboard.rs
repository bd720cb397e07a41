use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::producer::dashboard::{Dashboard, build_dashboard};
use crate::domain::producer::errors::ProducerError;
use crate::domain::producer::gateway::ProducerGateway;
use crate::domain::producer::use_cases::get_dashboard::GetDashboardUseCase;

pub struct GetDashboardUseCaseImpl {
    pub orders: Arc<dyn OrderGateway>,
    pub producer: Arc<dyn ProducerGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetDashboardUseCase for GetDashboardUseCaseImpl {
    async fn execute(&self) -> Result<Dashboard, ProducerError> {
        self.logger.info("Loading producer dashboard");

        let (orders, products, profile) = tokio::join!(
            self.orders.list_for_producer(),
            self.producer.list_products(),
            self.producer.get_profile(),
        );

        let dashboard = build_dashboard(&orders?, &products?, &profile?, Utc::now());
        self.logger.debug(&format!(
            "Dashboard: {} new orders this week, {} active products",
            dashboard.new_orders_this_week, dashboard.active_products
        ));
        Ok(dashboard)
    }
}
