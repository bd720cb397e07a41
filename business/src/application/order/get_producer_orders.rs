use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::Order;
use crate::domain::order::use_cases::get_producer_orders::GetProducerOrdersUseCase;

pub struct GetProducerOrdersUseCaseImpl {
    pub gateway: Arc<dyn OrderGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProducerOrdersUseCase for GetProducerOrdersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Order>, OrderError> {
        self.logger.info("Getting producer orders");
        let mut orders = self.gateway.list_for_producer().await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::order::model::OrderStatus;
    use crate::test_support::{MockOrderGw, mock_logger, order};
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn should_return_newest_orders_first() {
        let now = Utc::now();
        let mut gateway = MockOrderGw::new();
        gateway.expect_list_for_producer().returning(move || {
            Ok(vec![
                order(1, OrderStatus::Entregue, now - Duration::days(3)),
                order(2, OrderStatus::Pendente, now),
            ])
        });

        let use_case = GetProducerOrdersUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let orders = use_case.execute().await.unwrap();
        assert_eq!(orders[0].id.value(), 2);
    }

    #[tokio::test]
    async fn should_propagate_unauthorized() {
        let mut gateway = MockOrderGw::new();
        gateway
            .expect_list_for_producer()
            .returning(|| Err(GatewayError::Unauthorized));

        let use_case = GetProducerOrdersUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            OrderError::Gateway(GatewayError::Unauthorized)
        ));
    }
}
