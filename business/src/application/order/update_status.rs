use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::Order;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

pub struct UpdateOrderStatusUseCaseImpl {
    pub gateway: Arc<dyn OrderGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError> {
        self.logger.info(&format!(
            "Moving order {} to {}",
            params.id, params.status
        ));

        let current = self
            .gateway
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound => OrderError::NotFound,
                other => OrderError::Gateway(other),
            })?;

        if !current.status.can_transition_to(params.status) {
            return Err(OrderError::InvalidStatusTransition {
                from: current.status,
                to: params.status,
            });
        }

        let updated = self.gateway.update_status(params.id, params.status).await?;
        self.logger
            .info(&format!("Order {} is now {}", updated.id, updated.status));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::model::OrderStatus;
    use crate::domain::shared::value_objects::OrderId;
    use crate::test_support::{MockOrderGw, mock_logger, order};
    use chrono::Utc;

    #[tokio::test]
    async fn should_accept_pending_order() {
        let mut gateway = MockOrderGw::new();
        gateway
            .expect_get_by_id()
            .returning(|id| Ok(order(id.value(), OrderStatus::Pendente, Utc::now())));
        gateway
            .expect_update_status()
            .withf(|_, status| *status == OrderStatus::Aceito)
            .returning(|id, status| Ok(order(id.value(), status, Utc::now())));

        let use_case = UpdateOrderStatusUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateOrderStatusParams {
                id: OrderId::new(4),
                status: OrderStatus::Aceito,
            })
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Aceito);
    }

    #[tokio::test]
    async fn should_reject_reopening_delivered_order() {
        let mut gateway = MockOrderGw::new();
        gateway
            .expect_get_by_id()
            .returning(|id| Ok(order(id.value(), OrderStatus::Entregue, Utc::now())));
        gateway.expect_update_status().never();

        let use_case = UpdateOrderStatusUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                id: OrderId::new(4),
                status: OrderStatus::Pendente,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::InvalidStatusTransition {
                from: OrderStatus::Entregue,
                to: OrderStatus::Pendente
            }
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_order() {
        let mut gateway = MockOrderGw::new();
        gateway
            .expect_get_by_id()
            .returning(|_| Err(GatewayError::NotFound));

        let use_case = UpdateOrderStatusUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                id: OrderId::new(99),
                status: OrderStatus::Aceito,
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::NotFound));
    }
}
