use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::producer::errors::ProducerError;
use crate::domain::producer::gateway::ProducerGateway;
use crate::domain::producer::model::ProducerProduct;
use crate::domain::producer::use_cases::list_products::ListProductsUseCase;

pub struct ListProductsUseCaseImpl {
    pub gateway: Arc<dyn ProducerGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ProducerProduct>, ProducerError> {
        let products = self.gateway.list_products().await?;
        self.logger
            .info(&format!("Retrieved {} producer products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::producer::model::ProductStatus;
    use crate::test_support::{MockProducerGw, mock_logger, producer_product};

    #[tokio::test]
    async fn should_list_products_of_any_status() {
        let mut gateway = MockProducerGw::new();
        gateway.expect_list_products().returning(|| {
            Ok(vec![
                producer_product(1, ProductStatus::Ativo),
                producer_product(2, ProductStatus::Inativo),
            ])
        });

        let use_case = ListProductsUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await.unwrap().len(), 2);
    }
}
