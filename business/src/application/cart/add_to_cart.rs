use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::CartSession;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartItem, CartSummary, NewCartItemProps};
use crate::domain::cart::use_cases::add_to_cart::{AddToCartParams, AddToCartUseCase};
use crate::domain::catalog::gateway::CatalogGateway;
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub catalog: Arc<dyn CatalogGateway>,
    pub cart: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<CartSummary, CartError> {
        self.logger.info(&format!(
            "Adding product {} from producer {} to cart",
            params.product_id, params.producer_id
        ));

        let producer = self
            .catalog
            .get_producer(params.producer_id)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound => CartError::ProducerNotFound,
                other => CartError::Gateway(other),
            })?;
        let products = self.catalog.get_producer_products(params.producer_id).await?;
        let product = products
            .into_iter()
            .find(|product| product.id == params.product_id)
            .ok_or(CartError::ProductNotFound)?;

        let unit = product.display_unit().to_string();
        let item = CartItem::new(NewCartItemProps {
            product_id: product.id,
            product_name: product.name,
            producer_id: producer.id,
            producer_user_id: producer.user_id,
            producer_name: producer.name,
            unit_price: product.price,
            quantity: params.quantity,
            unit,
        })?;

        let summary = self.cart.add_item(item);
        self.logger
            .info(&format!("Cart now holds {} lines", summary.item_count));
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::{ProducerId, ProductId, UserId};
    use crate::test_support::{MockCatalogGw, catalog_product, dec, mock_logger, producer};

    fn catalog_with_farm() -> MockCatalogGw {
        let mut catalog = MockCatalogGw::new();
        catalog
            .expect_get_producer()
            .returning(|_| Ok(producer(10, 100, "Sítio Boa Vista")));
        catalog.expect_get_producer_products().returning(|_| {
            Ok(vec![
                catalog_product(1, "Tomate Orgânico", "2.50"),
                catalog_product(2, "Alface Crespa", "5.00"),
            ])
        });
        catalog
    }

    #[tokio::test]
    async fn should_add_product_with_producer_details() {
        let cart = Arc::new(CartSession::new());
        let use_case = AddToCartUseCaseImpl {
            catalog: Arc::new(catalog_with_farm()),
            cart: cart.clone(),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(AddToCartParams {
                producer_id: ProducerId::new(10),
                product_id: ProductId::new(1),
                quantity: 3,
            })
            .await
            .unwrap();

        assert_eq!(summary.total_price, dec("7.50"));
        assert!(summary.is_open);
        let snapshot = cart.snapshot();
        let line = &snapshot.items()[0];
        assert_eq!(line.producer_user_id, UserId::new(100));
        assert_eq!(line.producer_name, "Sítio Boa Vista");
        assert_eq!(line.unit, "kg");
    }

    #[tokio::test]
    async fn should_reject_product_missing_from_farm() {
        let use_case = AddToCartUseCaseImpl {
            catalog: Arc::new(catalog_with_farm()),
            cart: Arc::new(CartSession::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                producer_id: ProducerId::new(10),
                product_id: ProductId::new(99),
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_reject_zero_quantity() {
        let cart = Arc::new(CartSession::new());
        let use_case = AddToCartUseCaseImpl {
            catalog: Arc::new(catalog_with_farm()),
            cart: cart.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                producer_id: ProducerId::new(10),
                product_id: ProductId::new(1),
                quantity: 0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
        assert!(cart.snapshot().is_empty());
    }

    #[tokio::test]
    async fn should_map_unknown_producer() {
        let mut catalog = MockCatalogGw::new();
        catalog
            .expect_get_producer()
            .returning(|_| Err(GatewayError::NotFound));

        let use_case = AddToCartUseCaseImpl {
            catalog: Arc::new(catalog),
            cart: Arc::new(CartSession::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                producer_id: ProducerId::new(404),
                product_id: ProductId::new(1),
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProducerNotFound));
    }
}
