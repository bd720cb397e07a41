use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use serde::Deserialize;

use business::domain::catalog::gateway::CatalogGateway;
use business::domain::catalog::model::{CatalogProduct, ProducerSummary};
use business::domain::errors::GatewayError;
use business::domain::shared::value_objects::{ProducerId, ProductId, UserId};

use crate::client::MarketplaceClient;
use crate::wire::{Listing, lenient_f64};

#[derive(Debug, Deserialize)]
struct ProducerDto {
    id: u64,
    name: String,
    user_id: Option<u64>,
    user: Option<u64>,
    city: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    average_rating: Option<f64>,
}

impl ProducerDto {
    fn into_domain(self) -> ProducerSummary {
        ProducerSummary {
            id: ProducerId::new(self.id),
            name: self.name,
            // Older payloads only carry the profile id; orders then go to it.
            user_id: UserId::new(self.user_id.or(self.user).unwrap_or(self.id)),
            city: self.city,
            average_rating: self.average_rating,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProductDto {
    id: u64,
    name: String,
    description: Option<String>,
    price: BigDecimal,
    #[serde(default)]
    stock: i64,
    #[serde(default)]
    category: String,
    unit: Option<String>,
    image: Option<String>,
}

impl ProductDto {
    fn into_domain(self) -> CatalogProduct {
        CatalogProduct {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category: self.category,
            unit: self.unit,
            image: self.image,
        }
    }
}

/// Public producer listing and farm pages.
pub struct CatalogGatewayRest {
    client: Arc<MarketplaceClient>,
}

impl CatalogGatewayRest {
    pub fn new(client: Arc<MarketplaceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogGateway for CatalogGatewayRest {
    async fn list_producers(&self) -> Result<Vec<ProducerSummary>, GatewayError> {
        let producers: Listing<ProducerDto> = self.client.get("/api/producers/").await?;
        Ok(producers
            .into_vec()
            .into_iter()
            .map(ProducerDto::into_domain)
            .collect())
    }

    async fn get_producer(&self, id: ProducerId) -> Result<ProducerSummary, GatewayError> {
        let producer: ProducerDto = self
            .client
            .get(&format!("/api/producers/{id}/"))
            .await?;
        Ok(producer.into_domain())
    }

    async fn get_producer_products(
        &self,
        id: ProducerId,
    ) -> Result<Vec<CatalogProduct>, GatewayError> {
        let products: Listing<ProductDto> = self
            .client
            .get(&format!("/api/producers/{id}/products/"))
            .await?;
        Ok(products
            .into_vec()
            .into_iter()
            .map(ProductDto::into_domain)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeBackend, anonymous_client};
    use poem::http::StatusCode;
    use poem::web::Json;
    use poem::{Route, get, handler};
    use serde_json::{Value, json};
    use std::str::FromStr;

    #[handler]
    fn producers_handler() -> Json<Value> {
        Json(json!([
            {"id": 1, "name": "Sítio Boa Vista", "user_id": 11, "city": "Ituiutaba", "average_rating": "4.50"},
            {"id": 2, "name": "Horta da Ana", "user": 22}
        ]))
    }

    #[handler]
    fn producer_handler() -> Json<Value> {
        Json(json!({"id": 1, "name": "Sítio Boa Vista", "user_id": 11}))
    }

    #[handler]
    fn products_handler() -> Json<Value> {
        Json(json!([
            {"id": 5, "name": "Alface Crespa", "description": "Colhida hoje", "price": "2.50",
             "stock": 30, "category": "Verduras", "unit": "maço"},
            {"id": 6, "name": "Mel", "price": 25, "stock": 0, "category": "Outros", "image": null}
        ]))
    }

    #[handler]
    fn missing_handler() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    async fn gateway() -> (FakeBackend, CatalogGatewayRest) {
        let backend = FakeBackend::start(
            Route::new()
                .at("/api/producers/", get(producers_handler))
                .at("/api/producers/1/", get(producer_handler))
                .at("/api/producers/1/products/", get(products_handler))
                .at("/api/producers/9/", get(missing_handler)),
        )
        .await;
        let gateway = CatalogGatewayRest::new(Arc::new(anonymous_client(&backend)));
        (backend, gateway)
    }

    #[tokio::test]
    async fn should_list_producers_with_their_user_ids() {
        let (_backend, gateway) = gateway().await;

        let producers = gateway.list_producers().await.unwrap();

        assert_eq!(producers.len(), 2);
        assert_eq!(producers[0].user_id, UserId::new(11));
        assert_eq!(producers[0].average_rating, Some(4.5));
        assert_eq!(producers[1].user_id, UserId::new(22));
        assert_eq!(producers[1].city, None);
    }

    #[tokio::test]
    async fn should_read_products_with_decimal_prices() {
        let (_backend, gateway) = gateway().await;

        let products = gateway
            .get_producer_products(ProducerId::new(1))
            .await
            .unwrap();

        assert_eq!(products[0].price, BigDecimal::from_str("2.50").unwrap());
        assert_eq!(products[0].unit.as_deref(), Some("maço"));
        assert_eq!(products[1].price, BigDecimal::from(25));
        assert!(!products[1].in_stock());
    }

    #[tokio::test]
    async fn should_report_unknown_producer() {
        let (_backend, gateway) = gateway().await;

        let result = gateway.get_producer(ProducerId::new(9)).await;

        assert_eq!(result.unwrap_err(), GatewayError::NotFound);
    }
}
