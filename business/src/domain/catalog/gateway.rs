use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::ProducerId;

use super::model::{CatalogProduct, ProducerSummary};

/// Public catalog endpoints of the marketplace backend.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn list_producers(&self) -> Result<Vec<ProducerSummary>, GatewayError>;
    async fn get_producer(&self, id: ProducerId) -> Result<ProducerSummary, GatewayError>;
    async fn get_producer_products(
        &self,
        id: ProducerId,
    ) -> Result<Vec<CatalogProduct>, GatewayError>;
}
