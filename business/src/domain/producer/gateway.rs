use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{ProducerProduct, ProducerProfile, ProductDraft, ProfileUpdate};

/// Authenticated producer endpoints: own profile and own products.
#[async_trait]
pub trait ProducerGateway: Send + Sync {
    async fn get_profile(&self) -> Result<ProducerProfile, GatewayError>;
    async fn update_profile(&self, update: &ProfileUpdate)
    -> Result<ProducerProfile, GatewayError>;
    async fn list_products(&self) -> Result<Vec<ProducerProduct>, GatewayError>;
    async fn create_product(&self, draft: &ProductDraft) -> Result<ProducerProduct, GatewayError>;
    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<ProducerProduct, GatewayError>;
    async fn delete_product(&self, id: ProductId) -> Result<(), GatewayError>;
}
