use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::OrderId;

use super::model::{NewOrder, Order, OrderStatus};

/// Order endpoints of the marketplace backend.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn create(&self, order: &NewOrder) -> Result<(), GatewayError>;
    async fn list_by_client_phone(&self, phone: &str) -> Result<Vec<Order>, GatewayError>;
    /// Orders addressed to the authenticated producer.
    async fn list_for_producer(&self) -> Result<Vec<Order>, GatewayError>;
    async fn get_by_id(&self, id: OrderId) -> Result<Order, GatewayError>;
    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, GatewayError>;
}
