use super::model::OrderStatus;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_found")]
    NotFound,
    #[error("order.invalid_status_transition")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },
    #[error("gateway.failure")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
