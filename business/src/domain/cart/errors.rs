#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.negative_price")]
    NegativePrice,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.producer_not_found")]
    ProducerNotFound,
    #[error("gateway.failure")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
