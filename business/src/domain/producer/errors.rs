#[derive(Debug, thiserror::Error)]
pub enum ProducerError {
    #[error("producer.name_empty")]
    NameEmpty,
    #[error("producer.negative_price")]
    NegativePrice,
    #[error("producer.negative_stock")]
    NegativeStock,
    #[error("producer.product_not_found")]
    ProductNotFound,
    #[error("gateway.failure")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
