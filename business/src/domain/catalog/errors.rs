#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.producer_not_found")]
    ProducerNotFound,
    #[error("gateway.failure")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
