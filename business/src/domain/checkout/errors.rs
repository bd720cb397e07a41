#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.empty_group")]
    EmptyGroup,
    #[error("checkout.client_name_required")]
    ClientNameRequired,
    #[error("checkout.client_phone_required")]
    ClientPhoneRequired,
    #[error("gateway.failure")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
