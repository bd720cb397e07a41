#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.password_too_short")]
    PasswordTooShort,
    #[error("auth.password_too_common")]
    PasswordTooCommon,
    #[error("auth.password_needs_letters_and_digits")]
    PasswordNeedsLettersAndDigits,
    #[error("auth.password_mismatch")]
    PasswordMismatch,
    #[error("auth.field_required")]
    FieldRequired(&'static str),
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.token_missing")]
    TokenMissing,
    #[error("storage.failure")]
    Storage(#[from] crate::domain::errors::StorageError),
    #[error("gateway.failure")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
