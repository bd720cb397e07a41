use std::collections::BTreeMap;

/// Field name to messages, exactly as the backend returned them.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Errors raised by the backend gateways.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.network")]
    Network,
    #[error("gateway.unauthorized")]
    Unauthorized,
    #[error("gateway.not_found")]
    NotFound,
    #[error("gateway.validation")]
    Validation(FieldErrors),
    #[error("gateway.unexpected_status")]
    Unexpected(u16),
}

impl GatewayError {
    pub fn network() -> Self {
        GatewayError::Network
    }
    pub fn unauthorized() -> Self {
        GatewayError::Unauthorized
    }
    pub fn not_found() -> Self {
        GatewayError::NotFound
    }
    pub fn validation(errors: FieldErrors) -> Self {
        GatewayError::Validation(errors)
    }

    /// First backend message for `field`, if this is a validation error carrying it.
    pub fn field_message(&self, field: &str) -> Option<&str> {
        match self {
            GatewayError::Validation(errors) => errors
                .get(field)
                .and_then(|messages| messages.first())
                .map(String::as_str),
            _ => None,
        }
    }
}

/// Errors raised by the local storage ports.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage.write_failed")]
    WriteFailed,
    #[error("storage.corrupted")]
    Corrupted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_first_message_of_field() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "cpf_cnpj".to_string(),
            vec!["already registered".to_string(), "second".to_string()],
        );
        let error = GatewayError::validation(errors);

        assert_eq!(error.field_message("cpf_cnpj"), Some("already registered"));
        assert_eq!(error.field_message("email"), None);
    }

    #[test]
    fn should_not_return_field_message_for_other_errors() {
        assert_eq!(GatewayError::unauthorized().field_message("email"), None);
    }

    #[test]
    fn should_display_code_style_identifiers() {
        assert_eq!(GatewayError::network().to_string(), "gateway.network");
        assert_eq!(StorageError::Corrupted.to_string(), "storage.corrupted");
    }
}
