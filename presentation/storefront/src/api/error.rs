use std::collections::BTreeMap;

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::errors::GatewayError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Field errors returned by the marketplace backend, verbatim.
    #[oai(skip_serializing_if_is_none)]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            fields: None,
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn error_response(
    status: StatusCode,
    name: &str,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(name, message)))
}

impl IntoErrorResponse for GatewayError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            GatewayError::Network => {
                error_response(StatusCode::BAD_GATEWAY, "NetworkError", "gateway.network")
            }
            GatewayError::Unauthorized => error_response(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "gateway.unauthorized",
            ),
            GatewayError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "gateway.not_found")
            }
            GatewayError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "gateway.validation".to_string(),
                    fields: Some(fields),
                }),
            ),
            GatewayError::Unexpected(_) => error_response(
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "gateway.unexpected_status",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::FieldErrors;

    #[test]
    fn should_carry_backend_field_errors() {
        let mut fields = FieldErrors::new();
        fields.insert("email".to_string(), vec!["Já cadastrado".to_string()]);

        let (status, json) = GatewayError::Validation(fields).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json.0.fields.unwrap()["email"],
            vec!["Já cadastrado".to_string()]
        );
    }

    #[test]
    fn should_report_backend_outages_as_bad_gateway() {
        let (network, _) = GatewayError::Network.into_error_response();
        let (unexpected, json) = GatewayError::Unexpected(500).into_error_response();

        assert_eq!(network, StatusCode::BAD_GATEWAY);
        assert_eq!(unexpected, StatusCode::BAD_GATEWAY);
        assert_eq!(json.0.message, "gateway.unexpected_status");
    }
}
