use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;
use business::domain::errors::FieldErrors;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

fn field_error(field: &str, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    let mut fields = FieldErrors::new();
    fields.insert(field.to_string(), vec![message.to_string()]);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            name: "ValidationError".to_string(),
            message: message.to_string(),
            fields: Some(fields),
        }),
    )
}

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            AuthError::PasswordTooShort
            | AuthError::PasswordTooCommon
            | AuthError::PasswordNeedsLettersAndDigits => field_error("password", &message),
            AuthError::PasswordMismatch => field_error("confirm_password", &message),
            AuthError::FieldRequired(field) => field_error(field, &message),
            AuthError::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "InvalidCredentials", &message)
            }
            AuthError::TokenMissing => {
                error_response(StatusCode::BAD_GATEWAY, "UpstreamError", &message)
            }
            AuthError::Storage(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", &message)
            }
            AuthError::Gateway(err) => err.into_error_response(),
        }
    }
}
