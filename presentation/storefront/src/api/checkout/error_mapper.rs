use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            CheckoutError::EmptyGroup => {
                error_response(StatusCode::BAD_REQUEST, "EmptyCart", &message)
            }
            CheckoutError::ClientNameRequired | CheckoutError::ClientPhoneRequired => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            CheckoutError::Gateway(err) => err.into_error_response(),
        }
    }
}
